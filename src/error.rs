//! Error types for the delimiter matching engine

use thiserror::Error;

/// Classification errors
///
/// Structural imbalance is deliberately not represented here: an unbalanced
/// input is the normal [`Verdict::Malformed`](crate::Verdict::Malformed)
/// outcome of a run, never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input contains a glyph outside the six recognized brackets
    ///
    /// **Triggered by:** any character other than `( ) [ ] { }`
    /// **Example:** `classify("(a)")` fails at column 2
    /// **Recovery:** none within a run; the caller must sanitize the input
    #[error("Unrecognized character '{glyph}' at column {column}")]
    UnrecognizedCharacter {
        /// The offending glyph
        glyph: char,
        /// Column where it appears (1-indexed)
        column: usize,
    },
}

/// Result type for delimatch operations
pub type Result<T> = std::result::Result<T, Error>;
