//! # Delimatch - Nested-Delimiter Matching Engine
//!
//! Classifies sequences of bracket glyphs `( ) [ ] { }` as well-formed or
//! malformed under the standard balanced-delimiter grammar: the empty
//! sequence is well-formed, and so is any concatenation of groups
//! `Open(f) … Close(f)` whose bodies are themselves well-formed.
//!
//! ## Quick Start
//!
//! ```rust
//! use delimatch::{classify, Verdict};
//!
//! # fn main() -> delimatch::Result<()> {
//! assert_eq!(classify("{[()]}")?, Verdict::WellFormed);
//! assert_eq!(classify("{[(])}")?, Verdict::Malformed);
//! # Ok(())
//! # }
//! ```
//!
//! A glyph outside the bracket alphabet is an input-validity error, distinct
//! from a structural imbalance:
//!
//! ```rust
//! use delimatch::{classify, Error};
//!
//! let err = classify("(a)").unwrap_err();
//! assert_eq!(
//!     err,
//!     Error::UnrecognizedCharacter {
//!         glyph: 'a',
//!         column: 2
//!     }
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Input text → Scanner → Tokens → Matcher → Verdict
//! ```
//!
//! - [`Scanner`] - Tokenizes input into bracket tokens
//! - [`Matcher`] - Runs the pending-opener stack to a verdict
//! - [`classify`] - Wraps both for one-call classification
//!
//! The components compose directly when the token stream itself is of
//! interest:
//!
//! ```rust
//! use delimatch::{Matcher, Scanner, Verdict};
//!
//! # fn main() -> delimatch::Result<()> {
//! let mut scanner = Scanner::new("()[]");
//! let tokens = scanner.scan_tokens()?;
//! assert_eq!(tokens.len(), 5); // four glyphs plus end-of-input
//!
//! let mut matcher = Matcher::new(tokens);
//! assert_eq!(matcher.verdict(), Verdict::WellFormed);
//! # Ok(())
//! # }
//! ```
//!
//! A classification run is a pure function of its input: each run owns its
//! scan cursor and pending-opener stack exclusively, so independent runs may
//! execute concurrently without coordination. Time is linear in input
//! length; auxiliary space is bounded by the nesting depth.

/// Version of the delimatch engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod matcher;

pub use error::{Error, Result};
pub use lexer::{DelimiterFamily, Scanner, Token, TokenKind};
pub use matcher::{Matcher, Verdict};

/// Classifies a complete input as well-formed or malformed
///
/// Scans the whole input, feeds the tokens to a fresh [`Matcher`], and
/// returns its verdict. The first glyph outside the bracket alphabet aborts
/// the run with [`Error::UnrecognizedCharacter`]; no verdict is produced in
/// that case.
pub fn classify(input: &str) -> Result<Verdict> {
    let mut scanner = Scanner::new(input);
    let tokens = scanner.scan_tokens()?;

    let verdict = Matcher::new(tokens).verdict();
    tracing::trace!("classified {} glyph(s) as {}", input.len(), verdict);
    Ok(verdict)
}
