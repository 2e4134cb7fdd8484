use serde::{Deserialize, Serialize};

/// Terminal outcome of one classification run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Every opener has exactly one correctly nested, same-family closer
    WellFormed,
    /// A closer without a matching pending opener, a family mismatch, or
    /// leftover unmatched openers at end of input
    Malformed,
}

impl Verdict {
    /// Check if the verdict is well-formed
    pub fn is_well_formed(&self) -> bool {
        matches!(self, Verdict::WellFormed)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::WellFormed => write!(f, "well-formed"),
            Verdict::Malformed => write!(f, "malformed"),
        }
    }
}
