use serde::{Deserialize, Serialize};

/// A bracket family
///
/// Open and close glyphs of the same family must pair. The enumeration is
/// closed; it is never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelimiterFamily {
    /// Round parentheses `(` `)`
    Paren,
    /// Square brackets `[` `]`
    Square,
    /// Curly braces `{` `}`
    Curly,
}

impl DelimiterFamily {
    /// All families, in symbol-table order
    pub const ALL: [DelimiterFamily; 3] = [
        DelimiterFamily::Paren,
        DelimiterFamily::Square,
        DelimiterFamily::Curly,
    ];

    /// The glyph that opens a group of this family
    pub fn open_glyph(&self) -> char {
        match self {
            DelimiterFamily::Paren => '(',
            DelimiterFamily::Square => '[',
            DelimiterFamily::Curly => '{',
        }
    }

    /// The glyph that closes a group of this family
    pub fn close_glyph(&self) -> char {
        match self {
            DelimiterFamily::Paren => ')',
            DelimiterFamily::Square => ']',
            DelimiterFamily::Curly => '}',
        }
    }
}

/// A single token from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Column where the glyph appears (1-indexed); for `Eof`, one past the
    /// last glyph
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, column: usize) -> Self {
        Token { kind, column }
    }
}

/// All possible token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Opening delimiter of the given family
    Open(DelimiterFamily),
    /// Closing delimiter of the given family
    Close(DelimiterFamily),
    /// End of input marker
    Eof,
}

impl TokenKind {
    /// Symbol table lookup: the token kind for a bracket glyph
    ///
    /// Returns `None` for any character outside the six recognized brackets.
    pub fn for_glyph(c: char) -> Option<TokenKind> {
        match c {
            '(' => Some(TokenKind::Open(DelimiterFamily::Paren)),
            ')' => Some(TokenKind::Close(DelimiterFamily::Paren)),
            '[' => Some(TokenKind::Open(DelimiterFamily::Square)),
            ']' => Some(TokenKind::Close(DelimiterFamily::Square)),
            '{' => Some(TokenKind::Open(DelimiterFamily::Curly)),
            '}' => Some(TokenKind::Close(DelimiterFamily::Curly)),
            _ => None,
        }
    }

    /// The glyph this kind is scanned from; `Eof` has none
    pub fn glyph(&self) -> Option<char> {
        match self {
            TokenKind::Open(family) => Some(family.open_glyph()),
            TokenKind::Close(family) => Some(family.close_glyph()),
            TokenKind::Eof => None,
        }
    }

    /// Correspondence table: maps each opener to its same-family closer and
    /// back. Applying it twice is the identity. `Eof` has no counterpart.
    pub fn counterpart(&self) -> Option<TokenKind> {
        match self {
            TokenKind::Open(family) => Some(TokenKind::Close(*family)),
            TokenKind::Close(family) => Some(TokenKind::Open(*family)),
            TokenKind::Eof => None,
        }
    }

    /// Check if the token opens a group
    pub fn is_open(&self) -> bool {
        matches!(self, TokenKind::Open(_))
    }

    /// Check if the token closes a group
    pub fn is_close(&self) -> bool {
        matches!(self, TokenKind::Close(_))
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.glyph() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table_covers_bracket_glyphs() {
        for family in DelimiterFamily::ALL {
            assert_eq!(
                TokenKind::for_glyph(family.open_glyph()),
                Some(TokenKind::Open(family))
            );
            assert_eq!(
                TokenKind::for_glyph(family.close_glyph()),
                Some(TokenKind::Close(family))
            );
        }
    }

    #[test]
    fn test_symbol_table_rejects_other_glyphs() {
        assert_eq!(TokenKind::for_glyph('a'), None);
        assert_eq!(TokenKind::for_glyph(' '), None);
        assert_eq!(TokenKind::for_glyph('<'), None);
        assert_eq!(TokenKind::for_glyph('\n'), None);
    }

    #[test]
    fn test_glyph_inverts_symbol_table() {
        for c in ['(', ')', '[', ']', '{', '}'] {
            assert_eq!(TokenKind::for_glyph(c).unwrap().glyph(), Some(c));
        }
        assert_eq!(TokenKind::Eof.glyph(), None);
    }

    #[test]
    fn test_counterpart_is_self_inverse() {
        for family in DelimiterFamily::ALL {
            let open = TokenKind::Open(family);
            let close = TokenKind::Close(family);
            assert_eq!(open.counterpart(), Some(close));
            assert_eq!(close.counterpart(), Some(open));
            assert_eq!(open.counterpart().unwrap().counterpart(), Some(open));
        }
        assert_eq!(TokenKind::Eof.counterpart(), None);
    }

    #[test]
    fn test_open_close_predicates() {
        assert!(TokenKind::Open(DelimiterFamily::Curly).is_open());
        assert!(!TokenKind::Open(DelimiterFamily::Curly).is_close());
        assert!(TokenKind::Close(DelimiterFamily::Paren).is_close());
        assert!(!TokenKind::Eof.is_open());
        assert!(!TokenKind::Eof.is_close());
    }
}
