//! Token model tying a `TokenKind` to its position in the query name.
//!
//! Offsets end up in `Error::CustomSqlBuild` so a failed build points at the
//! words of the name that could not be resolved.
use crate::sql::{keyword::Keyword, token_kind::TokenKind};

/// A word with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`
/// - `[start, end)` is a valid slice range for the tokenized name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    pub fn word(&self) -> Option<&str> {
        self.kind.word()
    }

    pub fn keyword(&self) -> Option<Keyword> {
        self.kind.keyword()
    }

    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_detection() {
        let t = Token::new(TokenKind::Keyword(Keyword::Find), 0, 4);
        assert!(t.is_keyword(Keyword::Find));
        assert_eq!(t.span(), (0, 4));
        assert!(t.word().is_none());
    }
}
