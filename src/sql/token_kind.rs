//! Token kind definitions for convention query names.
//!
//! See `keyword.rs` for the `Keyword` enum and `tokenizer.rs` for tokenization.

use crate::sql::keyword::Keyword;

/// Classification for a word produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Piece of a field name, original casing preserved. May be empty when the
    /// name contains consecutive underscores.
    Word(String),
    /// Recognized control word.
    Keyword(Keyword),
}

impl TokenKind {
    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            TokenKind::Keyword(k) => Some(*k),
            TokenKind::Word(_) => None,
        }
    }

    /// Returns the text if this token is a `Word`.
    pub fn word(&self) -> Option<&str> {
        match self {
            TokenKind::Word(s) => Some(s.as_str()),
            TokenKind::Keyword(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_detection() {
        let tk = TokenKind::Keyword(Keyword::By);
        assert!(tk.is_keyword(Keyword::By));
        assert!(!tk.is_keyword(Keyword::And));
        assert_eq!(tk.keyword(), Some(Keyword::By));
        assert!(tk.word().is_none());
    }

    #[test]
    fn word_access() {
        let tk = TokenKind::Word("last".into());
        assert_eq!(tk.word(), Some("last"));
        assert!(tk.keyword().is_none());
    }
}
