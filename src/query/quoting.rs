use std::borrow::Cow;

/// How text values are written between single quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quoting {
    /// Values are pasted in unchanged. A `'` inside a value ends the literal.
    #[default]
    Raw,
    /// Single quotes inside values are doubled.
    Escaped,
}

impl Quoting {
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Quoting::Escaped if text.contains('\'') => Cow::Owned(text.replace('\'', "''")),
            _ => Cow::Borrowed(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_leaves_text_alone() {
        assert_eq!(Quoting::Raw.apply("it's"), "it's");
    }

    #[test]
    fn escaped_doubles_single_quotes() {
        assert_eq!(Quoting::Escaped.apply("it's 'x'"), "it''s ''x''");
        assert!(matches!(Quoting::Escaped.apply("plain"), Cow::Borrowed(_)));
    }
}
