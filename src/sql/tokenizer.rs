use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};

/// Split a convention name into words on `_`.
///
/// Behavior:
/// - Every `_` ends a word, so `a__b` yields `a`, an empty word, then `b`.
/// - A word is a keyword only when spelled exactly in lowercase; everything else,
///   `And` or `ALL` included, is a plain word with its casing kept.
/// - The empty string yields a single empty word.
///
/// Never fails; deciding whether the words make sense is the compiler's job.
pub fn tokenize(name: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, _) in name.match_indices('_') {
        out.push(classify(name, start, i));
        start = i + 1;
    }
    out.push(classify(name, start, name.len()));
    out
}

fn classify(name: &str, start: usize, end: usize) -> Token {
    let text = &name[start..end];
    let kind = Keyword::from_word(text)
        .map(TokenKind::Keyword)
        .unwrap_or_else(|| TokenKind::Word(text.to_string()));
    Token::new(kind, start, end)
}
