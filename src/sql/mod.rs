//! Tokenization of convention query names.
//!
//! A convention query is declared by name only, e.g.
//! `sql_find_all_by_last_name_and_first_name`. Once the `sql_` prefix is
//! stripped the remainder is split on `_` into words; a small set of them are
//! control keywords and the rest are glued back together into field names by
//! the compiler in `crate::query`.
//!
//! Modules:
//! - `keyword`    : Control words (`select`, `find`, `all`, `by`, `and`, `delete`).
//! - `token_kind` : Keyword or field-name word.
//! - `token`      : Token struct pairing a `TokenKind` with its span in the name.
//! - `tokenizer`  : Single pass splitter producing a `Vec<Token>`.
//!
//! Example:
//! ```rust
//! use daogen::sql::prelude::*;
//!
//! let tokens = tokenize("find_all_by_type");
//! assert!(tokens[0].is_keyword(Keyword::Find));
//! assert_eq!(tokens[3].word(), Some("type"));
//! ```

pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;

/// Convenience prelude re‑exporting the most commonly used items.
pub mod prelude {
    pub use super::{Keyword, Token, TokenKind, tokenize};
}
