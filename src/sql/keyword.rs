//! Control words recognised inside a convention query name.
//!
//! A convention name such as `find_all_by_last_name_and_first_name` is a run of
//! underscore separated words. A handful of them steer the shape of the
//! generated statement; every other word is part of a field name.
//!
//! Design notes:
//! - Keywords are matched exactly and only in lowercase. `And` or `ALL` are
//!   ordinary words and end up in field names.
//! - `as_str` provides the spelling used in query names.
//!
//! Compatibility:
//! - Adding a keyword changes the meaning of existing names that happen to use
//!   the word as part of a field name (e.g. a field called `order_by` would no
//!   longer be reachable once `order` became a keyword). Extend with care.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    Find,
    All,
    By,
    And,
    Delete,
}

impl Keyword {
    /// Classify a word of a query name. Returns `None` for anything that is not
    /// spelled exactly like a keyword.
    pub fn from_word(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "select" => Select,
            "find" => Find,
            "all" => All,
            "by" => By,
            "and" => And,
            "delete" => Delete,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "select",
            Find => "find",
            All => "all",
            By => "by",
            And => "and",
            Delete => "delete",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
