use super::*;
use crate::sql::{Keyword, tokenize};

/// Names that start with this are compiled from their words.
pub const CONVENTION_PREFIX: &str = "sql_";

/// Compile a convention query name against `model` into a named template.
///
/// The words after [`CONVENTION_PREFIX`] are scanned left to right. Control
/// keywords append a fixed clause; any other word is collected into a pending
/// field name (`last`, `name` → `last_name`). Whenever a keyword or the end of
/// the name is reached the pending field is checked against the model and
/// written as a `field = {field}` condition, quoted for text fields.
///
/// `sql_find_all_by_type` on `chats` gives `SELECT * FROM chats WHERE type = '{type}'`.
pub fn compile_convention(model: &Model, name: &str) -> Result<Template> {
    let body = name
        .strip_prefix(CONVENTION_PREFIX)
        .filter(|body| !body.is_empty())
        .ok_or_else(|| {
            Error::ConventionViolation(format!(
                "`{name}` is neither a literal query nor a `{CONVENTION_PREFIX}<words>` name"
            ))
        })?;

    let tokens = tokenize(body);
    let deleting = tokens.first().is_some_and(|t| t.is_keyword(Keyword::Delete));
    // Braces in the table name are literal text, not placeholders.
    let table = model.table().replace('{', "{{").replace('}', "}}");
    let mut scan = Scan {
        model,
        query: name,
        sql: String::new(),
        pending: String::new(),
        span: None,
    };

    for token in &tokens {
        let Some(keyword) = token.keyword() else {
            let (start, end) = token.span();
            scan.push_word(
                token.word().unwrap_or_default(),
                start + CONVENTION_PREFIX.len(),
                end + CONVENTION_PREFIX.len(),
            );
            continue;
        };
        scan.flush()?;
        trace!("`{name}`: keyword `{keyword}`");
        match keyword {
            Keyword::Select | Keyword::Find => scan.sql.push_str("SELECT "),
            Keyword::All if deleting => {}
            Keyword::All => scan.sql.push_str(&format!("* FROM {table} ")),
            Keyword::By => scan.sql.push_str("WHERE "),
            Keyword::And => scan.sql.push_str("AND "),
            Keyword::Delete => scan.sql.push_str(&format!("DELETE FROM {table} ")),
        }
    }
    scan.flush()?;

    let template = Template::named(scan.sql.trim_end())?;
    debug!("Compiled `{name}` into `{}`", template.text());
    Ok(template)
}

struct Scan<'a> {
    model: &'a Model,
    query: &'a str,
    sql: String,
    pending: String,
    /// Byte range in `query` of the words merged into `pending`.
    span: Option<(usize, usize)>,
}

impl Scan<'_> {
    fn push_word(&mut self, word: &str, start: usize, end: usize) {
        if !self.pending.is_empty() {
            self.pending.push('_');
        }
        self.pending.push_str(word);
        self.span = Some(match self.span {
            Some((first, _)) => (first, end),
            None => (start, end),
        });
    }

    fn flush(&mut self) -> Result {
        let span = self.span.take();
        if self.pending.is_empty() {
            return Ok(());
        }
        let name = std::mem::take(&mut self.pending);
        let field = self.model.field(&name).ok_or_else(|| Error::CustomSqlBuild {
            query: self.query.to_string(),
            field: name.clone(),
            span: span.unwrap_or_default(),
        })?;
        if field.is_text() {
            self.sql.push_str(&format!("{name} = '{{{name}}}' "));
        } else {
            self.sql.push_str(&format!("{name} = {{{name}}} "));
        }
        Ok(())
    }
}
