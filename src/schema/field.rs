use super::*;

/// One column of a model. Built once at declaration time and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub dtype: String,
    pub prefix: Option<String>,
    pub postfix: Option<String>,
    pub reference: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, dtype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dtype: dtype.into(),
            prefix: None,
            postfix: None,
            reference: None,
        }
    }

    /// Text written directly before the column name, no separator is added.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Column constraint written after the type, e.g. `PRIMARY KEY`.
    pub fn postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = Some(postfix.into());
        self
    }

    /// Foreign key target in `table(column)` form, see [`Model::reference`].
    pub fn references(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn is_text(&self) -> bool {
        self.dtype == TEXT_DTYPE
    }

    pub fn is_id(&self) -> bool {
        self.name == ID_FIELD
    }

    /// Column definition as it appears inside `CREATE TABLE`.
    pub fn sql_description(&self) -> String {
        let mut sql = self.prefix.clone().unwrap_or_default();
        sql.push_str(&format!("{} {}", self.name, self.dtype));
        if let Some(postfix) = &self.postfix {
            sql.push_str(&format!(" {postfix}"));
        }
        if let Some(reference) = &self.reference {
            sql.push_str(&format!(
                ",\nFOREIGN KEY ({}) REFERENCES {reference}",
                self.name
            ));
        }
        sql
    }

    /// Renders `value` as a SQL literal for this column: text values are quoted,
    /// everything else (and `NULL`) is written bare.
    pub fn literal(&self, value: &Value, quoting: Quoting) -> String {
        if self.is_text() && !value.is_null() {
            format!("'{}'", quoting.apply(&value.to_string()))
        } else {
            value.to_string()
        }
    }
}
