use super::*;

/// An extra query attached to a [`Dao`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// SQL derived from the name, which must follow the `sql_<words>` convention.
    Inferred { name: String },
    /// SQL given verbatim, with `{}` placeholders filled positionally.
    Literal { name: String, text: String },
}

/// A query ready to be formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Statement(Statement),
    Inferred(Template),
    Literal(Template),
}

impl Declaration {
    pub fn inferred(name: impl Into<String>) -> Self {
        Declaration::Inferred { name: name.into() }
    }

    pub fn literal(name: impl Into<String>, text: impl Into<String>) -> Self {
        Declaration::Literal {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Inferred { name } | Declaration::Literal { name, .. } => name,
        }
    }

    pub fn compile(&self, model: &Model) -> Result<Query> {
        match self {
            Declaration::Inferred { name } => compile_convention(model, name).map(Query::Inferred),
            Declaration::Literal { text, .. } => Template::positional(text.as_str()).map(Query::Literal),
        }
    }
}

impl Query {
    pub fn format(&self, model: &Model, quoting: Quoting, args: &Args) -> Result<String> {
        match (self, args) {
            (Query::Statement(statement), args) => statement.render(model, quoting, args),
            (Query::Inferred(template), Args::Keywords(keywords)) => {
                template.format_named(keywords, quoting)
            }
            (Query::Inferred(template), Args::None) => {
                template.format_named(&HashMap::new(), quoting)
            }
            (Query::Literal(template), Args::Positional(values)) => template.format_positional(values),
            (Query::Literal(template), Args::None) => template.format_positional(&[]),
            (Query::Inferred(template) | Query::Literal(template), args) => Err(Error::Format(
                format!("`{}` cannot be called with {}", template.text(), args.describe()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[rstest]
    fn literal_text_is_kept_verbatim(chats: Model) {
        let query = Declaration::literal("custom_find", "SELECT * FROM chats WHERE last_name = Vouk")
            .compile(&chats)
            .unwrap();
        assert_eq!(
            query.format(&chats, Quoting::Raw, &Args::None).unwrap(),
            "SELECT * FROM chats WHERE last_name = Vouk"
        );
    }

    #[rstest]
    fn inferred_rejects_positional_arguments(chats: Model) {
        let query = Declaration::inferred("sql_find_all_by_type").compile(&chats).unwrap();
        assert!(matches!(
            query.format(&chats, Quoting::Raw, &Args::positional(["usual"])),
            Err(Error::Format(_))
        ));
    }

    #[rstest]
    fn inferred_without_keywords_reports_missing_key(chats: Model) {
        let query = Declaration::inferred("sql_find_all_by_type").compile(&chats).unwrap();
        assert!(matches!(
            query.format(&chats, Quoting::Raw, &Args::None),
            Err(Error::Lookup(_))
        ));
    }

    #[rstest]
    fn inferred_name_must_follow_convention(chats: Model) {
        assert!(matches!(
            Declaration::inferred("custom_find").compile(&chats),
            Err(Error::ConventionViolation(_))
        ));
    }

    #[rstest]
    fn literal_with_named_placeholder_is_rejected(chats: Model) {
        assert!(matches!(
            Declaration::literal("custom_find", "SELECT * FROM chats WHERE id = {id}").compile(&chats),
            Err(Error::ConventionViolation(_))
        ));
    }
}
