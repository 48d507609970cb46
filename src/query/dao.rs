use super::*;

/// A model bound to its compiled query set.
///
/// Defining a `Dao` compiles every query up front: the fixed-shape
/// [`STATEMENTS`] plus the extra declarations. After that the value is
/// immutable and can be shared freely; calls only format text.
#[derive(Debug, Clone)]
pub struct Dao {
    model: Model,
    quoting: Quoting,
    queries: HashMap<String, Query>,
    // Registration order, for listing.
    names: Vec<String>,
}

impl Dao {
    pub fn define(model: Model, declarations: impl IntoIterator<Item = Declaration>) -> Result<Self> {
        match model.fields().iter().filter(|f| f.is_id()).count() {
            1 => {}
            0 => {
                return Err(Error::ConventionViolation(format!(
                    "model `{}` needs an `{ID_FIELD}` field to get a data-access object",
                    model.table()
                )));
            }
            n => {
                return Err(Error::ConventionViolation(format!(
                    "model `{}` declares `{ID_FIELD}` {n} times",
                    model.table()
                )));
            }
        }

        let mut queries = HashMap::new();
        let mut names = Vec::new();
        for statement in STATEMENTS {
            queries.insert(statement.name().to_string(), Query::Statement(statement));
            names.push(statement.name().to_string());
        }
        for declaration in declarations {
            let name = declaration.name();
            if queries.contains_key(name) {
                return Err(Error::ConventionViolation(format!(
                    "`{name}` is declared more than once on `{}`",
                    model.table()
                )));
            }
            let query = declaration.compile(&model)?;
            queries.insert(name.to_string(), query);
            names.push(name.to_string());
        }

        debug!(
            "Defined data-access object for `{}` with {} queries",
            model.table(),
            names.len()
        );
        Ok(Self {
            model,
            quoting: Quoting::default(),
            queries,
            names,
        })
    }

    /// Opt into escaping single quotes inside text values.
    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn quoting(&self) -> Quoting {
        self.quoting
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn query(&self, name: &str) -> Result<&Query> {
        self.queries.get(name).ok_or_else(|| {
            Error::Lookup(format!(
                "no query `{name}` on `{}`",
                self.model.table()
            ))
        })
    }

    /// Format the query registered under `name`.
    pub fn call<'a>(&self, name: &str, args: impl Into<Args<'a>>) -> Result<String> {
        let args = args.into();
        trace!("Calling `{name}` with {}", args.describe());
        self.query(name)?.format(&self.model, self.quoting, &args)
    }

    pub fn sql_create_table_if_not_exists(&self) -> String {
        self.model.sql_create_table_if_not_exists()
    }

    pub fn get_one(&self, id: impl Into<Value>) -> String {
        get_one(&self.model, &id.into(), self.quoting)
    }

    pub fn find_all(&self) -> String {
        find_all(&self.model)
    }

    pub fn save(&self, obj: &Instance) -> String {
        save(&self.model, obj, self.quoting)
    }

    pub fn exists(&self, obj: &Instance) -> String {
        exists(&self.model, obj, self.quoting)
    }

    pub fn update(&self, obj: &Instance) -> Result<String> {
        update(&self.model, obj, self.quoting)
    }

    pub fn delete_by_id(&self, id: impl Into<Value>) -> String {
        delete_by_id(&self.model, &id.into(), self.quoting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[fixture]
    fn chat_dao(chats: Model) -> Dao {
        Dao::define(
            chats,
            [
                Declaration::inferred("sql_find_all_by_type"),
                Declaration::inferred("sql_delete_all_by_type"),
                Declaration::inferred("sql_delete_by_type"),
                Declaration::inferred("sql_find_all_by_last_name_and_first_name"),
                Declaration::literal("custom_find", "SELECT * FROM chats WHERE last_name = Vouk"),
                Declaration::literal("custom_find_by_name", "SELECT * FROM chats WHERE last_name = '{}' AND first_name = '{}'"),
            ],
        )
        .expect("chat dao should define")
    }

    #[rstest]
    fn defines_plain_dao(chats: Model) {
        let dao = Dao::define(chats, []).unwrap();
        assert_eq!(
            dao.names().collect::<Vec<_>>(),
            STATEMENTS.map(Statement::name).to_vec()
        );
    }

    #[test]
    fn requires_id_field() {
        let model = Model::define("notes", [Field::new("body", "text")]).unwrap();
        assert!(matches!(
            Dao::define(model, []),
            Err(Error::ConventionViolation(_))
        ));
    }

    #[test]
    fn rejects_repeated_id_field() {
        let model = Model::define("notes", [Field::new("id", "integer"), Field::new("id", "text")]).unwrap();
        assert!(matches!(
            Dao::define(model, []),
            Err(Error::ConventionViolation(_))
        ));
    }

    #[rstest]
    fn fixed_statements(chat_dao: Dao, vouk: Instance) {
        assert_eq!(chat_dao.get_one(0), "SELECT * FROM chats\nWHERE id = 0\nLIMIT 1;");
        assert_eq!(chat_dao.find_all(), "SELECT * FROM chats;");
        assert_eq!(
            chat_dao.save(&vouk),
            "INSERT INTO chats(type,last_name,first_name,username)\nVALUES ('usual','Vouk','Ilya','voilalex')"
        );
        assert_eq!(
            chat_dao.exists(&vouk),
            "SELECT count(*) FROM chats WHERE type = 'usual' AND last_name = 'Vouk' AND first_name = 'Ilya' AND username = 'voilalex';"
        );
        assert_eq!(
            chat_dao.update(&vouk.clone().with("id", 0)).unwrap(),
            "UPDATE chats SET type='usual', last_name='Vouk', first_name='Ilya', username='voilalex'\nWHERE id=0"
        );
        assert_eq!(chat_dao.delete_by_id(1), "DELETE FROM chats\nWHERE id=1");
    }

    #[rstest]
    #[case("sql_find_all_by_type", vec![("type", "usual")], "SELECT * FROM chats WHERE type = 'usual'")]
    #[case("sql_delete_all_by_type", vec![("type", "usual")], "DELETE FROM chats WHERE type = 'usual'")]
    #[case("sql_delete_by_type", vec![("type", "type")], "DELETE FROM chats WHERE type = 'type'")]
    #[case(
        "sql_find_all_by_last_name_and_first_name",
        vec![("first_name", "Ilya"), ("last_name", "Vouk")],
        "SELECT * FROM chats WHERE last_name = 'Vouk' AND first_name = 'Ilya'"
    )]
    fn calls_convention_queries(
        chat_dao: Dao,
        #[case] name: &str,
        #[case] keywords: Vec<(&str, &str)>,
        #[case] expected: &str,
    ) {
        assert_eq!(chat_dao.call(name, Args::keywords(keywords)).unwrap(), expected);
    }

    #[rstest]
    fn calls_literal_queries(chat_dao: Dao) {
        assert_eq!(
            chat_dao.call("custom_find", Args::None).unwrap(),
            "SELECT * FROM chats WHERE last_name = Vouk"
        );
        assert_eq!(
            chat_dao
                .call("custom_find_by_name", Args::positional(["Vouk", "Ilya"]))
                .unwrap(),
            "SELECT * FROM chats WHERE last_name = 'Vouk' AND first_name = 'Ilya'"
        );
        assert!(matches!(
            chat_dao.call("custom_find_by_name", Args::positional(["Vouk"])),
            Err(Error::Format(_))
        ));
    }

    #[rstest]
    fn calls_fixed_statements_by_name(chat_dao: Dao, vouk: Instance) {
        assert_eq!(chat_dao.call("sql_get_one", Args::id(0)).unwrap(), chat_dao.get_one(0));
        assert_eq!(chat_dao.call("sql_find_all", Args::None).unwrap(), chat_dao.find_all());
        assert_eq!(chat_dao.call("sql_save", &vouk).unwrap(), chat_dao.save(&vouk));
    }

    #[rstest]
    fn missing_keyword_is_lookup_error(chat_dao: Dao) {
        assert!(matches!(
            chat_dao.call("sql_find_all_by_last_name_and_first_name", Args::keywords([("last_name", "Vouk")])),
            Err(Error::Lookup(_))
        ));
    }

    #[rstest]
    fn unknown_query_is_lookup_error(chat_dao: Dao) {
        assert!(matches!(
            chat_dao.call("sql_find_all_by_username", Args::None),
            Err(Error::Lookup(_))
        ));
    }

    #[rstest]
    fn bad_convention_query_fails_definition(chats: Model) {
        assert!(matches!(
            Dao::define(chats, [Declaration::inferred("sql_delete_by_type_name")]),
            Err(Error::CustomSqlBuild { .. })
        ));
    }

    #[rstest]
    #[case(Declaration::inferred("sql_find_all"))]
    #[case(Declaration::literal("sql_get_one", "SELECT 1"))]
    fn declarations_cannot_shadow_fixed_statements(chats: Model, #[case] declaration: Declaration) {
        assert!(matches!(
            Dao::define(chats, [declaration]),
            Err(Error::ConventionViolation(_))
        ));
    }

    #[rstest]
    fn duplicate_declarations_are_rejected(chats: Model) {
        assert!(matches!(
            Dao::define(
                chats,
                [
                    Declaration::inferred("sql_find_all_by_type"),
                    Declaration::literal("sql_find_all_by_type", "SELECT 1"),
                ]
            ),
            Err(Error::ConventionViolation(_))
        ));
    }

    #[rstest]
    fn escaped_mode_applies_to_convention_queries(chat_dao: Dao) {
        let dao = chat_dao.with_quoting(Quoting::Escaped);
        assert_eq!(
            dao.call("sql_find_all_by_type", Args::keywords([("type", "it's")])).unwrap(),
            "SELECT * FROM chats WHERE type = 'it''s'"
        );
    }

    #[rstest]
    fn templates_are_shared_across_threads(chat_dao: Dao) {
        let dao = std::sync::Arc::new(chat_dao);
        let handles = ["usual", "group", "channel"].map(|kind| {
            let dao = dao.clone();
            std::thread::spawn(move || dao.call("sql_find_all_by_type", Args::keywords([("type", kind)])))
        });
        for (handle, kind) in handles.into_iter().zip(["usual", "group", "channel"]) {
            assert_eq!(
                handle.join().unwrap().unwrap(),
                format!("SELECT * FROM chats WHERE type = '{kind}'")
            );
        }
    }
}
