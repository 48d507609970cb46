use super::*;
use itertools::Itertools as _;

/// Fixed-shape statements every data-access object gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statement {
    GetOne,
    FindAll,
    Save,
    Exists,
    Update,
    DeleteById,
}

/// Registration order used by [`Dao::define`].
pub const STATEMENTS: [Statement; 6] = [
    Statement::GetOne,
    Statement::FindAll,
    Statement::Save,
    Statement::Exists,
    Statement::Update,
    Statement::DeleteById,
];

impl Statement {
    /// Name the statement is registered under.
    pub const fn name(self) -> &'static str {
        use Statement::*;
        match self {
            GetOne => "sql_get_one",
            FindAll => "sql_find_all",
            Save => "sql_save",
            Exists => "sql_exists",
            Update => "sql_update",
            DeleteById => "sql_delete_by_id",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        STATEMENTS.into_iter().find(|s| s.name() == name)
    }

    pub fn render(self, model: &Model, quoting: Quoting, args: &Args) -> Result<String> {
        use Statement::*;
        match (self, args) {
            (GetOne, Args::Id(id)) => Ok(get_one(model, id, quoting)),
            (FindAll, Args::None) => Ok(find_all(model)),
            (Save, Args::Instance(obj)) => Ok(save(model, obj, quoting)),
            (Exists, Args::Instance(obj)) => Ok(exists(model, obj, quoting)),
            (Update, Args::Instance(obj)) => update(model, obj, quoting),
            (DeleteById, Args::Id(id)) => Ok(delete_by_id(model, id, quoting)),
            (statement, args) => Err(Error::Format(format!(
                "`{}` cannot be called with {}",
                statement.name(),
                args.describe()
            ))),
        }
    }
}

fn id_literal(model: &Model, id: &Value, quoting: Quoting) -> String {
    match model.id_field() {
        Some(field) => field.literal(id, quoting),
        None => id.to_string(),
    }
}

/// Non-id fields holding a non-null value, in declaration order.
fn present<'a>(model: &'a Model, obj: &'a Instance) -> impl Iterator<Item = (&'a Field, &'a Value)> {
    model
        .fields()
        .iter()
        .filter(|f| !f.is_id())
        .filter_map(move |f| obj.present(&f.name).map(|v| (f, v)))
}

pub fn get_one(model: &Model, id: &Value, quoting: Quoting) -> String {
    format!(
        "SELECT * FROM {}\nWHERE id = {}\nLIMIT 1;",
        model.table(),
        id_literal(model, id, quoting)
    )
}

pub fn find_all(model: &Model) -> String {
    format!("SELECT * FROM {};", model.table())
}

pub fn save(model: &Model, obj: &Instance, quoting: Quoting) -> String {
    let (columns, values): (Vec<_>, Vec<_>) = present(model, obj)
        .map(|(f, v)| (f.name.as_str(), f.literal(v, quoting)))
        .unzip();
    if columns.is_empty() {
        return format!("INSERT INTO {} DEFAULT VALUES", model.table());
    }
    format!(
        "INSERT INTO {}({})\nVALUES ({})",
        model.table(),
        columns.join(","),
        values.join(",")
    )
}

pub fn exists(model: &Model, obj: &Instance, quoting: Quoting) -> String {
    let conditions = present(model, obj)
        .map(|(f, v)| format!("{} = {}", f.name, f.literal(v, quoting)))
        .join(" AND ");
    if conditions.is_empty() {
        format!("SELECT count(*) FROM {};", model.table())
    } else {
        format!("SELECT count(*) FROM {} WHERE {conditions};", model.table())
    }
}

/// `SET` covers every non-id field that is set, explicit nulls included.
pub fn update(model: &Model, obj: &Instance, quoting: Quoting) -> Result<String> {
    let id = obj.present(ID_FIELD).ok_or_else(|| {
        Error::Lookup(format!("cannot update `{}` without an `id` value", model.table()))
    })?;
    let assignments = model
        .fields()
        .iter()
        .filter(|f| !f.is_id())
        .filter_map(|f| obj.get(&f.name).map(|v| format!("{}={}", f.name, f.literal(v, quoting))))
        .join(", ");
    if assignments.is_empty() {
        return Err(Error::NothingToUpdate(model.table().to_string()));
    }
    Ok(format!(
        "UPDATE {} SET {assignments}\nWHERE id={}",
        model.table(),
        id_literal(model, id, quoting)
    ))
}

pub fn delete_by_id(model: &Model, id: &Value, quoting: Quoting) -> String {
    format!(
        "DELETE FROM {}\nWHERE id={}",
        model.table(),
        id_literal(model, id, quoting)
    )
}
