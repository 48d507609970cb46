use super::*;
use itertools::Itertools as _;

/// A declared table: its name plus an ordered list of fields.
///
/// Field order drives positional construction, insert column order and the
/// DDL column order. Lookups are by name, first match wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    table: String,
    fields: Vec<Field>,
}

impl Model {
    /// Declare a model. Both the table name and the field list are required.
    pub fn define(table: impl Into<String>, fields: impl IntoIterator<Item = Field>) -> Result<Self> {
        let table = table.into();
        let fields = fields.into_iter().collect::<Vec<_>>();
        if table.is_empty() {
            return Err(Error::ConventionViolation(
                "model declaration has no table name".into(),
            ));
        }
        if fields.is_empty() {
            return Err(Error::ConventionViolation(format!(
                "model `{table}` declares no fields"
            )));
        }
        for duplicate in fields.iter().map(|f| f.name.as_str()).duplicates() {
            warn!("Model `{table}` declares `{duplicate}` more than once, the first one wins");
        }
        debug!("Defined model `{table}` with {} fields", fields.len());
        Ok(Self { table, fields })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn id_field(&self) -> Option<&Field> {
        self.field(ID_FIELD)
    }

    pub fn sql_create_table_if_not_exists(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {}({})",
            self.table,
            self.fields.iter().map(Field::sql_description).join(",\n")
        )
    }

    /// `table(field)`, ready to be used as another field's foreign key target.
    pub fn reference(&self, name: &str) -> Result<String> {
        let field = self.field(name).ok_or_else(|| {
            Error::Lookup(format!("model `{}` has no field `{name}`", self.table))
        })?;
        Ok(format!("{}({})", self.table, field.name))
    }

    /// Bind values to fields in declaration order.
    pub fn instance(&self, values: impl IntoIterator<Item = impl Into<Value>>) -> Result<Instance> {
        let mut instance = Instance::new();
        let mut fields = self.fields.iter();
        for value in values {
            let field = fields.next().ok_or_else(|| {
                Error::Format(format!(
                    "model `{}` takes at most {} values",
                    self.table,
                    self.fields.len()
                ))
            })?;
            instance.set(&field.name, value);
        }
        Ok(instance)
    }
}
