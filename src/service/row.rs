use super::*;
use sqlx::{Row as _, TypeInfo as _, ValueRef as _, sqlite::SqliteRow};

/// One result row, columns in select order.
pub type Row = Vec<Value>;

pub(crate) fn decode_row(row: &SqliteRow) -> Result<Row> {
    (0..row.len()).map(|index| decode_column(row, index)).collect()
}

/// Decode by the value's storage class rather than the declared column type,
/// SQLite lets any column hold any class.
fn decode_column(row: &SqliteRow, index: usize) -> Result<Value> {
    let storage = {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(Value::Null);
        }
        raw.type_info().name().to_ascii_uppercase()
    };
    let value = match storage.as_str() {
        "INTEGER" | "BIGINT" | "INT" | "BOOLEAN" => Value::Integer(row.try_get_unchecked(index)?),
        "REAL" | "FLOAT" | "DOUBLE" | "NUMERIC" => Value::Real(row.try_get_unchecked(index)?),
        "BLOB" => Value::Blob(row.try_get_unchecked(index)?),
        _ => Value::Text(row.try_get_unchecked(index)?),
    };
    Ok(value)
}
