//! Column map to record conversion
//!
//! Shared by every source. The source tables are loosely typed: ids may come
//! back as text and phone numbers as integers, so known text columns are
//! stringified before the typed decode.

use serde_json::{Map, Value};

use super::errors::{SourceError, SourceResult};
use crate::directory::Record;

/// Columns decoded into `Option<String>` record fields
const TEXT_COLUMNS: &[&str] = &[
    "empresa",
    "contacto",
    "email",
    "telefono",
    "direccion",
    "ciudad",
    "web",
    "sector",
    "pa",
];

/// Builds a record from one row's column values
pub fn record_from_columns(mut columns: Map<String, Value>) -> SourceResult<Record> {
    let id = match columns.get("id") {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| SourceError::Malformed(format!("row without integer id: {:?}", columns.get("id"))))?;
    columns.insert("id".to_string(), Value::from(id));

    for name in TEXT_COLUMNS {
        if let Some(value) = columns.get_mut(*name) {
            let text = match &*value {
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                // JSON text, decoded later like any array-encoded column
                Value::Array(_) | Value::Object(_) => value.to_string(),
                Value::String(_) | Value::Null => continue,
            };
            *value = Value::String(text);
        }
    }

    serde_json::from_value(Value::Object(columns))
        .map_err(|e| SourceError::Malformed(format!("record {}: {}", id, e)))
}
