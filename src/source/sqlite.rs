//! SQLite record source
//!
//! Holds one explicitly opened, read-only connection for the lifetime of
//! the command that created it.

use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags, Row};
use serde_json::{Map, Number, Value};

use super::errors::{SourceError, SourceResult};
use super::row::record_from_columns;
use super::RecordSource;
use crate::directory::Record;

/// Default directory table
pub const DEFAULT_TABLE: &str = "empresas";

/// Record source backed by a SQLite table
pub struct SqliteSource {
    conn: Connection,
    path: PathBuf,
    table: String,
}

impl SqliteSource {
    /// Opens an existing database read-only
    pub fn open(path: impl AsRef<Path>, table: impl Into<String>) -> SourceResult<Self> {
        let path = path.as_ref().to_path_buf();
        let table = validate_table(table.into())?;

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| SourceError::unavailable(path.display().to_string(), e.to_string()))?;

        Ok(Self { conn, path, table })
    }

    /// Wraps an already open connection
    pub fn from_connection(conn: Connection, table: impl Into<String>) -> SourceResult<Self> {
        let table = validate_table(table.into())?;
        Ok(Self {
            conn,
            path: PathBuf::from(":memory:"),
            table,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    fn query_records(&self, sql: &str, id: Option<i64>) -> SourceResult<Vec<Record>> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = match id {
            Some(id) => stmt.query(params![id])?,
            None => stmt.query([])?,
        };

        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(record_from_columns(row_columns(row, &columns)?)?);
        }
        Ok(records)
    }
}

impl RecordSource for SqliteSource {
    fn fetch_all(&self) -> SourceResult<Vec<Record>> {
        let sql = format!("SELECT * FROM {} ORDER BY id ASC", self.table);
        self.query_records(&sql, None)
    }

    fn fetch_by_id(&self, id: i64) -> SourceResult<Option<Record>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?1", self.table);
        Ok(self.query_records(&sql, Some(id))?.into_iter().next())
    }

    fn ping(&self) -> SourceResult<()> {
        self.conn
            .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(|e| SourceError::unavailable(self.describe(), e.to_string()))?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("sqlite:{}#{}", self.path.display(), self.table)
    }
}

/// Reads every column of a row into a JSON map
fn row_columns(row: &Row<'_>, columns: &[String]) -> SourceResult<Map<String, Value>> {
    let mut map = Map::with_capacity(columns.len());
    for (idx, name) in columns.iter().enumerate() {
        let value = match row.get_ref(idx)? {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::from(i),
            ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                Value::String(String::from_utf8_lossy(bytes).into_owned())
            }
        };
        map.insert(name.clone(), value);
    }
    Ok(map)
}

/// True for plain SQL identifiers, the only table names interpolated into queries
pub fn is_valid_table_name(table: &str) -> bool {
    let mut chars = table.chars();
    match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    }
}

fn validate_table(table: String) -> SourceResult<String> {
    if is_valid_table_name(&table) {
        Ok(table)
    } else {
        Err(SourceError::InvalidTable(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> SqliteSource {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE empresas (
                id INTEGER PRIMARY KEY,
                empresa TEXT,
                sector TEXT,
                contacto TEXT,
                telefono INTEGER,
                pa TEXT,
                cuit TEXT
            );
            INSERT INTO empresas (id, empresa, sector, telefono, pa, cuit)
                VALUES (3, 'Acme', 'Agro', 3794000000, '[\"Arroz\"]', '30-1');
            INSERT INTO empresas (id, empresa, sector) VALUES (1, 'Acme', 'Textil');
            INSERT INTO empresas (id, empresa, sector, contacto) VALUES (2, 'Beta', 'Agro', NULL);",
        )
        .unwrap();
        SqliteSource::from_connection(conn, DEFAULT_TABLE).unwrap()
    }

    #[test]
    fn test_fetch_all_orders_by_id() {
        let records = seeded().fetch_all().unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_columns_map_to_fields() {
        let record = seeded().fetch_by_id(3).unwrap().unwrap();
        assert_eq!(record.company(), Some("Acme"));
        assert_eq!(record.phone(), Some("3794000000"));
        assert_eq!(record.products().items(), &["Arroz"]);
        assert_eq!(record.extra.get("cuit"), Some(&Value::from("30-1")));
        assert_eq!(record.contact(), None);
    }

    #[test]
    fn test_fetch_by_id_missing() {
        assert!(seeded().fetch_by_id(99).unwrap().is_none());
    }

    #[test]
    fn test_ping() {
        assert!(seeded().ping().is_ok());
    }

    #[test]
    fn test_missing_table_is_query_error() {
        let conn = Connection::open_in_memory().unwrap();
        let source = SqliteSource::from_connection(conn, "empresas").unwrap();
        assert!(matches!(source.fetch_all(), Err(SourceError::Query(_))));
    }

    #[test]
    fn test_table_name_validation() {
        assert!(validate_table("empresas".into()).is_ok());
        assert!(validate_table("_t2".into()).is_ok());
        assert!(validate_table("".into()).is_err());
        assert!(validate_table("2t".into()).is_err());
        assert!(validate_table("empresas; DROP TABLE x".into()).is_err());
    }

    #[test]
    fn test_open_missing_file_is_unavailable() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = SqliteSource::open(tmp.path().join("missing.db"), DEFAULT_TABLE);
        assert!(matches!(result, Err(SourceError::Unavailable { .. })));
    }
}
