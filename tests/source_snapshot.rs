//! Source and Snapshot Tests
//!
//! The one-shot load path from a configured source to an engine:
//! - SQLite and JSON sources produce the same snapshot
//! - Snapshots are ordered by id and reject duplicate ids
//! - A failed load never yields a snapshot

use std::fs;
use std::path::Path;

use exportdir::config::DirectoryConfig;
use exportdir::directory::DirectoryEngine;
use exportdir::source::{JsonFileSource, RecordSource, Snapshot, SourceError, SqliteSource};
use rusqlite::Connection;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn create_db(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE empresas (
            id INTEGER PRIMARY KEY,
            empresa TEXT,
            contacto TEXT,
            email TEXT,
            telefono TEXT,
            direccion TEXT,
            ciudad TEXT,
            web TEXT,
            sector TEXT,
            pa TEXT
        );
        INSERT INTO empresas (id, empresa, sector, web) VALUES (2, 'Beta', 'Agro', 'http://beta.com');
        INSERT INTO empresas (id, empresa, sector, pa) VALUES (1, 'Acme', 'Textil', 'Lana');
        INSERT INTO empresas (id, empresa, sector, contacto) VALUES (3, 'Acme', 'Agro', 'Ana');",
    )
    .unwrap();
}

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("exportdir.json");
    fs::write(&path, body).unwrap();
    path
}

// =============================================================================
// SQLite
// =============================================================================

/// Configured SQLite source loads an id-ordered snapshot.
#[test]
fn test_sqlite_config_to_engine() {
    let tmp = TempDir::new().unwrap();
    create_db(&tmp.path().join("directory.db"));
    let config_path = write_config(
        tmp.path(),
        r#"{"source": {"kind": "sqlite", "path": "directory.db"}}"#,
    );

    let config = DirectoryConfig::load(&config_path).unwrap();
    let source = config.open_source().unwrap();
    let snapshot = Snapshot::load(source.as_ref()).unwrap();

    let ids: Vec<i64> = snapshot.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let mut engine = DirectoryEngine::new(snapshot.records());
    assert_eq!(engine.facets().companies, vec!["Acme", "Beta"]);
    engine.set_query("ana");
    let visible: Vec<i64> = engine.visible().iter().map(|r| r.id).collect();
    assert_eq!(visible, vec![3]);
}

/// Fetch by id reads a single row.
#[test]
fn test_sqlite_fetch_by_id() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("directory.db");
    create_db(&db);

    let source = SqliteSource::open(&db, "empresas").unwrap();
    let record = source.fetch_by_id(1).unwrap().unwrap();
    assert_eq!(record.products().items(), &["Lana"]);
    assert!(source.fetch_by_id(42).unwrap().is_none());
    assert!(source.ping().is_ok());
}

/// A missing database is reported, never created.
#[test]
fn test_sqlite_missing_database() {
    let tmp = TempDir::new().unwrap();
    let config_path = write_config(
        tmp.path(),
        r#"{"source": {"kind": "sqlite", "path": "absent.db"}}"#,
    );

    let config = DirectoryConfig::load(&config_path).unwrap();
    let result = config.open_source();
    assert!(matches!(result, Err(SourceError::Unavailable { .. })));
    assert!(!tmp.path().join("absent.db").exists());
}

/// A wrong table name fails at query time with a readable message.
#[test]
fn test_sqlite_missing_table() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("directory.db");
    create_db(&db);

    let source = SqliteSource::open(&db, "exportadores").unwrap();
    let err = Snapshot::load(&source).unwrap_err();
    assert!(matches!(err, SourceError::Query(_)));
    assert!(err.to_string().contains("exportadores"));
}

// =============================================================================
// JSON
// =============================================================================

/// JSON export with unordered rows loads sorted by id.
#[test]
fn test_json_source_snapshot() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("empresas.json"),
        r#"[
            {"id": 3, "empresa": "Acme", "sector": "Agro"},
            {"id": 1, "empresa": "Acme", "sector": "Textil", "extra_col": true},
            {"id": 2, "empresa": "Beta", "sector": "Agro"}
        ]"#,
    )
    .unwrap();

    let source = JsonFileSource::new(tmp.path().join("empresas.json"));
    let snapshot = Snapshot::load(&source).unwrap();

    let ids: Vec<i64> = snapshot.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(snapshot.records()[0].extra.contains_key("extra_col"));
}

/// Duplicate ids make the snapshot unavailable.
#[test]
fn test_json_duplicate_ids() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("empresas.json"),
        r#"[{"id": 1, "empresa": "Acme"}, {"id": 1, "empresa": "Beta"}]"#,
    )
    .unwrap();

    let source = JsonFileSource::new(tmp.path().join("empresas.json"));
    assert!(matches!(
        Snapshot::load(&source),
        Err(SourceError::DuplicateId(1))
    ));
}
