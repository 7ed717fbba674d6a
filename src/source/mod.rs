//! Record sources
//!
//! The one-shot fetch that produces a snapshot. Sources are explicitly
//! constructed, owned handles; nothing here is lazily global.
//!
//! A snapshot is loaded exactly once per view. If loading fails the caller
//! shows an error state and never builds a
//! [`DirectoryEngine`](crate::directory::DirectoryEngine).

mod errors;
mod json_file;
mod row;
mod sqlite;

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::directory::Record;
use crate::observability::ObservationScope;

pub use errors::{SourceError, SourceResult};
pub use json_file::JsonFileSource;
pub use row::record_from_columns;
pub use sqlite::{is_valid_table_name, SqliteSource, DEFAULT_TABLE};

/// Where directory records come from
pub trait RecordSource {
    /// Every record, ordered by id ascending
    fn fetch_all(&self) -> SourceResult<Vec<Record>>;

    /// One record by id
    fn fetch_by_id(&self, id: i64) -> SourceResult<Option<Record>>;

    /// Checks the source is reachable
    fn ping(&self) -> SourceResult<()>;

    /// Short human-readable description for logs
    fn describe(&self) -> String;
}

/// An immutable, fully loaded record set
#[derive(Debug, Clone)]
pub struct Snapshot {
    records: Vec<Record>,
    loaded_at: DateTime<Utc>,
}

impl Snapshot {
    /// Fetches all records once and validates id uniqueness
    pub fn load(source: &dyn RecordSource) -> SourceResult<Self> {
        let description = source.describe();
        let scope = ObservationScope::with_fields("SNAPSHOT_LOAD", &[("source", &description)]);

        match source.fetch_all().and_then(Self::from_records) {
            Ok(snapshot) => {
                scope.complete_with_fields(&[("records", &snapshot.len().to_string())]);
                Ok(snapshot)
            }
            Err(e) => {
                scope.fail(&e.to_string());
                Err(e)
            }
        }
    }

    /// Wraps already fetched records
    pub fn from_records(records: Vec<Record>) -> SourceResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(SourceError::DuplicateId(record.id));
            }
        }

        Ok(Self {
            records,
            loaded_at: Utc::now(),
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
