//! JSON export file source
//!
//! Reads a JSON array of row objects, as produced by a table export.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::errors::{SourceError, SourceResult};
use super::row::record_from_columns;
use super::RecordSource;
use crate::directory::Record;

/// Record source backed by a JSON file
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> SourceResult<Vec<Map<String, Value>>> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| SourceError::unavailable(self.describe(), e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| {
            SourceError::Malformed(format!("{}: expected an array of objects: {}", self.path.display(), e))
        })
    }
}

impl RecordSource for JsonFileSource {
    fn fetch_all(&self) -> SourceResult<Vec<Record>> {
        let mut records = self
            .read_rows()?
            .into_iter()
            .map(record_from_columns)
            .collect::<SourceResult<Vec<_>>>()?;
        // Stable: rows sharing an id keep file order for the duplicate check
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    fn fetch_by_id(&self, id: i64) -> SourceResult<Option<Record>> {
        Ok(self.fetch_all()?.into_iter().find(|r| r.id == id))
    }

    fn ping(&self) -> SourceResult<()> {
        fs::metadata(&self.path)
            .map_err(|e| SourceError::unavailable(self.describe(), e.to_string()))?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}
