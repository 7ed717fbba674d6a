//! # Source Errors
//!
//! Failures of the one-shot snapshot fetch. None of these ever reach the
//! filtering engine: a failed fetch means no engine is built for the view.

use thiserror::Error;

/// Result type for record source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Record source errors
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The backing store could not be opened or reached
    #[error("Record source unavailable ({source_name}): {message}")]
    Unavailable {
        source_name: String,
        message: String,
    },

    /// The store was reached but the query failed
    #[error("Query failed: {0}")]
    Query(String),

    /// A row or file could not be turned into records
    #[error("Malformed record data: {0}")]
    Malformed(String),

    /// Two records share an identifier
    #[error("Duplicate record id {0} in snapshot")]
    DuplicateId(i64),

    /// Table name is not a plain identifier
    #[error("Invalid table name: '{0}'")]
    InvalidTable(String),
}

impl SourceError {
    pub fn unavailable(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        SourceError::Unavailable {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SourceError::Unavailable { .. } => "EXPORTDIR_SOURCE_UNAVAILABLE",
            SourceError::Query(_) => "EXPORTDIR_SOURCE_QUERY_FAILED",
            SourceError::Malformed(_) => "EXPORTDIR_SOURCE_MALFORMED",
            SourceError::DuplicateId(_) => "EXPORTDIR_SOURCE_DUPLICATE_ID",
            SourceError::InvalidTable(_) => "EXPORTDIR_SOURCE_INVALID_TABLE",
        }
    }
}

impl From<rusqlite::Error> for SourceError {
    fn from(e: rusqlite::Error) -> Self {
        SourceError::Query(e.to_string())
    }
}
