//! Configuration file
//!
//! ```json
//! {
//!   "source": { "kind": "sqlite", "path": "directory.db", "table": "empresas" },
//!   "log_level": "info"
//! }
//! ```
//!
//! Relative source paths resolve against the config file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Severity;
use crate::source::{
    is_valid_table_name, JsonFileSource, RecordSource, SourceResult, SqliteSource, DEFAULT_TABLE,
};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Where the snapshot is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// SQLite database file
    Sqlite {
        path: PathBuf,
        #[serde(default = "default_table")]
        table: String,
    },
    /// JSON export file
    Json { path: PathBuf },
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl SourceConfig {
    pub fn path(&self) -> &Path {
        match self {
            SourceConfig::Sqlite { path, .. } | SourceConfig::Json { path } => path,
        }
    }

    fn path_mut(&mut self) -> &mut PathBuf {
        match self {
            SourceConfig::Sqlite { path, .. } | SourceConfig::Json { path } => path,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Record source (required)
    pub source: SourceConfig,

    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl DirectoryConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut config = Self::parse(&content)?;

        if let Some(base) = path.parent() {
            let source_path = config.source.path_mut();
            if source_path.is_relative() {
                *source_path = base.join(&*source_path);
            }
        }

        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let config: DirectoryConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.source.path().as_os_str().is_empty() {
            return Err(ConfigError::Invalid("source.path must not be empty".into()));
        }

        if let SourceConfig::Sqlite { table, .. } = &self.source {
            if !is_valid_table_name(table) {
                return Err(ConfigError::Invalid(format!(
                    "source.table '{}' is not a plain identifier",
                    table
                )));
            }
        }

        self.log_severity()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> ConfigResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(|e| ConfigError::Invalid(format!("log_level: {}", e)))
    }

    /// Opens the configured source. The returned handle owns its connection.
    pub fn open_source(&self) -> SourceResult<Box<dyn RecordSource>> {
        match &self.source {
            SourceConfig::Sqlite { path, table } => {
                Ok(Box::new(SqliteSource::open(path, table.clone())?))
            }
            SourceConfig::Json { path } => Ok(Box::new(JsonFileSource::new(path))),
        }
    }
}
