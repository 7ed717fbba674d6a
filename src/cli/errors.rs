//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::config::ConfigError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// The record source could not produce a snapshot
    SnapshotUnavailable,
    /// Requested record does not exist
    NotFound,
    /// A browse action line could not be understood
    InvalidAction,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "EXPORTDIR_CLI_CONFIG_ERROR",
            Self::IoError => "EXPORTDIR_CLI_IO_ERROR",
            Self::SnapshotUnavailable => "EXPORTDIR_SNAPSHOT_UNAVAILABLE",
            Self::NotFound => "EXPORTDIR_CLI_NOT_FOUND",
            Self::InvalidAction => "EXPORTDIR_CLI_INVALID_ACTION",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Snapshot could not be loaded
    pub fn snapshot_unavailable(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::SnapshotUnavailable, msg)
    }

    /// Record not found
    pub fn not_found(id: i64) -> Self {
        Self::new(CliErrorCode::NotFound, format!("No record with id {}", id))
    }

    /// Unparseable browse action
    pub fn invalid_action(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidAction, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the command already wrote this error as a response
    pub fn is_rendered(&self) -> bool {
        matches!(
            self.code,
            CliErrorCode::SnapshotUnavailable | CliErrorCode::NotFound
        )
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::not_found(9);
        assert_eq!(err.to_string(), "EXPORTDIR_CLI_NOT_FOUND: No record with id 9");
    }

    #[test]
    fn test_snapshot_unavailable_code() {
        let err = CliError::snapshot_unavailable("refused");
        assert_eq!(err.code(), &CliErrorCode::SnapshotUnavailable);
        assert_eq!(err.code_str(), "EXPORTDIR_SNAPSHOT_UNAVAILABLE");
        assert_eq!(err.message(), "refused");
    }

    #[test]
    fn test_rendered_errors() {
        assert!(CliError::not_found(1).is_rendered());
        assert!(CliError::snapshot_unavailable("x").is_rendered());
        assert!(!CliError::config_error("x").is_rendered());
    }

    #[test]
    fn test_config_error_code() {
        let err: CliError = ConfigError::Parse("eof".into()).into();
        assert_eq!(err.code_str(), "EXPORTDIR_CLI_CONFIG_ERROR");
    }
}
