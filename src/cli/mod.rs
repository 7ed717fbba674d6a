//! CLI module for exportdir
//!
//! Provides command-line interface for:
//! - browse: interactive JSON-lines session over one snapshot
//! - search: one-shot filtered view
//! - facets: company and sector options
//! - show: one record by id
//! - check: source connectivity check

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{browse, browse_session, check, facets, run, run_command, search, show};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_error_to, write_response, write_response_to};
