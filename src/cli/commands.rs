//! CLI command implementations
//!
//! Every command follows the same sequence:
//!
//! 1. Load configuration
//! 2. Open the record source (an owned handle)
//! 3. Load the snapshot once
//! 4. Build the engine and render views
//!
//! If step 2 or 3 fails no engine is built; an error response is written
//! instead of a directory.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::json;

use crate::config::DirectoryConfig;
use crate::directory::{Action, DirectoryEngine, RecordCard};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::source::{RecordSource, Snapshot, SourceError};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_error_to, write_response, write_response_to};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run one command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Browse { config } => browse(&config),
        Command::Search {
            config,
            query,
            company,
            sector,
            pages,
        } => search(&config, query, company, sector, pages),
        Command::Facets { config } => facets(&config),
        Command::Show { config, id } => show(&config, id),
        Command::Check { config } => check(&config),
    }
}

/// Loads configuration and applies its log level
fn load_config(path: &Path) -> CliResult<DirectoryConfig> {
    let config = DirectoryConfig::load(path)?;
    Logger::set_min_severity(config.log_severity()?);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("config", &path.display().to_string()),
            ("source", &config.source.path().display().to_string()),
        ],
    );
    Ok(config)
}

/// Renders a source failure as the terminal error state
fn unavailable(err: SourceError) -> CliError {
    let message = err.to_string();
    log_event_with_fields(
        Event::SnapshotUnavailable,
        &[("code", err.code()), ("reason", &message)],
    );
    let cli_err = CliError::snapshot_unavailable(message);
    // stdout may be gone; the returned error still reaches stderr
    let _ = write_error(cli_err.code_str(), cli_err.message());
    cli_err
}

fn open_source(config: &DirectoryConfig) -> CliResult<Box<dyn RecordSource>> {
    config.open_source().map_err(unavailable)
}

fn load_snapshot(config: &DirectoryConfig) -> CliResult<Snapshot> {
    let source = open_source(config)?;
    Snapshot::load(source.as_ref()).map_err(unavailable)
}

/// Interactive session over stdin/stdout
pub fn browse(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let snapshot = load_snapshot(&config)?;
    let mut engine = DirectoryEngine::new(snapshot.records());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    browse_session(&mut engine, stdin.lock(), &mut stdout)
}

/// Writes the initial view, then one view per action line.
///
/// Blank lines are skipped. A line that is not a valid action, including one
/// that is not UTF-8, gets an error response and leaves the state untouched.
/// Only read failures end the session.
pub fn browse_session<R: BufRead, W: Write>(
    engine: &mut DirectoryEngine<'_>,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    write_response_to(output, &engine.view())?;

    for line in input.split(b'\n') {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match serde_json::from_slice::<Action>(&line) {
            Ok(action) => {
                engine.apply(action);
                write_response_to(output, &engine.view())?;
            }
            Err(e) => {
                let err = CliError::invalid_action(e.to_string());
                log_event_with_fields(Event::ActionRejected, &[("reason", err.message())]);
                write_error_to(output, err.code_str(), err.message())?;
            }
        }
    }

    Ok(())
}

/// One-shot filtered view
pub fn search(
    config_path: &Path,
    query: Option<String>,
    company: Option<String>,
    sector: Option<String>,
    pages: u32,
) -> CliResult<()> {
    let config = load_config(config_path)?;
    let snapshot = load_snapshot(&config)?;
    let mut engine = DirectoryEngine::new(snapshot.records());

    if let Some(query) = query {
        engine.set_query(query);
    }
    engine.select_company(company);
    engine.select_sector(sector);
    for _ in 1..pages {
        engine.show_more();
    }

    write_response(&engine.view())
}

/// Facet options only
pub fn facets(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let snapshot = load_snapshot(&config)?;
    let engine = DirectoryEngine::new(snapshot.records());

    write_response(engine.facets())
}

/// One record card, fetched directly from the source
pub fn show(config_path: &Path, id: i64) -> CliResult<()> {
    let config = load_config(config_path)?;
    let source = open_source(&config)?;

    match source.fetch_by_id(id).map_err(unavailable)? {
        Some(record) => write_response(&RecordCard::from_record(&record)),
        None => {
            let err = CliError::not_found(id);
            write_error(err.code_str(), err.message())?;
            Err(err)
        }
    }
}

/// Connection and read check
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let source = open_source(&config)?;

    source.ping().map_err(unavailable)?;
    let snapshot = Snapshot::load(source.as_ref()).map_err(unavailable)?;

    write_response(&json!({
        "source": source.describe(),
        "reachable": true,
        "records": snapshot.len(),
        "loaded_at": snapshot.loaded_at().to_rfc3339(),
        "first": snapshot.records().first(),
    }))
}
