//! exportdir CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`. Errors not already
//! written as a JSON response are written here, then the process exits
//! non-zero.

use exportdir::cli;

fn main() {
    if let Err(e) = cli::run() {
        if !e.is_rendered() {
            let _ = cli::write_error(e.code_str(), e.message());
        }
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
