//! CLI argument definitions using clap
//!
//! Commands:
//! - exportdir browse --config <path>
//! - exportdir search --config <path> [--query q] [--company c] [--sector s] [--pages n]
//! - exportdir facets --config <path>
//! - exportdir show --config <path> --id <n>
//! - exportdir check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// exportdir - browse an export directory by text, company and sector
#[derive(Parser, Debug)]
#[command(name = "exportdir")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the directory once, then apply one JSON action per stdin line
    Browse {
        /// Path to configuration file
        #[arg(long, default_value = "./exportdir.json")]
        config: PathBuf,
    },

    /// Render a single filtered view and exit
    Search {
        /// Path to configuration file
        #[arg(long, default_value = "./exportdir.json")]
        config: PathBuf,

        /// Free-text query over company, sector and contact
        #[arg(long)]
        query: Option<String>,

        /// Exact company name
        #[arg(long)]
        company: Option<String>,

        /// Exact sector name
        #[arg(long)]
        sector: Option<String>,

        /// Pages to reveal when no filter is active
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },

    /// Print the company and sector options
    Facets {
        /// Path to configuration file
        #[arg(long, default_value = "./exportdir.json")]
        config: PathBuf,
    },

    /// Print one record by id
    Show {
        /// Path to configuration file
        #[arg(long, default_value = "./exportdir.json")]
        config: PathBuf,

        /// Record id
        #[arg(long)]
        id: i64,
    },

    /// Check the record source is reachable and readable
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./exportdir.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
