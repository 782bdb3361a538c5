//! CLI module for exoquery
//!
//! Provides the command-line interface:
//! - search: load the catalog, run one query, print identifiers
//! - check: load the catalog and report its row count
//!
//! The CLI is presentation plumbing only; the search contract lives in
//! the query subsystem.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, CriteriaArgs};
pub use commands::{check, search};
pub use errors::{CliError, CliResult};

use tracing_subscriber::EnvFilter;

/// Parses arguments, initializes logging, and dispatches one command.
pub fn run() -> CliResult<()> {
    init_tracing();

    let cli = Cli::parse_args();
    match cli.command {
        Command::Search {
            catalog,
            criteria,
            json,
        } => search(&catalog, criteria.into(), json),
        Command::Check { catalog } => check(&catalog),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
