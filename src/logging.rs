//! Logging initialization.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Pick the log level from the verbosity flags. `verbose` wins over `quiet`.
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Install a stderr subscriber as the global default.
pub fn initialize_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global tracing subscriber")
}
