// ============================================================================
// glabels-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: fern dispatch for the glabels-batch binary
//
// The binary installs its own logger before any glabels-core call, so the
// library never falls back to its lazy env_logger default. Records go to
// stderr and, when --log-file is given, are appended to that file as well.
//
// KEY COMPONENTS:
// - init_logging: builds and applies the fern dispatch
// - get_timestamp: timestamp used in log lines
//
// AI-ASSISTANT-INFO: CLI logger setup (fern, stderr + optional file)

// ---- External crate imports ----
use anyhow::{Context, Result};
use log::LevelFilter;

// ---- Standard library imports ----
use std::path::Path;

/// Timestamp layout for log lines.
const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Returns the current local time formatted for log lines.
///
/// # Returns
/// A string such as "2024-06-01T12:30:45+0200"
pub fn get_timestamp() -> String {
    chrono::Local::now().format(LOG_TIMESTAMP_FORMAT).to_string()
}

/// Maps the `--verbose` flag to a level filter.
#[must_use]
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger.
///
/// # Arguments
/// * `verbose` - Enables debug records, including every assembled command line
/// * `log_file` - Optional file that receives a copy of every record
///
/// # Errors
/// Fails if the log file cannot be opened or a logger is already installed.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {}: {}",
                get_timestamp(),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level_for(verbose))
        .chain(std::io::stderr());

    if let Some(path) = log_file {
        let file = fern::log_file(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Failed to install logger")?;
    Ok(())
}
