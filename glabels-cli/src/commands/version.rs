//! Implementation of the `qt-version` subcommand.

use crate::cli::QtVersionArgs;
use crate::config::{QT_EXECUTABLE_ENV, resolve_invocation_config};

use anyhow::{Context, Result};
use glabels_core::GlabelsBatchQt;
use glabels_core::config::DEFAULT_QT_EXECUTABLE;
use std::io::Write;

/// Prints the version reported by glabels-batch-qt, one line.
pub fn run_qt_version(args: QtVersionArgs, out: &mut dyn Write) -> Result<()> {
    let config = resolve_invocation_config(
        &args.invocation,
        QT_EXECUTABLE_ENV,
        DEFAULT_QT_EXECUTABLE,
        &args.qt_args,
    )?;
    let version = GlabelsBatchQt::new(&config).version()?;
    writeln!(out, "{version}").context("Failed to write version")?;
    Ok(())
}
