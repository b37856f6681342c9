//! Logging support for glabels-core
//!
//! This module handles:
//! - Installing a default logger when the host application injects none
//! - Formatting assembled command lines for log output
//!
//! The library logs through the `log` facade. A host that passes its own log
//! target is assumed to have configured logging itself; otherwise the first
//! batch invocation tries to install a timestamped `env_logger` on stderr.

use chrono::Local;
use log::LevelFilter;
use once_cell::sync::OnceCell;
use std::ffi::OsString;
use std::io::Write;

/// Target used for log records when no target is injected.
pub const DEFAULT_LOG_TARGET: &str = "glabels_core";

/// Timestamp layout of the default log format.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

static DEFAULT_LOGGER: OnceCell<bool> = OnceCell::new();

/// Installs the default logger once per process.
///
/// The default is a single stderr handler at `Info` level writing
/// `<timestamp> | <LEVEL>: <message>`. If the application already set a
/// global logger this does nothing. Returns whether the default was installed.
pub fn ensure_default_logger() -> bool {
    *DEFAULT_LOGGER.get_or_init(|| {
        env_logger::Builder::new()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} | {}: {}",
                    Local::now().format(DEFAULT_TIMESTAMP_FORMAT),
                    record.level(),
                    record.args()
                )
            })
            .filter_level(LevelFilter::Info)
            .target(env_logger::Target::Stderr)
            .try_init()
            .is_ok()
    })
}

/// Joins an argument vector into a single printable command line.
///
/// Only used for log and error messages; bytes that are not valid UTF-8
/// are shown as U+FFFD.
#[must_use]
pub fn format_command(argv: &[OsString]) -> String {
    argv.iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders captured process output for log messages.
pub(crate) fn lossy(bytes: &[u8]) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
