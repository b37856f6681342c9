// ============================================================================
// glabels-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for glabels-core
//
// This module defines the error taxonomy of the library. Validation failures
// and missing files are detected before any process is spawned; batch
// execution failures carry everything the child process produced.
//
// KEY COMPONENTS:
// - CoreError: Enum of all failure modes
// - CoreResult: Result alias used throughout the crate
// - Helper constructors for process-related errors
//
// AI-ASSISTANT-INFO: Error types and helpers for the glabels wrapper

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::path::PathBuf;

/// Custom error types for glabels-core
#[derive(Error, Debug)]
pub enum CoreError {
    /// Contradictory or malformed caller input. Raised before any spawn.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A template or input file referenced by path does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The batch tool ran but exited unsuccessfully.
    #[error(
        "Batch command '{command}' failed with exit code {}: {}",
        describe_exit_code(.exit_code),
        lossy_trimmed(.stderr)
    )]
    BatchExecution {
        command: String,
        exit_code: Option<i32>,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not parse version from output: {0:?}")]
    VersionParse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CoreError {
    /// Exit code of the failed batch process, if this is a `BatchExecution` error.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CoreError::BatchExecution { exit_code, .. } => *exit_code,
            _ => None,
        }
    }

    /// Returns true for errors raised before any process was spawned.
    #[must_use]
    pub fn is_pre_spawn(&self) -> bool {
        matches!(self, CoreError::Validation(_) | CoreError::FileNotFound(_))
    }
}

fn describe_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

fn lossy_trimmed(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}

/// Result type for glabels-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

pub(crate) fn validation_error(message: impl Into<String>) -> CoreError {
    CoreError::Validation(message.into())
}

pub(crate) fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

pub(crate) fn batch_execution_error(
    command: impl Into<String>,
    exit_code: Option<i32>,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
) -> CoreError {
    CoreError::BatchExecution {
        command: command.into(),
        exit_code,
        stdout,
        stderr,
    }
}
