// ============================================================================
// glabels-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Process Execution Boundary
//
// This module encapsulates the one place where glabels-core touches the
// operating system's process machinery. The invoker talks to a ProcessRunner
// trait so tests can substitute a recording implementation and verify how
// many processes were spawned and with which arguments.
//
// KEY COMPONENTS:
// - ProcessRunner: Trait for running an argv with stdin bytes to completion
// - ProcessOutput: Exit code and captured streams of a finished process
// - SystemProcessRunner: Implementation over std::process::Command
// - mocks: Recording runner for tests (test builds or `test-mocks` feature)
//
// AI-ASSISTANT-INFO: Process execution abstraction for the batch tools

// ---- Internal crate imports ----
use crate::error::{CoreResult, command_start_error};

// ---- Standard library imports ----
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Recording process runner for tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// PROCESS EXECUTION ABSTRACTION
// ============================================================================

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, or `None` if the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    /// A successful run with the given stdout.
    #[must_use]
    pub fn success(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// A failed run with the given exit code and streams.
    #[must_use]
    pub fn failure(exit_code: i32, stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// True when the process exited with status zero.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait representing something that can run a process to completion.
///
/// `argv[0]` is the program; the remaining entries are its arguments, passed
/// to the OS unchanged. Implementations must feed `stdin` to the child,
/// capture stdout and stderr separately, and reap the child before returning.
pub trait ProcessRunner {
    fn run(&self, argv: &[OsString], stdin: &[u8]) -> CoreResult<ProcessOutput>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, argv: &[OsString], stdin: &[u8]) -> CoreResult<ProcessOutput> {
        (**self).run(argv, stdin)
    }
}

// ============================================================================
// CONCRETE IMPLEMENTATION
// ============================================================================

/// Concrete implementation of `ProcessRunner` using `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, argv: &[OsString], stdin: &[u8]) -> CoreResult<ProcessOutput> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            command_start_error(
                "",
                io::Error::new(io::ErrorKind::InvalidInput, "empty command line"),
            )
        })?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| command_start_error(program.to_string_lossy(), e))?;

        let child_stdin = child.stdin.take();

        // Stdin is written from a helper thread so a child that fills its
        // stdout pipe before draining stdin cannot deadlock us.
        let (write_result, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || write_stdin(child_stdin, stdin));
            let output = child.wait_with_output();
            let write_result = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer thread panicked")));
            (write_result, output)
        });

        let output = output?;

        log::trace!(
            "{} exited with {:?} ({} bytes stdout, {} bytes stderr)",
            program.to_string_lossy(),
            output.status.code(),
            output.stdout.len(),
            output.stderr.len()
        );

        settle(
            ProcessOutput {
                exit_code: output.status.code(),
                stdout: output.stdout,
                stderr: output.stderr,
            },
            write_result,
        )
    }
}

/// Combines the child's result with the outcome of writing its stdin.
///
/// A failed child is reported as such even if feeding its stdin also
/// failed, so the exit code and captured streams are never lost.
fn settle(output: ProcessOutput, write_result: io::Result<()>) -> CoreResult<ProcessOutput> {
    match write_result {
        Err(e) if output.is_success() => Err(e.into()),
        Err(e) => {
            log::debug!("Ignoring stdin write error from a failed child: {}", e);
            Ok(output)
        }
        Ok(()) => Ok(output),
    }
}

/// Writes all of `bytes` to the child's stdin and closes it.
///
/// A child that exits without reading its input is not an error.
fn write_stdin(pipe: Option<std::process::ChildStdin>, bytes: &[u8]) -> io::Result<()> {
    let Some(mut pipe) = pipe else {
        return Ok(());
    };
    if bytes.is_empty() {
        return Ok(());
    }
    match pipe.write_all(bytes) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
