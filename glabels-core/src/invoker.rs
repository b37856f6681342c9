// ============================================================================
// glabels-core/src/invoker.rs
// ============================================================================
//
// COMMAND INVOKER: Runs a Batch Tool Once and Captures Its Output
//
// The invoker owns the immutable base prefix of a client (command environment,
// executable, client-specific base arguments) and turns caller tokens into a
// single synchronous process run. Non-zero exits are logged at error level and
// returned as CoreError::BatchExecution with the captured streams.
//
// AI-ASSISTANT-INFO: Synchronous batch command execution with logging

// ---- Internal crate imports ----
use crate::config::InvocationConfig;
use crate::error::{CoreResult, batch_execution_error};
use crate::external::{ProcessRunner, SystemProcessRunner};
use crate::logging::{self, DEFAULT_LOG_TARGET, format_command, lossy};

// ---- Standard library imports ----
use std::ffi::OsString;

/// Executes batch commands built from a fixed base prefix.
#[derive(Debug, Clone)]
pub struct CommandInvoker<R = SystemProcessRunner> {
    base_args: Vec<OsString>,
    echo: bool,
    log_target: Option<String>,
    runner: R,
}

impl CommandInvoker<SystemProcessRunner> {
    /// Creates an invoker that spawns real processes.
    #[must_use]
    pub fn new(config: &InvocationConfig) -> Self {
        Self::with_runner(config, SystemProcessRunner)
    }
}

impl<R: ProcessRunner> CommandInvoker<R> {
    /// Creates an invoker that runs commands through `runner`.
    pub fn with_runner(config: &InvocationConfig, runner: R) -> Self {
        Self {
            base_args: config.base_prefix(),
            echo: config.echo,
            log_target: config.log_target.clone(),
            runner,
        }
    }

    /// Appends tokens to the base prefix, after the executable.
    #[must_use]
    pub fn with_base_args<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        self.base_args.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// The prefix placed before every caller-supplied token.
    #[must_use]
    pub fn base_args(&self) -> &[OsString] {
        &self.base_args
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs the base prefix followed by `args`, feeding `stdin` to the child.
    ///
    /// # Arguments
    ///
    /// * `args` - Tokens appended after the base prefix
    /// * `stdin` - Bytes written to the child's standard input (may be empty)
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - Captured stdout of a zero-exit run, possibly empty
    /// * `Err(CoreError::BatchExecution)` - The process exited non-zero
    /// * `Err(CoreError::CommandStart)` - The process could not be spawned
    pub fn execute(&self, args: &[OsString], stdin: &[u8]) -> CoreResult<Vec<u8>> {
        let target = self.target();

        let mut argv = Vec::with_capacity(self.base_args.len() + args.len());
        argv.extend_from_slice(&self.base_args);
        argv.extend_from_slice(args);
        let command_line = format_command(&argv);

        if self.echo {
            log::info!(target: target, "Running: {}", command_line);
        } else {
            log::debug!(target: target, "Executing command: {}", command_line);
        }

        let output = self.runner.run(&argv, stdin)?;

        if !output.is_success() {
            log::error!(
                target: target,
                "Batch command failed: {} (exit code: {:?}, stdout: {:?}, stderr: {:?})",
                command_line,
                output.exit_code,
                lossy(&output.stdout),
                lossy(&output.stderr)
            );
            return Err(batch_execution_error(
                command_line,
                output.exit_code,
                output.stdout,
                output.stderr,
            ));
        }

        Ok(output.stdout)
    }

    fn target(&self) -> &str {
        match self.log_target.as_deref() {
            Some(target) => target,
            None => {
                logging::ensure_default_logger();
                DEFAULT_LOG_TARGET
            }
        }
    }
}
