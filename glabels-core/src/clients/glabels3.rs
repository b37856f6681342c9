// ============================================================================
// glabels-core/src/clients/glabels3.rs
// ============================================================================
//
// GLABELS-3-BATCH CLIENT: Typed Wrapper for the gLabels 3 Batch Tool
//
// Builds glabels-3-batch command lines from Glabels3Options, validates the
// stdin routing rules for template and merge input, and runs the tool through
// the CommandInvoker.
//
// Validation order:
// 1. layout options (output, counts, switches)
// 2. merge input file (explicit stdin conflict, then existence)
// 3. template (existence, explicit stdin conflict, byte-input conflict)
//
// AI-ASSISTANT-INFO: glabels-3-batch client and option builder

// ---- Standard library imports ----
use std::ffi::OsString;
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::{PreparedInvocation, push_count, push_switch};
use crate::config::{GLABELS3_STDOUT, InvocationConfig};
use crate::error::{CoreResult, validation_error};
use crate::external::{ProcessRunner, SystemProcessRunner};
use crate::invoker::CommandInvoker;
use crate::template::{InputFile, STDIN_TOKEN, Template, ensure_exists, path_token};

/// Print options understood by glabels-3-batch.
///
/// # Examples
///
/// ```rust
/// use glabels_core::Glabels3Options;
///
/// let options = Glabels3Options::new().copies(3).outline(true);
/// assert_eq!(options.copies, Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glabels3Options {
    /// Output filename; stdout when unset
    pub output: Option<PathBuf>,
    pub sheets: Option<u32>,
    pub copies: Option<u32>,
    /// Starting label position
    pub first: Option<u32>,
    pub outline: bool,
    /// Print in mirror image
    pub reverse: bool,
    pub cropmarks: bool,
    /// Merge input file, by path or streamed on stdin
    pub input_file: Option<InputFile>,
}

impl Glabels3Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    #[must_use]
    pub fn sheets(mut self, sheets: u32) -> Self {
        self.sheets = Some(sheets);
        self
    }

    #[must_use]
    pub fn copies(mut self, copies: u32) -> Self {
        self.copies = Some(copies);
        self
    }

    #[must_use]
    pub fn first(mut self, first: u32) -> Self {
        self.first = Some(first);
        self
    }

    #[must_use]
    pub fn outline(mut self, enabled: bool) -> Self {
        self.outline = enabled;
        self
    }

    #[must_use]
    pub fn reverse(mut self, enabled: bool) -> Self {
        self.reverse = enabled;
        self
    }

    #[must_use]
    pub fn cropmarks(mut self, enabled: bool) -> Self {
        self.cropmarks = enabled;
        self
    }

    #[must_use]
    pub fn input_file(mut self, input: impl Into<InputFile>) -> Self {
        self.input_file = Some(input.into());
        self
    }

    fn destination(&self) -> Option<&PathBuf> {
        self.output.as_ref().filter(|p| !p.as_os_str().is_empty())
    }
}

/// Simple wrapper for glabels-3-batch.
#[derive(Debug, Clone)]
pub struct Glabels3Batch<R = SystemProcessRunner> {
    invoker: CommandInvoker<R>,
}

impl Default for Glabels3Batch<SystemProcessRunner> {
    fn default() -> Self {
        Self::new(&InvocationConfig::glabels3())
    }
}

impl Glabels3Batch<SystemProcessRunner> {
    /// Creates a client that runs the configured executable.
    #[must_use]
    pub fn new(config: &InvocationConfig) -> Self {
        Self::with_runner(config, SystemProcessRunner)
    }
}

impl<R: ProcessRunner> Glabels3Batch<R> {
    pub fn with_runner(config: &InvocationConfig, runner: R) -> Self {
        Self {
            invoker: CommandInvoker::with_runner(config, runner),
        }
    }

    pub fn invoker(&self) -> &CommandInvoker<R> {
        &self.invoker
    }

    /// Prints `template` with `options`.
    ///
    /// `stdin` is sent to the tool as-is, e.g. merge data for a template that
    /// declares `<Merge src="/dev/stdin">`. It cannot be combined with a byte
    /// template or with a merge input file.
    ///
    /// Returns the tool's stdout when no output file is set, `None` otherwise.
    ///
    /// # Errors
    ///
    /// * `CoreError::Validation` - conflicting stdin sources
    /// * `CoreError::FileNotFound` - template or input path missing
    /// * `CoreError::BatchExecution` - glabels-3-batch exited non-zero
    pub fn run(
        &self,
        template: impl Into<Template>,
        stdin: Option<Vec<u8>>,
        options: Glabels3Options,
    ) -> CoreResult<Option<Vec<u8>>> {
        let prepared = self.prepare(template, stdin, options)?;
        let stdout = self.invoker.execute(&prepared.args, &prepared.stdin)?;
        Ok(prepared.returns_stdout.then_some(stdout))
    }

    /// Validates the inputs and builds the glabels-3-batch arguments without running anything.
    pub fn prepare(
        &self,
        template: impl Into<Template>,
        stdin: Option<Vec<u8>>,
        options: Glabels3Options,
    ) -> CoreResult<PreparedInvocation> {
        let template = template.into();
        let mut args: Vec<OsString> = Vec::new();
        let mut child_stdin = Vec::new();

        let returns_stdout = match options.destination() {
            Some(path) => {
                args.push("--output".into());
                args.push(path_token(path));
                false
            }
            None => {
                args.push("--output".into());
                args.push(GLABELS3_STDOUT.into());
                true
            }
        };

        push_count(&mut args, "--sheets", options.sheets);
        push_count(&mut args, "--copies", options.copies);
        push_count(&mut args, "--first", options.first);
        push_switch(&mut args, "--outline", options.outline);
        push_switch(&mut args, "--cropmarks", options.cropmarks);
        push_switch(&mut args, "--reverse", options.reverse);

        // An empty in-memory input counts as unset.
        let input_file = options
            .input_file
            .filter(|input| !matches!(input, InputFile::Bytes(bytes) if bytes.is_empty()));
        let input_is_bytes = input_file.as_ref().is_some_and(InputFile::is_bytes);
        if let Some(input) = input_file {
            if stdin.is_some() {
                return Err(validation_error("Only one file can be sent to stdin"));
            }
            match input {
                InputFile::File(path) => {
                    ensure_exists(&path)?;
                    args.push("--input".into());
                    args.push(path_token(&path));
                }
                InputFile::Bytes(bytes) => {
                    args.push("--input".into());
                    args.push(STDIN_TOKEN.into());
                    child_stdin = bytes;
                }
            }
        }

        match template {
            Template::File(path) => {
                ensure_exists(&path)?;
                args.push(path_token(&path));
            }
            Template::Bytes(bytes) => {
                if stdin.is_some() {
                    return Err(validation_error("Only one file can be sent to stdin"));
                }
                if input_is_bytes {
                    return Err(validation_error(
                        "You cannot send a template and an input file to stdin at the same time",
                    ));
                }
                args.push(STDIN_TOKEN.into());
                child_stdin = bytes;
            }
        }

        if let Some(bytes) = stdin {
            child_stdin = bytes;
        }

        Ok(PreparedInvocation {
            args,
            stdin: child_stdin,
            returns_stdout,
        })
    }
}
