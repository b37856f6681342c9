//! Invocation configuration for the batch tool clients.
//!
//! An [`InvocationConfig`] names the executable to run, an optional command
//! environment prefix (for example a headless X server launcher), whether the
//! assembled command line is echoed to the log, and an optional log target
//! injected by the host application. A config is immutable once a client has
//! been built from it.

// ---- External crate imports ----
use serde::Deserialize;

// ---- Standard library imports ----
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// Default constants

/// Executable name of the gLabels 3 batch tool.
pub const DEFAULT_GLABELS3_EXECUTABLE: &str = "glabels-3-batch";

/// Executable name of the gLabels 4 (Qt) batch tool.
pub const DEFAULT_QT_EXECUTABLE: &str = "glabels-batch-qt";

/// Output target used by `glabels-3-batch` when no file is requested.
pub const GLABELS3_STDOUT: &str = "/dev/stdout";

/// Output target used by `glabels-batch-qt` when no file or printer is requested.
pub const QT_STDOUT: &str = "-";

/// Configuration captured by a client at construction time.
///
/// `qt_args` is only consulted by the Qt client; it holds `(name, value)`
/// pairs that become `--name value` after the executable.
///
/// # Examples
///
/// ```rust
/// use glabels_core::config::InvocationConfigBuilder;
///
/// let config = InvocationConfigBuilder::new("glabels-3-batch")
///     .command_env(["xvfb-run", "--wait=0.1"])
///     .echo(true)
///     .build();
///
/// assert_eq!(config.base_prefix(), vec!["xvfb-run", "--wait=0.1", "glabels-3-batch"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationConfig {
    /// Path or name of the batch executable
    pub executable: PathBuf,

    /// Tokens placed before the executable
    pub command_env: Vec<String>,

    /// Log the full command line at info level before running it
    pub echo: bool,

    /// Log target injected by the host application. When absent the library
    /// logs under its own target and installs a default logger on first use.
    pub log_target: Option<String>,

    /// Qt platform options for glabels-batch-qt, in order
    pub qt_args: Vec<(String, String)>,
}

impl Default for InvocationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GLABELS3_EXECUTABLE)
    }
}

impl InvocationConfig {
    /// Creates a config for the given executable with every other field at its default.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            command_env: Vec::new(),
            echo: false,
            log_target: None,
            qt_args: Vec::new(),
        }
    }

    /// Default config for `glabels-3-batch`.
    #[must_use]
    pub fn glabels3() -> Self {
        Self::new(DEFAULT_GLABELS3_EXECUTABLE)
    }

    /// Default config for `glabels-batch-qt`.
    #[must_use]
    pub fn qt() -> Self {
        Self::new(DEFAULT_QT_EXECUTABLE)
    }

    /// Loads a config from a JSON file.
    ///
    /// Every field is optional; a file without `executable` targets
    /// `default_executable`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Config` if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path, default_executable: &str) -> CoreResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents, default_executable).map_err(|e| match e {
            CoreError::Config(msg) => CoreError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parses a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Config` if the JSON is malformed or has wrongly typed fields.
    pub fn from_json_str(contents: &str, default_executable: &str) -> CoreResult<Self> {
        let file: ConfigFile = serde_json::from_str(contents)
            .map_err(|e| CoreError::Config(format!("Failed to parse config: {}", e)))?;

        let executable = file
            .executable
            .unwrap_or_else(|| PathBuf::from(default_executable));
        if executable.as_os_str().is_empty() {
            return Err(CoreError::Config("executable must not be empty".to_string()));
        }

        Ok(Self {
            executable,
            command_env: file.command_env,
            echo: file.echo,
            log_target: file.log_target,
            qt_args: file.qt_args,
        })
    }

    /// Command environment followed by the executable.
    ///
    /// The executable path is kept as-is, so non-UTF-8 paths survive.
    #[must_use]
    pub fn base_prefix(&self) -> Vec<OsString> {
        let mut prefix: Vec<OsString> = self.command_env.iter().map(OsString::from).collect();
        prefix.push(self.executable.clone().into_os_string());
        prefix
    }
}

/// On-disk shape of a config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    executable: Option<PathBuf>,
    command_env: Vec<String>,
    echo: bool,
    log_target: Option<String>,
    qt_args: Vec<(String, String)>,
}

/// Builder for creating InvocationConfig instances.
#[derive(Debug, Clone)]
pub struct InvocationConfigBuilder {
    config: InvocationConfig,
}

impl InvocationConfigBuilder {
    /// Starts a builder for the given executable.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            config: InvocationConfig::new(executable),
        }
    }

    /// Starts a builder from an existing config, e.g. one loaded from a file.
    #[must_use]
    pub fn from_config(config: InvocationConfig) -> Self {
        Self { config }
    }

    /// Replaces the executable.
    #[must_use]
    pub fn executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.config.executable = executable.into();
        self
    }

    /// Sets the command environment prefix.
    ///
    /// For example `["xvfb-run", "--wait=0.1"]` runs `xvfb-run --wait=0.1 glabels-3-batch`.
    #[must_use]
    pub fn command_env<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.command_env = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Enables or disables echoing the command line to the log.
    #[must_use]
    pub fn echo(mut self, echo: bool) -> Self {
        self.config.echo = echo;
        self
    }

    /// Routes log records to the given target instead of the library default.
    #[must_use]
    pub fn log_target(mut self, target: impl Into<String>) -> Self {
        self.config.log_target = Some(target.into());
        self
    }

    /// Appends a Qt option. A repeated name replaces the earlier value in place.
    #[must_use]
    pub fn qt_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.config.qt_args.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.config.qt_args.push((name, value)),
        }
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> InvocationConfig {
        self.config
    }
}
