// glabels-cli/src/config.rs
//
// Resolves the InvocationConfig for a subcommand from, in order of precedence,
// command-line flags, environment variables, an optional JSON config file and
// the glabels-core defaults.

use crate::cli::InvocationArgs;
use anyhow::Result;
use glabels_core::{InvocationConfig, InvocationConfigBuilder};
use std::path::PathBuf;

/// Environment variable naming the glabels-3-batch executable.
pub const GLABELS3_EXECUTABLE_ENV: &str = "GLABELS_3_BATCH";

/// Environment variable naming the glabels-batch-qt executable.
pub const QT_EXECUTABLE_ENV: &str = "GLABELS_BATCH_QT";

/// Builds the config for one batch tool.
///
/// `default_executable` is used when neither `--executable`, `env_var` nor the
/// config file name an executable.
pub fn resolve_invocation_config(
    args: &InvocationArgs,
    env_var: &str,
    default_executable: &str,
    qt_args: &[(String, String)],
) -> Result<InvocationConfig> {
    let base = match &args.config {
        // The core error already names the file.
        Some(path) => InvocationConfig::from_json_file(path, default_executable)?,
        None => InvocationConfig::new(default_executable),
    };

    let executable = args
        .executable
        .clone()
        .or_else(|| std::env::var_os(env_var).filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| base.executable.clone());

    let mut builder = InvocationConfigBuilder::from_config(base).executable(executable);
    if !args.command_env.is_empty() {
        builder = builder.command_env(args.command_env.iter().cloned());
    }
    if args.echo {
        builder = builder.echo(true);
    }
    for (name, value) in qt_args {
        builder = builder.qt_arg(name.clone(), value.clone());
    }

    let config = builder.build();
    log::debug!("Resolved invocation config: {:?}", config);
    Ok(config)
}
