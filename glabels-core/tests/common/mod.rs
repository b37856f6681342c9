// glabels-core/tests/common/mod.rs
//
// Fake batch tools for integration tests. Each tool is a shell script run
// through `sh`, passed as the command environment, so the script never has
// to be marked executable.

#![allow(dead_code)]

use glabels_core::{InvocationConfig, InvocationConfigBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Records its arguments (one per line) next to itself and copies stdin to stdout.
pub const ECHO_TOOL: &str = r#"printf '%s\n' "$@" > "$(dirname "$0")/args.txt"
cat
"#;

/// Writes a message to stderr and exits with status 4.
pub const FAILING_TOOL: &str = r#"cat > /dev/null
echo "partial output"
echo "Error: unable to render template" >&2
exit 4
"#;

/// Answers `--version` the way glabels-batch-qt does.
pub const VERSION_TOOL: &str = r#"if [ "$1" = "--version" ]; then
  echo "glabels-batch-qt 3.99-master564"
fi
"#;

/// Writes `body` as a script named `name` inside `dir`.
pub fn write_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}")).expect("Failed to write fake tool");
    path
}

/// Config running `script` through `sh`.
pub fn sh_config(script: &Path) -> InvocationConfig {
    InvocationConfigBuilder::new(script)
        .command_env(["sh"])
        .log_target("glabels-tests")
        .build()
}

/// Arguments recorded by `ECHO_TOOL`.
pub fn recorded_args(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("args.txt"))
        .expect("Fake tool did not record its arguments")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Writes a minimal template file and returns its path.
pub fn write_template(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"<?xml version=\"1.0\"?><Glabels-document/>").expect("Failed to write template");
    path
}
