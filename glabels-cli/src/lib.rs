// glabels-cli/src/lib.rs
//
// Library portion of the glabels-batch CLI application.
// Contains argument definitions, config resolution and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, Glabels3Args, InvocationArgs, QtArgs, QtVersionArgs};
pub use commands::{run_glabels3, run_qt, run_qt_version};
