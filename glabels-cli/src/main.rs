// glabels-cli/src/main.rs
//
// Entry point for the glabels-batch binary.
//
// Responsibilities include:
// - Parsing command-line arguments.
// - Installing the fern logger before any glabels-core call.
// - Dispatching to the subcommand implementations in `commands`.
// - Reporting errors on stderr and mapping them to the exit code.

use clap::Parser;
use glabels_cli::logging::init_logging;
use glabels_cli::{Cli, Commands, run_glabels3, run_qt, run_qt_version};
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};
use std::process;

/// Check if color should be used (respects NO_COLOR and terminal support)
fn should_use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && io::stderr().is_terminal()
        && supports_color::on(supports_color::Stream::Stderr).is_some()
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Glabels3(args) => run_glabels3(args, &mut input, &mut out),
        Commands::Qt(args) => run_qt(args, &mut input, &mut out),
        Commands::QtVersion(args) => run_qt_version(args, &mut out),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if should_use_color() {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
        } else {
            eprintln!("Error: {:#}", e);
        }
        process::exit(1);
    }
}
