// glabels-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "glabels-batch: print gLabels templates from the command line",
    long_about = "Runs glabels-3-batch or glabels-batch-qt via the glabels-core library, \
                  validating option combinations before the tool is started."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also append log output to this file
    #[arg(long, global = true, value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a template with glabels-3-batch
    Glabels3(Glabels3Args),

    /// Print a template with glabels-batch-qt
    Qt(QtArgs),

    /// Show the version reported by glabels-batch-qt
    #[command(name = "qt-version")]
    QtVersion(QtVersionArgs),
}

/// Options shared by every subcommand that starts a batch tool.
#[derive(Args, Debug, Default, Clone)]
pub struct InvocationArgs {
    /// Path to the batch executable (overrides the environment and config file)
    #[arg(long, value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Token placed before the executable; repeat for several (e.g. --command-env xvfb-run --command-env --wait=0.1)
    #[arg(long = "command-env", value_name = "TOKEN", allow_hyphen_values = true)]
    pub command_env: Vec<String>,

    /// Log the full command line before running it
    #[arg(long)]
    pub echo: bool,

    /// JSON file with invocation settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct Glabels3Args {
    #[command(flatten)]
    pub invocation: InvocationArgs,

    /// Template file to print, or '-' to read it from stdin
    #[arg(required = true, value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Output filename (default: write to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of sheets
    #[arg(long, value_name = "N")]
    pub sheets: Option<u32>,

    /// Number of copies
    #[arg(long, value_name = "N")]
    pub copies: Option<u32>,

    /// Starting label position
    #[arg(long, value_name = "N")]
    pub first: Option<u32>,

    /// Print label outlines
    #[arg(long)]
    pub outline: bool,

    /// Print in reverse (mirror image)
    #[arg(long)]
    pub reverse: bool,

    /// Print crop marks
    #[arg(long)]
    pub cropmarks: bool,

    /// Merge input file, or '-' to read it from stdin
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// File whose contents are sent to the tool's stdin
    #[arg(long = "stdin", value_name = "FILE")]
    pub stdin_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct QtArgs {
    #[command(flatten)]
    pub invocation: InvocationArgs,

    /// Qt option passed after the executable as --NAME VALUE (e.g. platform=offscreen)
    #[arg(long = "qt-arg", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub qt_args: Vec<(String, String)>,

    /// Template file to print, or '-' to read it from stdin
    #[arg(required = true, value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Send output to this printer
    #[arg(short, long, value_name = "PRINTER")]
    pub printer: Option<String>,

    /// Output filename (default: write to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of sheets
    #[arg(long, value_name = "N")]
    pub sheets: Option<u32>,

    /// Number of copies
    #[arg(long, value_name = "N")]
    pub copies: Option<u32>,

    /// Collate merge copies
    #[arg(long)]
    pub collate: bool,

    /// Start each merge group on a new page
    #[arg(long)]
    pub group: bool,

    /// Starting label position
    #[arg(long, value_name = "N")]
    pub first: Option<u32>,

    /// Print label outlines
    #[arg(long)]
    pub outlines: bool,

    /// Print crop marks
    #[arg(long)]
    pub crop_marks: bool,

    /// Print in reverse (mirror image)
    #[arg(long)]
    pub reverse: bool,

    /// Set user variable VAR to VALUE; repeat for several
    #[arg(short = 'D', long = "define", value_name = "VAR=VALUE", value_parser = parse_key_value)]
    pub define: Vec<(String, String)>,

    /// File whose contents are sent to the tool's stdin
    #[arg(long = "stdin", value_name = "FILE")]
    pub stdin_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct QtVersionArgs {
    #[command(flatten)]
    pub invocation: InvocationArgs,

    /// Qt option passed after the executable as --NAME VALUE (e.g. platform=offscreen)
    #[arg(long = "qt-arg", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub qt_args: Vec<(String, String)>,
}

/// Parses `KEY=VALUE`; the value may itself contain '='.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("name=Ada"),
            Ok(("name".to_string(), "Ada".to_string()))
        );
        assert_eq!(
            parse_key_value("expr=a=b"),
            Ok(("expr".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_key_value("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_parse_glabels3_args() {
        let cli = Cli::parse_from([
            "glabels-batch",
            "glabels3",
            "--copies",
            "3",
            "--outline",
            "--command-env",
            "xvfb-run",
            "--command-env",
            "--wait=0.1",
            "/tmp/x.glabels",
        ]);

        match cli.command {
            Commands::Glabels3(args) => {
                assert_eq!(args.template, PathBuf::from("/tmp/x.glabels"));
                assert_eq!(args.copies, Some(3));
                assert!(args.outline);
                assert!(!args.reverse);
                assert_eq!(args.invocation.command_env, vec!["xvfb-run", "--wait=0.1"]);
                assert!(args.output.is_none());
            }
            other => panic!("Expected glabels3 command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_qt_args() {
        let cli = Cli::parse_from([
            "glabels-batch",
            "-v",
            "qt",
            "--qt-arg",
            "platform=offscreen",
            "-D",
            "name=Ada",
            "--define",
            "id=7",
            "--printer",
            "office",
            "-",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Qt(args) => {
                assert_eq!(args.template, PathBuf::from("-"));
                assert_eq!(args.printer.as_deref(), Some("office"));
                assert_eq!(
                    args.qt_args,
                    vec![("platform".to_string(), "offscreen".to_string())]
                );
                assert_eq!(
                    args.define,
                    vec![
                        ("name".to_string(), "Ada".to_string()),
                        ("id".to_string(), "7".to_string())
                    ]
                );
            }
            other => panic!("Expected qt command, got {:?}", other),
        }
    }

    #[test]
    fn test_non_integer_count_is_rejected() {
        let result = Cli::try_parse_from(["glabels-batch", "glabels3", "--copies", "2.5", "x.glabels"]);
        assert!(result.is_err());
    }
}
