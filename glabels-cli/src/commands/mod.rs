//! Command implementations for the CLI.
//!
//! Each submodule runs one subcommand. The helpers here turn path arguments
//! into template / input sources and write captured output.

/// `glabels3` subcommand: prints through glabels-3-batch.
pub mod glabels3;
/// `qt` subcommand: prints through glabels-batch-qt.
pub mod qt;
/// `qt-version` subcommand.
pub mod version;

pub use glabels3::run_glabels3;
pub use qt::run_qt;
pub use version::run_qt_version;

use anyhow::{Context, Result};
use glabels_core::template::STDIN_TOKEN;
use glabels_core::{InputFile, Template};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// True when a path argument asks for stdin.
pub fn is_stdin_token(path: &Path) -> bool {
    path.as_os_str() == STDIN_TOKEN
}

fn read_all(input: &mut dyn Read, what: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read {what} from stdin"))?;
    Ok(bytes)
}

/// Template from a path argument; `-` reads the template bytes from `input`.
pub fn template_source(path: &Path, input: &mut dyn Read) -> Result<Template> {
    if is_stdin_token(path) {
        Ok(Template::Bytes(read_all(input, "template")?))
    } else {
        Ok(Template::File(path.to_path_buf()))
    }
}

/// Merge input from a path argument; `-` reads the input bytes from `input`.
pub fn input_source(path: &Path, input: &mut dyn Read) -> Result<InputFile> {
    if is_stdin_token(path) {
        Ok(InputFile::Bytes(read_all(input, "merge input")?))
    } else {
        Ok(InputFile::File(path.to_path_buf()))
    }
}

/// Reads the file given with `--stdin`, if any.
pub fn stdin_payload(path: Option<&Path>) -> Result<Option<Vec<u8>>> {
    path.map(|p| fs::read(p).with_context(|| format!("Failed to read stdin file {}", p.display())))
        .transpose()
}

/// Copies captured tool output to `out`. Nothing is written when the tool
/// wrote to a file or printer.
pub fn write_output(out: &mut dyn Write, output: Option<Vec<u8>>) -> Result<()> {
    if let Some(bytes) = output {
        out.write_all(&bytes).context("Failed to write output")?;
        out.flush().context("Failed to flush output")?;
    }
    Ok(())
}
