//! Implementation of the `glabels3` subcommand.
//!
//! Maps [`Glabels3Args`] onto [`Glabels3Options`], resolves the invocation
//! config and hands the run to glabels-core.

use crate::cli::Glabels3Args;
use crate::commands::{input_source, is_stdin_token, stdin_payload, template_source, write_output};
use crate::config::{GLABELS3_EXECUTABLE_ENV, resolve_invocation_config};

use anyhow::{Result, bail};
use glabels_core::config::DEFAULT_GLABELS3_EXECUTABLE;
use glabels_core::{Glabels3Batch, Glabels3Options};
use log::{debug, info};
use std::io::{Read, Write};

/// Builds the typed options from parsed arguments. `input` is only read when
/// `--input -` asks for the merge data on stdin.
pub fn glabels3_options(args: &Glabels3Args, input: &mut dyn Read) -> Result<Glabels3Options> {
    let mut options = Glabels3Options::new()
        .outline(args.outline)
        .reverse(args.reverse)
        .cropmarks(args.cropmarks);

    if let Some(output) = &args.output {
        options = options.output(output.clone());
    }
    if let Some(sheets) = args.sheets {
        options = options.sheets(sheets);
    }
    if let Some(copies) = args.copies {
        options = options.copies(copies);
    }
    if let Some(first) = args.first {
        options = options.first(first);
    }
    if let Some(path) = &args.input {
        options = options.input_file(input_source(path, input)?);
    }
    Ok(options)
}

/// Runs glabels-3-batch for the parsed arguments.
///
/// # Arguments
/// * `args` - Parsed `glabels3` arguments
/// * `input` - Source for `-` template / merge input (the process stdin in `main`)
/// * `out` - Receives the tool's stdout when no output file was requested
pub fn run_glabels3(args: Glabels3Args, input: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let template_from_stdin = is_stdin_token(&args.template);
    if template_from_stdin && args.input.as_deref().is_some_and(is_stdin_token) {
        bail!("Template and merge input cannot both be read from stdin");
    }

    let config = resolve_invocation_config(
        &args.invocation,
        GLABELS3_EXECUTABLE_ENV,
        DEFAULT_GLABELS3_EXECUTABLE,
        &[],
    )?;
    let client = Glabels3Batch::new(&config);

    let options = glabels3_options(&args, input)?;
    let template = template_source(&args.template, input)?;
    let stdin = stdin_payload(args.stdin_file.as_deref())?;

    debug!("glabels3 options: {:?}", options);
    let output = client.run(template, stdin, options)?;
    if let (None, Some(path)) = (&output, &args.output) {
        info!("Wrote {}", path.display());
    }
    write_output(out, output)
}
