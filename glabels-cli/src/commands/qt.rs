//! Implementation of the `qt` subcommand.

use crate::cli::QtArgs;
use crate::commands::{stdin_payload, template_source, write_output};
use crate::config::{QT_EXECUTABLE_ENV, resolve_invocation_config};

use anyhow::Result;
use glabels_core::config::DEFAULT_QT_EXECUTABLE;
use glabels_core::{GlabelsBatchQt, QtOptions};
use log::{debug, info};
use std::io::{Read, Write};

/// Builds the typed options from parsed arguments.
///
/// Printer and output are passed through even when both are given so the
/// library reports the conflict before anything is spawned.
#[must_use]
pub fn qt_options(args: &QtArgs) -> QtOptions {
    let mut options = QtOptions::new()
        .collate(args.collate)
        .group(args.group)
        .outlines(args.outlines)
        .crop_marks(args.crop_marks)
        .reverse(args.reverse);

    if let Some(printer) = &args.printer {
        options = options.printer(printer.clone());
    }
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
    for (key, value) in &args.define {
        options = options.define(key.clone(), value.clone());
    }
    options
}

/// Runs glabels-batch-qt for the parsed arguments.
pub fn run_qt(args: QtArgs, input: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let config = resolve_invocation_config(
        &args.invocation,
        QT_EXECUTABLE_ENV,
        DEFAULT_QT_EXECUTABLE,
        &args.qt_args,
    )?;
    let client = GlabelsBatchQt::new(&config);

    let options = qt_options(&args);
    let template = template_source(&args.template, input)?;
    let stdin = stdin_payload(args.stdin_file.as_deref())?;

    debug!("qt options: {:?}", options);
    let output = client.run(template, stdin, options)?;
    match (&output, &args.printer, &args.output) {
        (None, Some(printer), _) => info!("Sent to printer {}", printer),
        (None, None, Some(path)) => info!("Wrote {}", path.display()),
        _ => {}
    }
    write_output(out, output)
}
