// glabels-core/tests/batch_tools_tests.rs
//
// Runs both clients against fake batch tools to exercise the real process path.

#![cfg(unix)]

mod common;

use common::{ECHO_TOOL, FAILING_TOOL, VERSION_TOOL, recorded_args, sh_config, write_template, write_tool};
use glabels_core::{
    CoreError, Glabels3Batch, Glabels3Options, GlabelsBatchQt, InvocationConfigBuilder, QtOptions,
};
use tempfile::tempdir;

#[test]
fn test_glabels3_byte_template_round_trips_through_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), "glabels-3-batch", ECHO_TOOL);
    let client = Glabels3Batch::new(&sh_config(&tool));

    let template = b"<Glabels-document>badge</Glabels-document>".to_vec();
    let stdout = client.run(template.clone(), None, Glabels3Options::new().copies(2))?;

    assert_eq!(stdout, Some(template));
    assert_eq!(
        recorded_args(tmp.path()),
        vec!["--output", "/dev/stdout", "--copies", "2", "-"]
    );
    Ok(())
}

#[test]
fn test_glabels3_file_template_with_output_returns_none() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), "glabels-3-batch", ECHO_TOOL);
    let template = write_template(tmp.path(), "x.glabels");
    let output = tmp.path().join("labels.pdf");
    let client = Glabels3Batch::new(&sh_config(&tool));

    let result = client.run(
        template.clone(),
        None,
        Glabels3Options::new().output(&output).outline(true).reverse(true),
    )?;

    assert_eq!(result, None);
    assert_eq!(
        recorded_args(tmp.path()),
        vec![
            "--output".to_string(),
            output.to_string_lossy().into_owned(),
            "--outline".to_string(),
            "--reverse".to_string(),
            template.to_string_lossy().into_owned(),
        ]
    );
    Ok(())
}

#[test]
fn test_glabels3_non_zero_exit() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), "glabels-3-batch", FAILING_TOOL);
    let client = Glabels3Batch::new(&sh_config(&tool));

    let err = client
        .run(b"doc".to_vec(), None, Glabels3Options::new())
        .expect_err("failing tool should produce an error");

    match err {
        CoreError::BatchExecution {
            exit_code,
            stdout,
            stderr,
            command,
        } => {
            assert_eq!(exit_code, Some(4));
            assert_eq!(stdout, b"partial output\n");
            assert_eq!(stderr, b"Error: unable to render template\n");
            assert!(command.ends_with("--output /dev/stdout -"));
        }
        other => panic!("Expected BatchExecution, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_qt_defines_and_qt_args_reach_the_tool() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), "glabels-batch-qt", ECHO_TOOL);
    let config = InvocationConfigBuilder::from_config(sh_config(&tool))
        .qt_arg("platform", "offscreen")
        .build();
    let client = GlabelsBatchQt::new(&config);

    let stdout = client.run(
        b"doc".to_vec(),
        None,
        QtOptions::new().define("name", "Ada Lovelace").define("badge", "7"),
    )?;

    assert_eq!(stdout, Some(b"doc".to_vec()));
    assert_eq!(
        recorded_args(tmp.path()),
        vec![
            "--platform",
            "offscreen",
            "--output",
            "-",
            "--define",
            "name=Ada Lovelace",
            "--define",
            "badge=7",
            "-"
        ]
    );
    Ok(())
}

#[test]
fn test_qt_version() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), "glabels-batch-qt", VERSION_TOOL);
    let client = GlabelsBatchQt::new(&sh_config(&tool));

    assert_eq!(client.version()?, "3.99-master564");
    Ok(())
}

#[test]
fn test_missing_executable_is_command_start_error() {
    let config = InvocationConfigBuilder::new("/nonexistent/bin/glabels-batch-qt")
        .log_target("glabels-tests")
        .build();
    let client = GlabelsBatchQt::new(&config);

    let result = client.version();
    assert!(matches!(result, Err(CoreError::CommandStart(_, _))));
}

#[test]
fn test_large_template_does_not_deadlock() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), "glabels-3-batch", ECHO_TOOL);
    let client = Glabels3Batch::new(&sh_config(&tool));

    let template = vec![b'a'; 2 * 1024 * 1024];
    let stdout = client.run(template.clone(), None, Glabels3Options::new())?;
    assert_eq!(stdout.map(|s| s.len()), Some(template.len()));
    Ok(())
}
