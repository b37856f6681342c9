// glabels-cli/tests/cli_integration.rs
//
// Runs the compiled glabels-batch binary against fake batch tools. Each tool
// is a shell script started through `--command-env sh`.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Records its arguments next to itself and copies stdin to stdout.
const ECHO_TOOL: &str = "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$(dirname \"$0\")/args.txt\"\ncat\n";

const FAILING_TOOL: &str = "#!/bin/sh\necho \"Error: unable to render template\" >&2\nexit 3\n";

const VERSION_TOOL: &str = "#!/bin/sh\n[ \"$1\" = \"--version\" ] && echo \"glabels-batch-qt 3.99-master564\"\n";

// Helper function to get the path to the compiled binary
fn glabels_cmd() -> Command {
    let mut cmd = Command::cargo_bin("glabels-batch").expect("Failed to find glabels-batch binary");
    cmd.env_remove("GLABELS_3_BATCH").env_remove("GLABELS_BATCH_QT").env("NO_COLOR", "1");
    cmd
}

fn write_tool(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("tool.sh");
    fs::write(&path, body).expect("Failed to write fake tool");
    path
}

fn recorded_args(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("args.txt"))
        .expect("Fake tool did not record its arguments")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_glabels3_template_from_stdin_is_passed_through() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), ECHO_TOOL);

    glabels_cmd()
        .arg("glabels3")
        .arg("--command-env")
        .arg("sh")
        .arg("--executable")
        .arg(&tool)
        .arg("--copies")
        .arg("2")
        .arg("-")
        .write_stdin("<Glabels-document/>")
        .assert()
        .success()
        .stdout("<Glabels-document/>");

    assert_eq!(
        recorded_args(tmp.path()),
        vec!["--output", "/dev/stdout", "--copies", "2", "-"]
    );
    Ok(())
}

#[test]
fn test_qt_defines_and_qt_args_reach_the_tool() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), ECHO_TOOL);
    let template = tmp.path().join("badge.glabels");
    fs::write(&template, "<Glabels-document/>")?;

    glabels_cmd()
        .arg("qt")
        .arg("--command-env")
        .arg("sh")
        .arg("--executable")
        .arg(&tool)
        .arg("--qt-arg")
        .arg("platform=offscreen")
        .arg("-D")
        .arg("name=Ada")
        .arg("--first")
        .arg("3")
        .arg(&template)
        .assert()
        .success();

    let template_arg = template.to_string_lossy().into_owned();
    assert_eq!(
        recorded_args(tmp.path()),
        vec![
            "--platform",
            "offscreen",
            "--output",
            "-",
            "--first",
            "3",
            "--define",
            "name=Ada",
            template_arg.as_str(),
        ]
    );
    Ok(())
}

#[test]
fn test_qt_printer_and_output_fail_without_spawning() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), ECHO_TOOL);

    glabels_cmd()
        .arg("qt")
        .arg("--command-env")
        .arg("sh")
        .arg("--executable")
        .arg(&tool)
        .arg("--printer")
        .arg("office")
        .arg("--output")
        .arg(tmp.path().join("out.pdf"))
        .arg("badge.glabels")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Can't set both printer and output"));

    assert!(!tmp.path().join("args.txt").exists());
    Ok(())
}

#[test]
fn test_missing_template_is_reported() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), ECHO_TOOL);

    glabels_cmd()
        .arg("glabels3")
        .arg("--command-env")
        .arg("sh")
        .arg("--executable")
        .arg(&tool)
        .arg("surely/this/does/not/exist.glabels")
        .assert()
        .failure()
        .stderr(contains("surely/this/does/not/exist.glabels"));

    assert!(!tmp.path().join("args.txt").exists());
    Ok(())
}

#[test]
fn test_tool_failure_reports_exit_code_and_stderr() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), FAILING_TOOL);

    glabels_cmd()
        .arg("qt")
        .arg("--command-env")
        .arg("sh")
        .arg("--executable")
        .arg(&tool)
        .arg("-")
        .write_stdin("<Glabels-document/>")
        .assert()
        .failure()
        .stderr(contains("unable to render template"))
        .stderr(contains("3"));
    Ok(())
}

#[test]
fn test_qt_version_prints_version_token() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), VERSION_TOOL);

    glabels_cmd()
        .arg("qt-version")
        .arg("--command-env")
        .arg("sh")
        .arg("--executable")
        .arg(&tool)
        .assert()
        .success()
        .stdout("3.99-master564\n");
    Ok(())
}

#[test]
fn test_executable_from_environment() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let tool = write_tool(tmp.path(), VERSION_TOOL);

    glabels_cmd()
        .env("GLABELS_BATCH_QT", &tool)
        .arg("qt-version")
        .arg("--command-env")
        .arg("sh")
        .assert()
        .success()
        .stdout(contains("3.99-master564"));
    Ok(())
}

#[test]
fn test_invalid_arguments() {
    glabels_cmd()
        .arg("glabels3")
        .arg("--copies")
        .arg("two")
        .arg("x.glabels")
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}
