//! End-to-end tests for the `gitexec` binary

use assert_cmd::prelude::{CommandCargoExt, OutputAssertExt};
use predicates::prelude::*;
use std::process::Command;

fn gitexec() -> Command {
    let mut cmd = Command::cargo_bin("gitexec").unwrap();
    cmd.env_remove("GITEXEC_GIT_BINARY");
    cmd.env_remove("RUST_LOG");
    cmd.env("GIT_CONFIG_GLOBAL", if cfg!(windows) { "NUL" } else { "/dev/null" });
    cmd.env("GIT_CONFIG_NOSYSTEM", "1");
    cmd
}

#[test]
fn init_creates_git_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    gitexec().arg("-C").arg(dir.path()).arg("init").assert().success();

    assert!(dir.path().join(".git").is_dir());
    Ok(())
}

#[test]
fn raw_output_passes_git_stdout_through() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    gitexec().arg("-C").arg(dir.path()).arg("init").assert().success();
    std::fs::write(dir.path().join("test.txt"), "test content")?;

    gitexec()
        .arg("-C")
        .arg(dir.path())
        .args(["status", "--short"])
        .assert()
        .success()
        .stdout(predicate::str::contains("test.txt"));

    Ok(())
}

#[test]
fn json_output_describes_the_result() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    let output = gitexec()
        .arg("-C")
        .arg(dir.path())
        .args(["--format", "json", "init"])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["ok"], true);
    assert_eq!(value["exit_code"], 0);
    Ok(())
}

#[test]
fn unknown_subcommand_propagates_git_failure() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    gitexec()
        .arg("-C")
        .arg(dir.path())
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::is_empty().not());

    Ok(())
}

#[test]
fn missing_directory_exits_with_launch_code() {
    gitexec()
        .args(["-C", "/invalid/path/that/does/not/exist", "status"])
        .assert()
        .code(127)
        .stderr(predicate::str::contains("/invalid/path/that/does/not/exist"));
}

#[test]
fn missing_binary_from_env_exits_with_launch_code() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    gitexec()
        .env("GITEXEC_GIT_BINARY", "gitexec-definitely-not-installed")
        .arg("-C")
        .arg(dir.path())
        .arg("status")
        .assert()
        .code(127)
        .stderr(predicate::str::contains("binary not found"));

    Ok(())
}

#[test]
fn arguments_are_required() {
    gitexec().assert().failure();
}

#[test]
fn user_git_config_is_not_read() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    gitexec().arg("-C").arg(dir.path()).arg("init").assert().success();

    gitexec()
        .arg("-C")
        .arg(dir.path())
        .args(["config", "--global", "--list"])
        .assert()
        .stdout(predicate::str::is_empty());

    Ok(())
}
