//! End-to-end tests for the log-analyzer binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a CLI command running inside a temporary working directory.
fn cli_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("log-analyzer").expect("failed to find log-analyzer binary");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn log_appends_to_the_default_file_and_prints() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["log", "Info", "server", "started"])
        .assert()
        .success()
        .stdout(predicate::str::contains("] [INFO] server started"));

    let contents = std::fs::read_to_string(dir.path().join("log.txt")).unwrap();
    assert!(contents.contains("] [INFO] server started"));
}

#[test]
fn log_file_flag_overrides_the_default() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["log", "Debug", "custom", "target", "--log-file", "custom.log"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(dir.path().join("custom.log")).unwrap();
    assert!(contents.contains("] [DEBUG] custom target"));
    assert!(!dir.path().join("log.txt").exists());
}

#[test]
fn log_file_env_overrides_the_default() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .env("LOG_ANALYZER_LOG_FILE", "from-env.log")
        .args(["log", "Info", "hello"])
        .assert()
        .success();

    assert!(dir.path().join("from-env.log").exists());
    assert!(!dir.path().join("log.txt").exists());
}

#[test]
fn analyze_reports_count_and_filtered_lines() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["log", "Error", "disk", "failure"])
        .assert()
        .success();
    cli_cmd(&dir)
        .args(["log", "Info", "all", "good"])
        .assert()
        .success();

    cli_cmd(&dir)
        .args(["analyze", "log.txt", "--level", "Error", "--keyword", "disk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("counted level Error: 1"))
        .stdout(predicate::str::contains("filtered lines Error:"))
        .stdout(predicate::str::contains("disk failure"));
}

#[test]
fn analyze_keyword_defaults_to_match_all() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["log", "Info", "first"])
        .assert()
        .success();
    cli_cmd(&dir)
        .args(["log", "Info", "second"])
        .assert()
        .success();

    cli_cmd(&dir)
        .args(["analyze", "log.txt", "--level", "Info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("counted level Info: 2"));
}

#[test]
fn missing_arguments_exit_one() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir).assert().failure().code(1);
    cli_cmd(&dir).arg("log").assert().failure().code(1);
    cli_cmd(&dir)
        .args(["analyze", "log.txt"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn help_exits_zero() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("log-analyzer"));
}

#[test]
fn invalid_level_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["log", "Bro", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level: Bro"));
}

#[test]
fn analyze_missing_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["analyze", "absent.log", "--level", "Info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error opening log file"));
}
