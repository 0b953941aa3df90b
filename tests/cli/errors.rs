//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("get"));
    assert!(out.contains("add"));
    assert!(out.contains("update"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_missing_config_suggests_fix() {
    let t = Test::new();

    let output = t.run(&["get", TOKEN]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no configuration found");
    assert_stderr_contains(&output, "--config");
}

#[test]
fn test_missing_password_without_terminal() {
    let t = Test::configured();

    let output = t.run(&["get", TOKEN]);
    assert_failure(&output);
    assert_stderr_contains(&output, "credentials.password");
    assert_stderr_contains(&output, "CARDVAULT_PASSWORD");
}

#[test]
fn test_invalid_config_reported() {
    let t = Test::with_config("[service]\nendpoint = \"https://x\"\n");

    let output = t.dry_run(&["get", TOKEN]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("cardvault"));
}

#[test]
fn test_version_flag() {
    use predicates::prelude::*;

    let t = Test::new();
    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cardvault"));
}
