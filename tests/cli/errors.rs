//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("tfsecrets") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_secret_read_from_stdin_without_flag() {
    let t = Test::new();

    let output = t.cmd().arg("hash").write_stdin(SECRET).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "$2b$04$");
    assert_not_leaked(&output, SECRET);
}

#[test]
fn test_no_stdin_flag() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["hash", "--stdin"])
        .write_stdin(SECRET)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--stdin");
}

#[test]
fn test_value_env_takes_precedence_over_stdin() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["check", FIELD, "--value-env", "TOKEN_VALUE"])
        .env("TOKEN_VALUE", SECRET)
        .write_stdin(ROTATED)
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.check(FIELD, SECRET);
    assert_stdout_contains(&output, "suppressed");
}

#[test]
fn test_invalid_settings_reported() {
    let t = Test::new();
    t.write_settings("[memo]\ncost = 99\n");

    let output = t.hash(SECRET);
    assert_failure(&output);
    assert_stderr_contains(&output, "memo.cost");
}

#[test]
fn test_invalid_cost_override_reported() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("hash")
        .env("TFSECRETS_MEMO_COST", "fast")
        .write_stdin(SECRET)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "memo.cost");
}

#[test]
fn test_completions() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "tfsecrets");
}

#[test]
fn test_verbose_logs_to_stderr_without_secret() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "check", FIELD])
        .write_stdin(SECRET)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
    assert_not_leaked(&output, SECRET);
}
