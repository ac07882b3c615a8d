//! Tests for the hash and verify commands.

use crate::support::*;

#[test]
fn test_hash_prints_bcrypt_memo() {
    let t = Test::new();

    let output = t.hash(SECRET);
    assert_success(&output);
    let memo = stdout(&output).trim().to_string();
    assert!(memo.starts_with("$2b$04$"));
    assert_eq!(memo.len(), 60);
}

#[test]
fn test_hash_then_verify() {
    let t = Test::new();
    let memo = stdout(&t.hash(SECRET)).trim().to_string();

    let output = t.verify(&memo, SECRET);
    assert_success(&output);
    assert_stdout_contains(&output, "matches");

    let output = t.verify(&memo, ROTATED);
    assert_failure(&output);
    assert_stderr_contains(&output, "does not match");
}

#[test]
fn test_verify_garbage_memo_fails_cleanly() {
    let t = Test::new();

    let output = t.verify(GARBAGE_MEMO, SECRET);
    assert_failure(&output);
    assert_stdout_contains(&output, "no known bcrypt prefix");
}

#[test]
fn test_hash_blank_secret_rejected() {
    let t = Test::new();

    let output = t.hash("   \n");
    assert_failure(&output);
    assert_stderr_contains(&output, "no secret value supplied");
}

#[test]
fn test_hash_honors_cost_override() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("hash")
        .env("TFSECRETS_MEMO_COST", "5")
        .write_stdin(SECRET)
        .output()
        .unwrap();
    assert_success(&output);
    assert!(stdout(&output).starts_with("$2b$05$"));
}

#[test]
fn test_settings_file_cost() {
    let t = Test::new();
    t.write_settings("[memo]\ncost = 6\n");

    let output = t.hash(SECRET);
    assert_success(&output);
    assert!(stdout(&output).starts_with("$2b$06$"));
}
