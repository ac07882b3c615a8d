//! Tests for the check command.

use crate::support::*;

fn stored_memo(t: &Test) -> Option<String> {
    let state: toml::Value = toml::from_str(&t.state_contents()).unwrap();
    state
        .get("resources")?
        .get("default")?
        .get(FIELD_MEMO)?
        .as_str()
        .map(str::to_string)
}

#[test]
fn test_first_check_reports_change() {
    let t = Test::new();

    let output = t.check(FIELD, SECRET);
    assert_success(&output);
    assert_stdout_contains(&output, "changed");

    let memo = stored_memo(&t).expect("memo stored");
    assert!(memo.starts_with("$2b$04$"));
}

#[test]
fn test_repeat_check_is_suppressed() {
    let t = Test::new();
    assert_success(&t.check(FIELD, SECRET));
    let first = stored_memo(&t);

    let output = t.check(FIELD, SECRET);
    assert_success(&output);
    assert_stdout_contains(&output, "suppressed");
    assert_eq!(stored_memo(&t), first);
}

#[test]
fn test_cleared_secret_is_suppressed() {
    let t = Test::new();
    assert_success(&t.check(FIELD, SECRET));
    let first = stored_memo(&t);

    let output = t.check(FIELD, "");
    assert_success(&output);
    assert_stdout_contains(&output, "suppressed");
    assert_eq!(stored_memo(&t), first);
}

#[test]
fn test_rotated_secret_replaces_memo() {
    let t = Test::new();
    assert_success(&t.check(FIELD, SECRET));
    let first = stored_memo(&t);

    let output = t.check(FIELD, ROTATED);
    assert_success(&output);
    assert_stdout_contains(&output, "changed");

    let second = stored_memo(&t).unwrap();
    assert_ne!(Some(second.clone()), first);
    assert_success(&t.verify(&second, ROTATED));
}

#[test]
fn test_secret_never_written_or_printed() {
    let t = Test::new();

    let output = t.check(FIELD, SECRET);
    assert_not_leaked(&output, SECRET);
    assert!(!t.state_contents().contains(SECRET));
}

#[test]
fn test_value_env_source() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["check", FIELD, "--value-env", "MY_PAT"])
        .env("MY_PAT", SECRET)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "changed");

    // Same secret via stdin is recognized.
    let output = t.check(FIELD, SECRET);
    assert_stdout_contains(&output, "suppressed");
}

#[test]
fn test_resources_tracked_separately() {
    let t = Test::new();
    assert_success(&t.check_resource("svc.a", FIELD, SECRET));

    let output = t.check_resource("svc.b", FIELD, SECRET);
    assert_stdout_contains(&output, "changed");

    let output = t.check_resource("svc.a", FIELD, SECRET);
    assert_stdout_contains(&output, "suppressed");
}

#[test]
fn test_custom_state_path() {
    let t = Test::new();
    let path = t.dir.path().join("custom.toml");

    let output = t
        .cmd()
        .args(["--state", path.to_str().unwrap(), "check", FIELD])
        .write_stdin(SECRET)
        .output()
        .unwrap();
    assert_success(&output);
    assert!(path.exists());
    assert!(!t.state_path().exists());
}

#[test]
fn test_garbage_memo_self_heals() {
    let t = Test::new();
    std::fs::write(
        t.state_path(),
        format!(
            "[tfsecrets]\nversion = \"0.1.0\"\n\n[resources.default]\n{} = \"{}\"\n",
            FIELD_MEMO, GARBAGE_MEMO
        ),
    )
    .unwrap();

    let output = t.check(FIELD, SECRET);
    assert_success(&output);
    assert_stdout_contains(&output, "changed");
    assert!(stored_memo(&t).unwrap().starts_with("$2b$"));
}

#[test]
fn test_overlong_secret_fails() {
    let t = Test::new();

    let output = t.check(FIELD, &"x".repeat(100));
    assert_failure(&output);
    assert_stderr_contains(&output, "hash computation failed");
    assert!(!t.state_path().exists());
}

#[test]
fn test_overlong_rotation_fails_instead_of_suppressing() {
    let t = Test::new();
    let prefix = "a".repeat(72);

    assert_success(&t.check(FIELD, &prefix));
    let before = t.state_contents();

    let output = t.check(FIELD, &format!("{}ROTATED", prefix));
    assert_failure(&output);
    assert_stderr_contains(&output, "hash computation failed");
    assert_eq!(t.state_contents(), before);
}

#[test]
fn test_invalid_field_key_rejected() {
    let t = Test::new();

    let output = t.check("bad key", SECRET);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid field key");
}
