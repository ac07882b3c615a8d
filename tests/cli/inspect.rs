//! Tests for the inspect command.

use crate::support::*;

#[test]
fn test_inspect_lists_memos() {
    let t = Test::new();
    assert_success(&t.check_resource("svc.main", FIELD, SECRET));

    let output = t.inspect();
    assert_success(&output);
    assert_stdout_contains(&output, "svc.main");
    assert_stdout_contains(&output, FIELD);
    assert_stdout_contains(&output, "bcrypt");
    assert_not_leaked(&output, SECRET);
}

#[test]
fn test_inspect_json() {
    let t = Test::new();
    assert_success(&t.check_resource("svc.main", FIELD, SECRET));
    assert_success(&t.check_resource("svc.other", "password", SECRET));

    let output = t
        .cmd()
        .args(["inspect", "--json", "--resource", "svc.main"])
        .output()
        .unwrap();
    assert_success(&output);

    let reports: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["resource"], "svc.main");
    assert_eq!(reports[0]["field"], FIELD);
    assert_eq!(reports[0]["recognized"], true);
}

#[test]
fn test_inspect_flags_unrecognized_memo() {
    let t = Test::new();
    std::fs::write(
        t.state_path(),
        format!(
            "[tfsecrets]\nversion = \"0.1.0\"\n\n[resources.default]\n{} = \"{}\"\n",
            FIELD_MEMO, GARBAGE_MEMO
        ),
    )
    .unwrap();

    let output = t.inspect();
    assert_success(&output);
    assert_stdout_contains(&output, "unrecognized");
}

#[test]
fn test_inspect_without_state_fails() {
    let t = Test::new();

    let output = t.inspect();
    assert_failure(&output);
    assert_stderr_contains(&output, "state file not found");
}
