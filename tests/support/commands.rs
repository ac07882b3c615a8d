//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a tfsecrets command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME inside the temporary home directory
    /// - Current directory set to the test project directory
    /// - Colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("tfsecrets").expect("failed to find tfsecrets binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("TFSECRETS_STATE");
        cmd.env_remove("TFSECRETS_MEMO_COST");
        cmd.env_remove("TFSECRETS_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `tfsecrets check FIELD` with the secret on stdin.
    pub fn check(&self, field: &str, secret: &str) -> Output {
        self.cmd()
            .args(["check", field])
            .write_stdin(format!("{}\n", secret))
            .output()
            .expect("failed to run tfsecrets check")
    }

    /// Shortcut for `tfsecrets check FIELD --resource ADDR`.
    pub fn check_resource(&self, resource: &str, field: &str, secret: &str) -> Output {
        self.cmd()
            .args(["check", field, "--resource", resource])
            .write_stdin(format!("{}\n", secret))
            .output()
            .expect("failed to run tfsecrets check")
    }

    /// Shortcut for `tfsecrets hash`.
    pub fn hash(&self, secret: &str) -> Output {
        self.cmd()
            .arg("hash")
            .write_stdin(secret.to_string())
            .output()
            .expect("failed to run tfsecrets hash")
    }

    /// Shortcut for `tfsecrets verify MEMO`.
    pub fn verify(&self, memo: &str, secret: &str) -> Output {
        self.cmd()
            .args(["verify", memo])
            .write_stdin(secret.to_string())
            .output()
            .expect("failed to run tfsecrets verify")
    }

    /// Shortcut for `tfsecrets inspect`.
    pub fn inspect(&self) -> Output {
        self.cmd()
            .arg("inspect")
            .output()
            .expect("failed to run tfsecrets inspect")
    }
}
