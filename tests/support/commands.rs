//! Command helper methods for Test.

use std::process::Output;

use assert_cmd::Command;

use super::Test;

impl Test {
    /// Create a stencil command running in the test directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("stencil").expect("failed to find stencil binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `stencil strip` reading from stdin.
    pub fn strip_stdin(&self, input: &str) -> Output {
        self.cmd()
            .arg("strip")
            .write_stdin(input)
            .output()
            .expect("failed to run stencil strip")
    }

    /// Shortcut for `stencil strip <file>`.
    pub fn strip_file(&self, name: &str) -> Output {
        self.cmd()
            .args(["strip", name])
            .output()
            .expect("failed to run stencil strip")
    }

    /// Shortcut for `stencil inject` with explicit paths, writing to stdout.
    pub fn inject(&self, template: &str, secrets: &str, key: &str) -> Output {
        self.cmd()
            .args(["inject", template, secrets, key])
            .output()
            .expect("failed to run stencil inject")
    }

    /// Shortcut for `stencil inject` with an output path.
    pub fn inject_to(&self, template: &str, secrets: &str, key: &str, output: &str) -> Output {
        self.cmd()
            .args(["inject", template, secrets, key, output])
            .output()
            .expect("failed to run stencil inject")
    }

    /// Shortcut for `stencil check`.
    pub fn check(&self, files: &[&str]) -> Output {
        self.cmd()
            .arg("check")
            .args(files)
            .output()
            .expect("failed to run stencil check")
    }

    /// Shortcut for `stencil check --json`.
    pub fn check_json(&self, files: &[&str]) -> Output {
        self.cmd()
            .arg("check")
            .arg("--json")
            .args(files)
            .output()
            .expect("failed to run stencil check --json")
    }
}
