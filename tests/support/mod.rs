//! Test support utilities for satchel integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// The AWS environment is pinned (static dummy credentials, fixed
/// region, instance metadata disabled) so no test ever walks the real
/// provider chain. Tests only exercise flows that make zero store
/// requests; anything touching the store runs against the in-memory
/// backend at the library level instead.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Create a satchel command with the pinned environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("satchel").expect("failed to find satchel binary");
        cmd.current_dir(self.dir.path());
        cmd.env("AWS_ACCESS_KEY_ID", "testing");
        cmd.env("AWS_SECRET_ACCESS_KEY", "testing");
        cmd.env("AWS_REGION", "us-east-1");
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd.env_remove("AWS_PROFILE");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Path of a file inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded\nstdout: {}",
        stdout(output)
    );
}
