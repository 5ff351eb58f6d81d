//! Common test utilities for CLI integration tests.
//!
//! Each `TestEnv` gets its own temporary directory used as the process
//! directory and as `HOME`, so no real user or project configuration leaks
//! into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables read by the binary.
const DRIVEPATH_VARS: [&str; 5] = [
    "DRIVEPATH_CONFIG",
    "DRIVEPATH_WORKING_DIR",
    "DRIVEPATH_SEPARATOR",
    "DRIVEPATH_OUTPUT_FORMAT",
    "DRIVEPATH_LOG_MODE",
];

/// Test environment with an isolated directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// A command running in the temp directory with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("drivepath").expect("Failed to find drivepath binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in DRIVEPATH_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command whose fallback root is pinned to `dir`.
    pub fn command_at(&self, dir: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("--working-dir").arg(dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temp directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

/// Run a command expected to succeed and return its trimmed stdout.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("stdout is not UTF-8")
        .trim_end_matches('\n')
        .to_string()
}
