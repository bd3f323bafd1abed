//! Test environment for isolated CLI runs.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Variables the binary reads; cleared so the host environment never leaks in
const CLEARED_VARS: &[&str] = &[
    "NEW_RELIC_ACCOUNT_ID",
    "NEW_RELIC_API_KEY",
    "NEW_RELIC_REGION",
    "NEW_RELIC_GRAPHQL_ENDPOINT",
    "MOBILE_MARKER_STATE_FILE",
    "MOBILE_MARKER_CUSTOM_ATTRIBUTES",
    "MOBILE_MARKER_LOG_LEVEL",
    "RUST_LOG",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working directory plus helpers to run the binary in it
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_mobile-deploy-marker")),
        }
    }

    /// Get path relative to the root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file relative to the root
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.root.path(), args, env_vars)
    }

    fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args);
        for var in CLEARED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute mobile-deploy-marker");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
