//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home and working directory
//! - Command builder helpers
//! - Fixture trees with mixed-case names

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would leak the developer's settings into a test run.
const ISOLATED_VARS: [&str; 4] = [
    "TRUECASE_SEPARATOR",
    "TRUECASE_CAPACITY",
    "TRUECASE_BASE_DIR",
    "TRUECASE_LOG_MODE",
];

/// Test environment with an isolated home and working directory.
///
/// Commands run with `HOME` pointing into the temporary directory and the
/// working directory set to `work`, so no configuration file outside the
/// test is ever picked up.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Fake home directory
    pub home: PathBuf,
    /// Working directory for commands
    pub work: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        let work = temp_dir.path().join("work");
        std::fs::create_dir_all(&home).expect("Failed to create home");
        std::fs::create_dir_all(&work).expect("Failed to create work dir");

        Self {
            temp_dir,
            home,
            work,
        }
    }

    /// Get a command builder running in this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("truecase").expect("Failed to find truecase binary");
        cmd.current_dir(&self.work)
            .env("HOME", &self.home)
            .env("USERPROFILE", &self.home);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder using the unix separator convention.
    pub fn unix_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--separator").arg("unix");
        cmd
    }

    /// The working directory.
    pub fn path(&self) -> &Path {
        &self.work
    }

    /// Create a file below the working directory, given with `/` separators.
    pub fn create_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = relative
            .split('/')
            .fold(self.work.clone(), |acc, part| acc.join(part));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a directory below the working directory.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = relative
            .split('/')
            .fold(self.work.clone(), |acc, part| acc.join(part));
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) {
        let dir = self.home.join(".truecase");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        std::fs::write(dir.join("config.yaml"), contents).expect("Failed to write user config");
    }

    /// Write a project configuration file in the working directory.
    pub fn write_project_config(&self, contents: &str) {
        std::fs::write(self.work.join("truecase.yaml"), contents)
            .expect("Failed to write project config");
    }

    /// Populate the working directory with the standard robot tree.
    ///
    /// ```text
    /// Maps/Office.MAP
    /// Maps/Lab/Floor1.map
    /// Params/p3dx.p
    /// .Hidden
    /// ```
    pub fn with_robot_tree(self) -> Self {
        self.create_file("Maps/Office.MAP", "2D-Map");
        self.create_file("Maps/Lab/Floor1.map", "2D-Map");
        self.create_file("Params/p3dx.p", "RobotParams");
        self.create_file(".Hidden", "secret");
        self
    }
}
