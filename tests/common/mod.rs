//! Shared testing utilities for factboard CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI
/// exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `factboard` binary.
    ///
    /// The API key is cleared so each test opts into a credential
    /// explicitly.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("factboard").expect("Failed to locate factboard binary");
        cmd.current_dir(&self.work_dir).env_remove("OPENAI_API_KEY");
        cmd
    }

    /// Write a `factboard.toml` into the working directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("factboard.toml"), content)
            .expect("Failed to write config file");
    }

    /// Write a blurb file and return its path.
    pub fn write_blurb(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write blurb file");
        path
    }
}
