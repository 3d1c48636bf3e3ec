//! Shared testing utilities for polygulp CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Component name the work directory is named after.
#[allow(dead_code)]
pub const COMPONENT_DIR: &str = "myTestComponent";

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty work directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join(COMPONENT_DIR);
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Temp root holding the work directory and answers files.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI runs in; also the default output root.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `polygulp` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("polygulp").expect("Failed to locate polygulp binary");
        cmd.current_dir(&self.work_dir).env_remove("POLYGULP_LOG");
        cmd
    }

    /// Write an answers file outside the work directory and return its path.
    pub fn write_answers(&self, content: &str) -> PathBuf {
        let file = self.root.child("answers.toml");
        file.write_str(content).expect("Failed to write answers file");
        file.path().to_path_buf()
    }

    /// Run a non-interactive scaffold with `answers` and `--skip-install`, asserting success.
    pub fn scaffold(&self, answers: &str) {
        let answers = self.write_answers(answers);
        self.cli().arg("--skip-install").arg("--answers").arg(&answers).assert().success();
    }

    /// Read a generated file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// All files under the work directory, relative and `/`-separated.
    pub fn files(&self) -> Vec<String> {
        let mut files = Vec::new();
        collect(&self.work_dir, &self.work_dir, &mut files);
        files.sort();
        files
    }
}

fn collect(base: &Path, dir: &Path, files: &mut Vec<String>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            collect(base, &path, files);
        } else {
            let relative = path.strip_prefix(base).unwrap();
            files.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}
