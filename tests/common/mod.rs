//! Shared testing utilities for handler and shell integration tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use adu_pvcontrol::domain::{HandlerConfig, StateFiles};

/// Isolated directory tree standing in for a device's work, log and state
/// folders.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        for dir in ["work/wf1", "log", "state", "bin"] {
            fs::create_dir_all(root.path().join(dir)).expect("Failed to create test directory");
        }
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Work folder of workflow `wf1`.
    pub fn work_folder(&self) -> PathBuf {
        self.root().join("work/wf1")
    }

    pub fn log_folder(&self) -> PathBuf {
        self.root().join("log")
    }

    pub fn state_files(&self) -> StateFiles {
        StateFiles {
            installed: self.root().join("state/pvinstalled.json"),
            progress: self.root().join("state/pvprogress.json"),
        }
    }

    pub fn write_installed(&self, content: &str) {
        fs::write(self.state_files().installed, content).expect("Failed to write installed file");
    }

    pub fn write_progress(&self, content: &str) {
        fs::write(self.state_files().progress, content).expect("Failed to write progress file");
    }

    /// File the stub shell records its arguments in, one per line.
    pub fn shell_args_log(&self) -> PathBuf {
        self.root().join("shell-args")
    }

    /// Arguments of the last stub shell run, or `None` if it never ran.
    pub fn recorded_shell_args(&self) -> Option<Vec<String>> {
        fs::read_to_string(self.shell_args_log())
            .ok()
            .map(|content| content.lines().map(str::to_string).collect())
    }

    /// Install an `adu-shell` stand-in that records its arguments and then
    /// runs `body`.
    pub fn stub_shell(&self, body: &str) -> PathBuf {
        let path = self.root().join("bin/adu-shell");
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n{}\n",
            self.shell_args_log().display(),
            body
        );
        fs::write(&path, script).expect("Failed to write stub shell");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark stub shell executable");
        path
    }

    /// Handler configuration pointing at `shell` and this context's folders.
    pub fn handler_config(&self, shell: &Path) -> HandlerConfig {
        let mut config = HandlerConfig::default().with_state_files(self.state_files());
        config.shell.path = shell.to_path_buf();
        config.log_folder = self.log_folder();
        config.download.retry_timeout_secs = 1;
        config.download.request_timeout_secs = 5;
        config
    }

    /// Build a command for invoking the compiled `adu-shell` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("adu-shell").expect("Failed to locate adu-shell binary");
        cmd.current_dir(self.root());
        cmd
    }
}
