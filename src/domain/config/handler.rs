//! Handler configuration loaded from `pvcontrol-handler.toml`.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::StateFiles;
use super::paths;

/// Retry window handed to the downloader: one day.
pub const DOWNLOAD_RETRY_TIMEOUT_DEFAULT_SECS: u64 = 60 * 60 * 24;

/// Configuration for the content handler.
#[derive(Debug, Clone, Deserialize)]
pub struct HandlerConfig {
    /// Folder passed to the shell with `--target-log-folder`.
    #[serde(default = "paths::adu_log_folder")]
    pub log_folder: PathBuf,
    /// Privileged shell invocation settings.
    #[serde(default)]
    pub shell: ShellLaunchConfig,
    /// Payload download settings.
    #[serde(default)]
    pub download: DownloadConfig,
    /// Must match what the shell passes to pvcontrol, so never read from file.
    #[serde(skip)]
    pub state_files: StateFiles,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            log_folder: paths::adu_log_folder(),
            shell: ShellLaunchConfig::default(),
            download: DownloadConfig::default(),
            state_files: StateFiles::default(),
        }
    }
}

impl HandlerConfig {
    pub fn with_state_files(mut self, state_files: StateFiles) -> Self {
        self.state_files = state_files;
        self
    }
}

/// How the handler reaches the privileged shell.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellLaunchConfig {
    /// Path to the `adu-shell` binary.
    #[serde(default = "paths::adu_shell")]
    pub path: PathBuf,
    /// Upper bound on a single shell invocation. Unbounded when absent.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ShellLaunchConfig {
    fn default() -> Self {
        Self { path: paths::adu_shell(), timeout_secs: None }
    }
}

impl ShellLaunchConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Payload download settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadConfig {
    /// Total time spent retrying a failed download.
    #[serde(default = "default_retry_timeout")]
    pub retry_timeout_secs: u64,
    /// Timeout for a single HTTP request.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            retry_timeout_secs: default_retry_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl DownloadConfig {
    pub fn retry_timeout(&self) -> Duration {
        Duration::from_secs(self.retry_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_retry_timeout() -> u64 {
    DOWNLOAD_RETRY_TIMEOUT_DEFAULT_SECS
}

fn default_request_timeout() -> u64 {
    300
}
