use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::ShellAction;

/// Library-wide error type for handler and shell operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Update type string is not `<name>:<version>`.
    #[error("Invalid update type '{0}': expected '<name>:<version>'")]
    InvalidUpdateType(String),

    /// Update action string is not one the shell knows.
    #[error("Unsupported update action '{0}'")]
    UnsupportedUpdateAction(String),

    /// Update type string is not one the shell dispatches.
    #[error("Unknown update type '{0}'")]
    UnsupportedShellUpdateType(String),

    /// An action that needs `--target-data` was launched without it.
    #[error("Action '{action}' requires target data")]
    MissingTargetData { action: ShellAction },

    /// A pvcontrol state file could not be read or parsed.
    #[error("Failed to load state file '{}': {details}", path.display())]
    StateFile { path: PathBuf, details: String },

    /// The installed-info state file has no usable revision.
    #[error("No revision recorded in '{}'", .0.display())]
    MissingRevision(PathBuf),

    /// Payload URI cannot be requested at all.
    #[error("Invalid download URI '{url}': {details}")]
    InvalidUri { url: String, details: String },

    /// Payload transfer failed.
    #[error("Download of '{url}' failed: {details}")]
    Download { url: String, status: Option<u16>, details: String },

    /// Downloaded payload does not match the manifest hash.
    #[error("Hash mismatch for '{file}': expected {expected}, got {actual}")]
    HashMismatch { file: String, expected: String, actual: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn state_file<P: Into<PathBuf>, S: ToString>(path: P, details: S) -> Self {
        AppError::StateFile { path: path.into(), details: details.to_string() }
    }
}
