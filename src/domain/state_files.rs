//! Shapes of the JSON files `pvcontrol` writes for the handler.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Contents of the installed-info file written by `steps install`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstalledInfo {
    pub revision: String,
}

/// Contents of the progress file written by `steps show-progress`.
///
/// Only `status` decides the outcome. The other fields are informational and
/// are read loosely: a value of an unexpected JSON type reads as absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressInfo {
    pub status: String,
    #[serde(default)]
    state: Option<Value>,
    #[serde(default)]
    progress: Option<Value>,
    #[serde(default, rename = "msg")]
    message: Option<Value>,
}

impl ProgressInfo {
    pub fn status(&self) -> ProgressStatus {
        ProgressStatus::from_status(&self.status)
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_ref().and_then(Value::as_str)
    }

    /// Completion percentage, when pvcontrol reports a whole number.
    pub fn progress(&self) -> Option<u64> {
        self.progress.as_ref().and_then(Value::as_u64)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().and_then(Value::as_str)
    }
}

/// Interpretation of a progress `status` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressStatus {
    Done,
    Updated,
    Error,
    WontGo,
    /// Any other value: the update has not settled yet.
    InProgress(String),
}

impl ProgressStatus {
    pub fn from_status(status: &str) -> Self {
        match status {
            "DONE" => ProgressStatus::Done,
            "UPDATED" => ProgressStatus::Updated,
            "ERROR" => ProgressStatus::Error,
            "WONTGO" => ProgressStatus::WontGo,
            other => ProgressStatus::InProgress(other.to_string()),
        }
    }

    pub fn is_installed(&self) -> bool {
        matches!(self, ProgressStatus::Done | ProgressStatus::Updated)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProgressStatus::Error | ProgressStatus::WontGo)
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressStatus::Done => f.write_str("DONE"),
            ProgressStatus::Updated => f.write_str("UPDATED"),
            ProgressStatus::Error => f.write_str("ERROR"),
            ProgressStatus::WontGo => f.write_str("WONTGO"),
            ProgressStatus::InProgress(other) => f.write_str(other),
        }
    }
}
