//! Readers for the JSON state files pvcontrol leaves behind.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::{AppError, InstalledInfo, ProgressInfo, StateFiles};

/// Reads pvcontrol state files from their configured locations.
#[derive(Debug, Clone)]
pub struct JsonStateFiles {
    files: StateFiles,
}

impl JsonStateFiles {
    pub fn new(files: StateFiles) -> Self {
        Self { files }
    }

    pub fn installed_path(&self) -> &Path {
        &self.files.installed
    }

    pub fn progress_path(&self) -> &Path {
        &self.files.progress
    }

    /// Installed-info record. A missing or blank revision is an error.
    pub fn read_installed(&self) -> Result<InstalledInfo, AppError> {
        let info: InstalledInfo = read_json(&self.files.installed)?;
        if info.revision.trim().is_empty() {
            return Err(AppError::MissingRevision(self.files.installed.clone()));
        }
        Ok(info)
    }

    pub fn read_progress(&self) -> Result<ProgressInfo, AppError> {
        read_json(&self.files.progress)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::state_file(path, e))?;
    serde_json::from_str(&content).map_err(|e| AppError::state_file(path, e))
}
