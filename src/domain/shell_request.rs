use std::path::PathBuf;

use super::{ShellAction, ShellUpdateType};

pub const UPDATE_TYPE_OPT: &str = "--update-type";
pub const UPDATE_ACTION_OPT: &str = "--update-action";
pub const TARGET_DATA_OPT: &str = "--target-data";
pub const TARGET_LOG_FOLDER_OPT: &str = "--target-log-folder";

/// A request from the unprivileged handler to the privileged shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellRequest {
    pub update_type: ShellUpdateType,
    pub action: ShellAction,
    pub target_data: Option<String>,
    pub target_log_folder: Option<PathBuf>,
}

impl ShellRequest {
    /// A pvcontrol request with no target data or log folder.
    pub fn pvcontrol(action: ShellAction) -> Self {
        Self {
            update_type: ShellUpdateType::PantacorPvControl,
            action,
            target_data: None,
            target_log_folder: None,
        }
    }

    pub fn with_target_data(mut self, data: impl Into<String>) -> Self {
        self.target_data = Some(data.into());
        self
    }

    pub fn with_log_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.target_log_folder = Some(folder.into());
        self
    }

    /// Command-line arguments for the shell binary.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            UPDATE_TYPE_OPT.to_string(),
            self.update_type.as_str().to_string(),
            UPDATE_ACTION_OPT.to_string(),
            self.action.as_str().to_string(),
        ];

        if let Some(data) = &self.target_data {
            args.push(TARGET_DATA_OPT.to_string());
            args.push(data.clone());
        }

        if let Some(folder) = &self.target_log_folder {
            args.push(TARGET_LOG_FOLDER_OPT.to_string());
            args.push(folder.to_string_lossy().into_owned());
        }

        args
    }
}
