pub mod handler;
pub mod parse;
pub mod paths;
pub mod shell;

use std::path::PathBuf;

pub use handler::{DownloadConfig, HandlerConfig, ShellLaunchConfig};
pub use parse::parse_handler_config;
pub use shell::ShellConfig;

/// Locations of the JSON files pvcontrol writes for the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFiles {
    pub installed: PathBuf,
    pub progress: PathBuf,
}

impl Default for StateFiles {
    fn default() -> Self {
        Self {
            installed: PathBuf::from(paths::PVINSTALLED_FILE),
            progress: PathBuf::from(paths::PVPROGRESS_FILE),
        }
    }
}
