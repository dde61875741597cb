use std::path::PathBuf;
use std::time::Duration;

use super::StateFiles;
use super::paths;

/// Fixed settings of the privileged shell.
///
/// The binary only ever uses `ShellConfig::default()`; nothing here is read
/// from the environment or from files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub pvcontrol_command: PathBuf,
    pub pvcontrol_socket: PathBuf,
    pub state_files: StateFiles,
    pub reboot_command: PathBuf,
    pub timeout: Option<Duration>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            pvcontrol_command: PathBuf::from(paths::PVCONTROL_COMMAND),
            pvcontrol_socket: PathBuf::from(paths::PVCONTROL_SOCKET),
            state_files: StateFiles::default(),
            reboot_command: PathBuf::from(paths::REBOOT_COMMAND),
            timeout: None,
        }
    }
}
