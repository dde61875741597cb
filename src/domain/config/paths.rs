//! Well-known on-device locations.

use std::path::PathBuf;

/// Privileged helper that runs pvcontrol on the handler's behalf.
pub const ADU_SHELL: &str = "/usr/lib/adu/adu-shell";

/// The pvcontrol control tool.
pub const PVCONTROL_COMMAND: &str = "/usr/lib/adu/pvcontrol";

/// UNIX socket of the pvcontrol daemon.
pub const PVCONTROL_SOCKET: &str = "/var/run/pv-ctrl";

/// Written by `pvcontrol steps install`, read by apply.
pub const PVINSTALLED_FILE: &str = "/var/lib/adu/pvinstalled.json";

/// Written by `pvcontrol steps show-progress`, read by is-installed.
pub const PVPROGRESS_FILE: &str = "/var/lib/adu/pvprogress.json";

/// Agent log folder handed to the shell for install and apply.
pub const ADU_LOG_FOLDER: &str = "/var/log/adu";

pub const REBOOT_COMMAND: &str = "/sbin/reboot";

/// Optional handler configuration file.
pub const HANDLER_CONFIG_FILE: &str = "/etc/adu/pvcontrol-handler.toml";

pub fn adu_shell() -> PathBuf {
    PathBuf::from(ADU_SHELL)
}

pub fn adu_log_folder() -> PathBuf {
    PathBuf::from(ADU_LOG_FOLDER)
}
