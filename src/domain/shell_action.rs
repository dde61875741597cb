use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Actions the privileged shell can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellAction {
    /// Install an image file.
    Install,
    /// Run a previously installed revision.
    Apply,
    /// Cancel an in-flight operation.
    Cancel,
    /// Revert an applied revision.
    Rollback,
    /// Record the progress of a revision into the progress file.
    GetStatus,
    /// Reboot the device.
    Reboot,
}

impl ShellAction {
    /// All actions, in wire-table order.
    pub const ALL: [ShellAction; 6] = [
        ShellAction::Install,
        ShellAction::Apply,
        ShellAction::Cancel,
        ShellAction::Rollback,
        ShellAction::GetStatus,
        ShellAction::Reboot,
    ];

    /// Value passed with `--update-action`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellAction::Install => "install",
            ShellAction::Apply => "apply",
            ShellAction::Cancel => "cancel",
            ShellAction::Rollback => "rollback",
            ShellAction::GetStatus => "get-status",
            ShellAction::Reboot => "reboot",
        }
    }
}

impl FromStr for ShellAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShellAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| AppError::UnsupportedUpdateAction(s.to_string()))
    }
}

impl fmt::Display for ShellAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Update types the privileged shell dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellUpdateType {
    /// `pvcontrol` revision updates.
    PantacorPvControl,
    /// Device-wide tasks shared by all update types (reboot).
    Common,
}

impl ShellUpdateType {
    /// Value passed with `--update-type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellUpdateType::PantacorPvControl => "microsoft/pantacor-pvcontrol",
            ShellUpdateType::Common => "common",
        }
    }
}

impl FromStr for ShellUpdateType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "microsoft/pantacor-pvcontrol" => Ok(ShellUpdateType::PantacorPvControl),
            "common" => Ok(ShellUpdateType::Common),
            other => Err(AppError::UnsupportedShellUpdateType(other.to_string())),
        }
    }
}

impl fmt::Display for ShellUpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_strings_round_trip() {
        for action in ShellAction::ALL {
            assert_eq!(action.as_str().parse::<ShellAction>().unwrap(), action);
        }
    }

    #[test]
    fn action_parsing_is_exact() {
        assert!("Install".parse::<ShellAction>().is_err());
        assert!("getstatus".parse::<ShellAction>().is_err());
        assert!("download".parse::<ShellAction>().is_err());
    }

    #[test]
    fn update_type_strings() {
        assert_eq!(
            "microsoft/pantacor-pvcontrol".parse::<ShellUpdateType>().unwrap(),
            ShellUpdateType::PantacorPvControl
        );
        assert_eq!("common".parse::<ShellUpdateType>().unwrap(), ShellUpdateType::Common);
        assert!("microsoft/swupdate".parse::<ShellUpdateType>().is_err());
    }
}
