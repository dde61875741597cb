use log::{error, info};

use crate::app::cli::LaunchArguments;
use crate::domain::{EXIT_UNSUPPORTED, ShellAction, ShellConfig, TaskResult};
use crate::ports::ProcessLauncher;

/// Tasks shared by every update type. Only reboot is available.
pub(super) fn do_common_task(
    args: &LaunchArguments,
    config: &ShellConfig,
    launcher: &dyn ProcessLauncher,
) -> TaskResult {
    match args.update_action.parse::<ShellAction>() {
        Ok(ShellAction::Reboot) => reboot(config, launcher),
        Ok(action) => {
            error!("Common tasks do not support '{}'", action);
            TaskResult::from_exit_status(EXIT_UNSUPPORTED)
        }
        Err(e) => {
            error!("{}", e);
            TaskResult::from_exit_status(EXIT_UNSUPPORTED)
        }
    }
}

pub(super) fn reboot(config: &ShellConfig, launcher: &dyn ProcessLauncher) -> TaskResult {
    info!("Rebooting the system");
    launcher.launch(&config.reboot_command, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingLauncher;
    use std::path::PathBuf;

    #[test]
    fn reboot_launches_configured_command() {
        let launcher = RecordingLauncher::succeeding();
        let config =
            ShellConfig { reboot_command: PathBuf::from("/bin/true"), ..ShellConfig::default() };

        let result = do_common_task(&LaunchArguments::new("common", "reboot"), &config, &launcher);

        assert!(result.is_success());
        assert_eq!(launcher.calls()[0].program, PathBuf::from("/bin/true"));
    }

    #[test]
    fn other_actions_are_unsupported() {
        let launcher = RecordingLauncher::succeeding();
        for action in ["install", "apply", "get-status", "bogus"] {
            let result = do_common_task(
                &LaunchArguments::new("common", action),
                &ShellConfig::default(),
                &launcher,
            );
            assert_eq!(result.exit_status, EXIT_UNSUPPORTED);
        }
        assert!(launcher.calls().is_empty());
    }
}
