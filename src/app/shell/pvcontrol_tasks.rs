//! Tasks for the `microsoft/pantacor-pvcontrol` update type.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use log::{error, info};

use super::common_tasks;
use crate::app::cli::LaunchArguments;
use crate::domain::{
    AppError, EXIT_FAILURE, EXIT_UNSUPPORTED, ShellAction, ShellConfig, TaskResult,
};
use crate::ports::ProcessLauncher;

/// A pvcontrol command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PvControlInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Program and arguments for `action`, or `None` when pvcontrol has no
/// command for it.
///
/// Depends only on its inputs.
pub fn pvcontrol_invocation(
    action: ShellAction,
    target_data: &str,
    config: &ShellConfig,
) -> Option<PvControlInvocation> {
    let socket = path_arg(&config.pvcontrol_socket);

    let args: Vec<String> = match action {
        ShellAction::Install => vec![
            "-s".into(),
            socket,
            "-f".into(),
            path_arg(&config.state_files.installed),
            "steps".into(),
            "install".into(),
            target_data.into(),
        ],
        ShellAction::Apply => {
            vec!["-s".into(), socket, "commands".into(), "run".into(), target_data.into()]
        }
        ShellAction::GetStatus => vec![
            "-s".into(),
            socket,
            "-f".into(),
            path_arg(&config.state_files.progress),
            "steps".into(),
            "show-progress".into(),
            target_data.into(),
        ],
        ShellAction::Cancel | ShellAction::Rollback | ShellAction::Reboot => return None,
    };

    Some(PvControlInvocation { program: config.pvcontrol_command.clone(), args })
}

/// Run the pvcontrol task named by `--update-action`.
///
/// Errors and panics inside the task become `EXIT_FAILURE`.
pub(super) fn do_pvcontrol_task(
    args: &LaunchArguments,
    config: &ShellConfig,
    launcher: &dyn ProcessLauncher,
) -> TaskResult {
    let action = match args.update_action.parse::<ShellAction>() {
        Ok(action) => action,
        Err(e) => {
            error!("{}", e);
            return TaskResult::from_exit_status(EXIT_UNSUPPORTED);
        }
    };

    let target_data = args.target_data.as_deref();
    let outcome =
        panic::catch_unwind(AssertUnwindSafe(|| run_action(action, target_data, config, launcher)));

    match outcome {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            error!("Task '{}' failed: {}", action, e);
            TaskResult::from_exit_status(EXIT_FAILURE)
        }
        Err(payload) => {
            error!("Task '{}' panicked: {}", action, panic_message(payload.as_ref()));
            TaskResult::from_exit_status(EXIT_FAILURE)
        }
    }
}

fn run_action(
    action: ShellAction,
    target_data: Option<&str>,
    config: &ShellConfig,
    launcher: &dyn ProcessLauncher,
) -> Result<TaskResult, AppError> {
    match action {
        ShellAction::Cancel | ShellAction::Rollback => {
            info!("pvcontrol does not support '{}'", action);
            Ok(TaskResult::from_exit_status(EXIT_FAILURE))
        }
        ShellAction::Reboot => Ok(common_tasks::reboot(config, launcher)),
        _ => {
            let target = target_data
                .filter(|data| !data.is_empty())
                .ok_or(AppError::MissingTargetData { action })?;

            match pvcontrol_invocation(action, target, config) {
                Some(invocation) => {
                    info!("Running pvcontrol {}", action);
                    Ok(launcher.launch(&invocation.program, &invocation.args))
                }
                None => Ok(TaskResult::from_exit_status(EXIT_UNSUPPORTED)),
            }
        }
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingLauncher;
    use proptest::prelude::*;

    fn launch_args(action: &str, target_data: Option<&str>) -> LaunchArguments {
        LaunchArguments::new("microsoft/pantacor-pvcontrol", action)
            .with_target_data(target_data.map(str::to_string))
    }

    struct PanickingLauncher;

    impl ProcessLauncher for PanickingLauncher {
        fn launch(&self, _program: &Path, _args: &[String]) -> TaskResult {
            panic!("launcher exploded");
        }
    }

    #[test]
    fn install_passes_installed_file() {
        let invocation =
            pvcontrol_invocation(ShellAction::Install, "/tmp/wf1/img.swu", &ShellConfig::default())
                .unwrap();

        assert_eq!(invocation.program, PathBuf::from("/usr/lib/adu/pvcontrol"));
        assert_eq!(
            invocation.args,
            [
                "-s",
                "/var/run/pv-ctrl",
                "-f",
                "/var/lib/adu/pvinstalled.json",
                "steps",
                "install",
                "/tmp/wf1/img.swu"
            ]
        );
    }

    #[test]
    fn apply_runs_revision_command() {
        let invocation =
            pvcontrol_invocation(ShellAction::Apply, "r42", &ShellConfig::default()).unwrap();

        assert_eq!(invocation.args, ["-s", "/var/run/pv-ctrl", "commands", "run", "r42"]);
    }

    #[test]
    fn get_status_passes_progress_file() {
        let invocation =
            pvcontrol_invocation(ShellAction::GetStatus, "r42", &ShellConfig::default()).unwrap();

        assert_eq!(
            invocation.args,
            [
                "-s",
                "/var/run/pv-ctrl",
                "-f",
                "/var/lib/adu/pvprogress.json",
                "steps",
                "show-progress",
                "r42"
            ]
        );
    }

    #[test]
    fn actions_without_pvcontrol_command_yield_none() {
        for action in [ShellAction::Cancel, ShellAction::Rollback, ShellAction::Reboot] {
            assert!(pvcontrol_invocation(action, "r42", &ShellConfig::default()).is_none());
        }
    }

    proptest! {
        #[test]
        fn invocation_depends_only_on_inputs(
            index in 0usize..ShellAction::ALL.len(),
            target in "[A-Za-z0-9/._-]{0,40}",
        ) {
            let action = ShellAction::ALL[index];
            let config = ShellConfig::default();
            prop_assert_eq!(
                pvcontrol_invocation(action, &target, &config),
                pvcontrol_invocation(action, &target, &config.clone())
            );
            if let Some(invocation) = pvcontrol_invocation(action, &target, &config) {
                prop_assert_eq!(invocation.args.last().map(String::as_str), Some(target.as_str()));
            }
        }
    }

    #[test]
    fn cancel_and_rollback_fail_without_launching() {
        let launcher = RecordingLauncher::succeeding();
        for action in ["cancel", "rollback"] {
            let result =
                do_pvcontrol_task(&launch_args(action, Some("r42")), &ShellConfig::default(), &launcher);
            assert_eq!(result.exit_status, EXIT_FAILURE);
        }
        assert!(launcher.calls().is_empty());
    }

    #[test]
    fn missing_target_data_fails() {
        let launcher = RecordingLauncher::succeeding();
        for action in ["install", "apply", "get-status"] {
            for data in [None, Some("")] {
                let result =
                    do_pvcontrol_task(&launch_args(action, data), &ShellConfig::default(), &launcher);
                assert_eq!(result.exit_status, EXIT_FAILURE, "action {}", action);
            }
        }
        assert!(launcher.calls().is_empty());
    }

    #[test]
    fn unknown_action_is_unsupported() {
        let launcher = RecordingLauncher::succeeding();
        let result =
            do_pvcontrol_task(&launch_args("explode", Some("r42")), &ShellConfig::default(), &launcher);

        assert_eq!(result.exit_status, EXIT_UNSUPPORTED);
        assert!(launcher.calls().is_empty());
    }

    #[test]
    fn child_exit_status_is_returned() {
        let launcher = RecordingLauncher::with_exit_status(42);
        let result =
            do_pvcontrol_task(&launch_args("apply", Some("r42")), &ShellConfig::default(), &launcher);

        assert_eq!(result.exit_status, 42);
        assert_eq!(launcher.calls().len(), 1);
    }

    #[test]
    fn reboot_runs_reboot_command() {
        let launcher = RecordingLauncher::succeeding();
        let result =
            do_pvcontrol_task(&launch_args("reboot", None), &ShellConfig::default(), &launcher);

        assert_eq!(result.exit_status, 0);
        let calls = launcher.calls();
        assert_eq!(calls[0].program, PathBuf::from("/sbin/reboot"));
        assert!(calls[0].args.is_empty());
    }

    #[test]
    fn panic_in_task_becomes_failure() {
        let result = do_pvcontrol_task(
            &launch_args("install", Some("/tmp/img.swu")),
            &ShellConfig::default(),
            &PanickingLauncher,
        );

        assert_eq!(result.exit_status, EXIT_FAILURE);
    }
}
