//! Privileged task dispatcher behind the `adu-shell` binary.
//!
//! Maps an update type and action onto exactly one child process. Anything
//! outside the fixed tables is refused without launching a child.

mod common_tasks;
mod pvcontrol_tasks;

use log::{error, info};

use crate::app::cli::LaunchArguments;
use crate::domain::{EXIT_UNSUPPORTED, ShellConfig, ShellUpdateType, TaskResult};
use crate::ports::ProcessLauncher;

pub use pvcontrol_tasks::{PvControlInvocation, pvcontrol_invocation};

/// Run the task `args` describe and return its status and output.
pub fn do_work(
    args: &LaunchArguments,
    config: &ShellConfig,
    launcher: &dyn ProcessLauncher,
) -> TaskResult {
    let update_type = match args.update_type.parse::<ShellUpdateType>() {
        Ok(update_type) => update_type,
        Err(e) => {
            error!("{}", e);
            return TaskResult::from_exit_status(EXIT_UNSUPPORTED);
        }
    };

    let result = match update_type {
        ShellUpdateType::PantacorPvControl => {
            pvcontrol_tasks::do_pvcontrol_task(args, config, launcher)
        }
        ShellUpdateType::Common => common_tasks::do_common_task(args, config, launcher),
    };

    show_child_process_logs(&result.output);
    result
}

fn show_child_process_logs(output: &str) {
    if output.is_empty() {
        return;
    }

    info!("########## Begin child process logs ##########");
    for line in output.lines() {
        info!("#  {}", line);
    }
    info!("########## End child process logs ##########");
}
