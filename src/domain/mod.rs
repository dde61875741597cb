pub mod config;
pub mod error;
pub mod log_severity;
pub mod result;
pub mod shell_action;
pub mod shell_request;
pub mod state_files;
pub mod task_result;
pub mod update_type;
pub mod workflow;

pub use config::{HandlerConfig, ShellConfig, StateFiles};
pub use error::AppError;
pub use log_severity::LogSeverity;
pub use result::{AducResult, ResultCode, erc};
pub use shell_action::{ShellAction, ShellUpdateType};
pub use shell_request::ShellRequest;
pub use state_files::{InstalledInfo, ProgressInfo, ProgressStatus};
pub use task_result::{
    EXIT_EXEC_FAILED, EXIT_FAILURE, EXIT_SIGNAL_BASE, EXIT_SUCCESS, EXIT_TIMED_OUT,
    EXIT_UNSUPPORTED, TaskResult,
};
pub use update_type::{PVCONTROL_UPDATE_TYPE_NAME, PVCONTROL_UPDATE_TYPE_VERSION, UpdateType};
pub use workflow::{FileEntity, Workflow};
