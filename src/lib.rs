//! adu-pvcontrol: device update content handler for pvcontrol revisions.
//!
//! The handler runs unprivileged inside the update agent and hands every
//! privileged step to the `adu-shell` binary, which maps a fixed set of
//! actions onto `pvcontrol` invocations.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::cli::LaunchArguments;
pub use app::handler::{
    DefaultPvControlHandler, PvControlHandler, create_handler_with_config,
    create_update_content_handler_extension,
};
pub use app::shell::{PvControlInvocation, do_work, pvcontrol_invocation};
pub use domain::{AducResult, AppError, LogSeverity, ResultCode, TaskResult, Workflow};
pub use ports::{ContentHandler, Downloader, ProcessLauncher, WorkflowData};
