//! Entry point the update agent host calls to obtain the handler.

use std::panic;
use std::path::Path;

use log::{error, info};

use super::{DefaultPvControlHandler, PvControlHandler};
use crate::adapters::{ChildProcessLauncher, HttpDownloader};
use crate::app::config::load_handler_config;
use crate::app::logging::{self, HANDLER_LOG_CATEGORY};
use crate::domain::config::paths;
use crate::domain::{
    AppError, LogSeverity, PVCONTROL_UPDATE_TYPE_NAME, PVCONTROL_UPDATE_TYPE_VERSION,
};
use crate::ports::ContentHandler;

/// Create the pvcontrol content handler with logging at `severity`.
///
/// Returns `None` when construction fails; the failure is logged and never
/// propagates to the host.
pub fn create_update_content_handler_extension(
    severity: LogSeverity,
) -> Option<Box<dyn ContentHandler>> {
    create_handler_with_config(severity, Path::new(paths::HANDLER_CONFIG_FILE))
}

/// Same as [`create_update_content_handler_extension`], reading configuration
/// from `config_path`.
pub fn create_handler_with_config(
    severity: LogSeverity,
    config_path: &Path,
) -> Option<Box<dyn ContentHandler>> {
    let logging = logging::init(severity, HANDLER_LOG_CATEGORY);
    info!(
        "Instantiating an Update Content Handler for '{}:{}'",
        PVCONTROL_UPDATE_TYPE_NAME, PVCONTROL_UPDATE_TYPE_VERSION
    );

    match panic::catch_unwind(|| build_handler(config_path)) {
        Ok(Ok(handler)) => Some(Box::new(handler.with_logging(logging))),
        Ok(Err(e)) => {
            error!("Unhandled error while creating the pvcontrol handler: {}", e);
            None
        }
        Err(_) => {
            error!("Unhandled panic while creating the pvcontrol handler");
            None
        }
    }
}

fn build_handler(config_path: &Path) -> Result<DefaultPvControlHandler, AppError> {
    let config = load_handler_config(config_path)?;
    let launcher = ChildProcessLauncher::with_timeout(config.shell.timeout());
    let downloader = HttpDownloader::new(&config.download)?;
    Ok(PvControlHandler::new(config, launcher, downloader))
}
