//! Content handler for `microsoft/pvcontrol:1` updates.
//!
//! Every lifecycle call that needs privileges is turned into one invocation of
//! the `adu-shell` helper. Results travel back through the helper's exit
//! status and the JSON files pvcontrol writes.

mod factory;

use std::fs;
use std::io;
use std::path::{Component, Path};

use log::{error, info, warn};

use crate::adapters::{ChildProcessLauncher, HttpDownloader, JsonStateFiles};
use crate::app::logging::LoggingGuard;
use crate::domain::{
    AducResult, FileEntity, HandlerConfig, PVCONTROL_UPDATE_TYPE_VERSION, ProgressStatus,
    ResultCode, ShellAction, ShellRequest, TaskResult, UpdateType, erc,
};
use crate::ports::{ContentHandler, Downloader, ProcessLauncher, WorkflowData};

pub use factory::{create_handler_with_config, create_update_content_handler_extension};

/// Handler wired to real processes and HTTP transport.
pub type DefaultPvControlHandler = PvControlHandler<ChildProcessLauncher, HttpDownloader>;

/// The pvcontrol implementation of [`ContentHandler`].
///
/// Holds no per-workflow state; a fresh instance serves one workflow.
pub struct PvControlHandler<L: ProcessLauncher, D: Downloader> {
    config: HandlerConfig,
    launcher: L,
    downloader: D,
    state_files: JsonStateFiles,
    _logging: Option<LoggingGuard>,
}

impl<L: ProcessLauncher, D: Downloader> PvControlHandler<L, D> {
    pub fn new(config: HandlerConfig, launcher: L, downloader: D) -> Self {
        let state_files = JsonStateFiles::new(config.state_files.clone());
        Self { config, launcher, downloader, state_files, _logging: None }
    }

    /// Tie the logger's lifetime to this handler.
    pub(crate) fn with_logging(mut self, guard: LoggingGuard) -> Self {
        self._logging = Some(guard);
        self
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    fn run_shell(&self, request: &ShellRequest) -> TaskResult {
        self.launcher.launch(&self.config.shell.path, &request.to_args())
    }
}

impl<L: ProcessLauncher, D: Downloader> ContentHandler for PvControlHandler<L, D> {
    fn download(&self, workflow: &dyn WorkflowData) -> AducResult {
        let update_type = workflow.update_type();
        let parsed = match update_type.parse::<UpdateType>() {
            Ok(parsed) => parsed,
            Err(_) => {
                error!(
                    "PVControl packages download failed. Unknown handler version (update type: {})",
                    update_type
                );
                return AducResult::failure(erc::DOWNLOAD_UNKNOWN_UPDATE_VERSION);
            }
        };

        if parsed.version() != PVCONTROL_UPDATE_TYPE_VERSION {
            error!("PVControl packages download failed. Wrong handler version {}", parsed.version());
            return AducResult::failure(erc::DOWNLOAD_WRONG_UPDATE_VERSION);
        }

        // `microsoft/pvcontrol:1` carries exactly one image file.
        let file_count = workflow.update_file_count();
        if file_count != 1 {
            error!("PVControl expecting one file. ({})", file_count);
            return AducResult::failure(erc::DOWNLOAD_WRONG_FILECOUNT);
        }

        let Some(entity) = workflow.update_file(0).filter(has_plain_target_filename) else {
            error!("PVControl cannot read a valid update file entity");
            return AducResult::failure(erc::DOWNLOAD_BAD_FILE_ENTITY);
        };

        self.downloader.download(
            &entity,
            &workflow.id(),
            &workflow.work_folder(),
            self.config.download.retry_timeout(),
        )
    }

    fn install(&self, workflow: &dyn WorkflowData) -> AducResult {
        let work_folder = workflow.work_folder();
        info!("Installing from {}", work_folder.display());

        if let Err(e) = check_work_folder(&work_folder) {
            error!("Cannot open work folder {}: {}", work_folder.display(), e);
            return AducResult::failure(erc::INSTALL_CANNOT_OPEN_WORKFOLDER);
        }

        let Some(entity) = workflow.update_file(0).filter(has_plain_target_filename) else {
            error!("Install failed: missing or invalid update file entity");
            return AducResult::failure(erc::INSTALL_BAD_FILE_ENTITY);
        };

        let image = work_folder.join(&entity.target_filename);
        let request = ShellRequest::pvcontrol(ShellAction::Install)
            .with_target_data(image.to_string_lossy())
            .with_log_folder(&self.config.log_folder);

        let result = self.run_shell(&request);
        if !result.is_success() {
            error!("Install failed, extendedResultCode = {}", result.exit_status);
            return AducResult::failure(result.exit_status);
        }

        info!("Install succeeded");
        AducResult::new(ResultCode::InstallSuccess)
    }

    fn apply(&self, _workflow: &dyn WorkflowData) -> AducResult {
        info!("Applying data from {}", self.state_files.installed_path().display());

        let installed = match self.state_files.read_installed() {
            Ok(installed) => installed,
            Err(e) => {
                error!("Could not load pvinstalled file: {}", e);
                return AducResult::failure(erc::APPLY_CANNOT_READ_INSTALLED_INFO);
            }
        };

        info!("Applying revision {}", installed.revision);

        let request = ShellRequest::pvcontrol(ShellAction::Apply)
            .with_target_data(installed.revision)
            .with_log_folder(&self.config.log_folder);

        let result = self.run_shell(&request);
        if !result.is_success() {
            error!("Apply failed, extendedResultCode = {}", result.exit_status);
            return AducResult::failure(result.exit_status);
        }

        info!("Apply succeeded");
        AducResult::new(ResultCode::ApplySuccess)
    }

    fn cancel(&self, _workflow: &dyn WorkflowData) -> AducResult {
        // pvcontrol offers no way to interrupt an install, and this handler
        // version does not roll back an applied revision.
        info!("Cancel requested; nothing to interrupt");
        AducResult::new(ResultCode::CancelSuccess)
    }

    fn is_installed(&self, workflow: &dyn WorkflowData) -> AducResult {
        let not_installed = AducResult::new(ResultCode::IsInstalledNotInstalled);

        let Some(revision) = workflow.installed_criteria().filter(|c| !c.trim().is_empty()) else {
            error!("No installed criteria to check");
            return not_installed;
        };

        info!("Getting status from revision {}", revision);

        let request = ShellRequest::pvcontrol(ShellAction::GetStatus).with_target_data(&revision);
        let result = self.run_shell(&request);
        if !result.is_success() {
            warn!("Get status failed, extendedResultCode = {}", result.exit_status);
        }

        info!(
            "Checking revision {} status from {}",
            revision,
            self.state_files.progress_path().display()
        );

        let progress = match self.state_files.read_progress() {
            Ok(progress) => progress,
            Err(e) => {
                error!("Could not load pvprogress file: {}", e);
                return not_installed;
            }
        };

        match progress.status() {
            status if status.is_installed() => {
                info!("Update succeeded with status {}", status);
                AducResult::new(ResultCode::IsInstalledInstalled)
            }
            status if status.is_failed() => {
                error!(
                    "Update failed with status {}: {}",
                    status,
                    progress.message().unwrap_or("no message")
                );
                not_installed
            }
            ProgressStatus::InProgress(status) => {
                info!(
                    "Update still in progress (status {}, {}%)",
                    status,
                    progress.progress().unwrap_or(0)
                );
                not_installed
            }
            _ => not_installed,
        }
    }
}

/// Open the work folder and release the handle straight away.
fn check_work_folder(path: &Path) -> io::Result<()> {
    fs::read_dir(path).map(drop)
}

/// Target file names must stay inside the work folder.
fn has_plain_target_filename(entity: &FileEntity) -> bool {
    let path = Path::new(&entity.target_filename);
    !entity.target_filename.is_empty()
        && path.components().all(|component| matches!(component, Component::Normal(_)))
}
