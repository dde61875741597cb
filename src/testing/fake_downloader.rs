use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::{AducResult, FileEntity, ResultCode};
use crate::ports::Downloader;

#[derive(Debug, Clone)]
pub struct DownloadCall {
    pub entity: FileEntity,
    pub workflow_id: String,
    pub work_folder: PathBuf,
    pub retry_timeout: Duration,
}

/// Downloader double that never touches the network.
pub struct FakeDownloader {
    calls: Mutex<Vec<DownloadCall>>,
    result: AducResult,
}

impl Default for FakeDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDownloader {
    pub fn new() -> Self {
        Self::returning(AducResult::new(ResultCode::DownloadSuccess))
    }

    pub fn returning(result: AducResult) -> Self {
        Self { calls: Mutex::new(Vec::new()), result }
    }

    pub fn calls(&self) -> Vec<DownloadCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Downloader for FakeDownloader {
    fn download(
        &self,
        entity: &FileEntity,
        workflow_id: &str,
        work_folder: &Path,
        retry_timeout: Duration,
    ) -> AducResult {
        self.calls.lock().unwrap().push(DownloadCall {
            entity: entity.clone(),
            workflow_id: workflow_id.to_string(),
            work_folder: work_folder.to_path_buf(),
            retry_timeout,
        });
        self.result
    }
}
