use std::path::Path;
use std::time::Duration;

use crate::domain::{AducResult, FileEntity};

/// Transport that fetches a payload file into a work folder.
pub trait Downloader {
    fn download(
        &self,
        entity: &FileEntity,
        workflow_id: &str,
        work_folder: &Path,
        retry_timeout: Duration,
    ) -> AducResult;
}
