//! Payload download over HTTP using reqwest.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{info, warn};
use reqwest::blocking::Client;
use sha2::{Digest, Sha256};
use url::Url;

use crate::domain::config::DownloadConfig;
use crate::domain::{AducResult, AppError, FileEntity, ResultCode, erc};
use crate::ports::Downloader;

const DEFAULT_BASE_DELAY_MS: u64 = 1_000;
const DEFAULT_MAX_DELAY_MS: u64 = 60_000;
const CHUNK_SIZE: usize = 64 * 1024;

/// Backoff between failed download attempts.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { base_delay_ms: DEFAULT_BASE_DELAY_MS, max_delay_ms: DEFAULT_MAX_DELAY_MS }
    }
}

impl RetryPolicy {
    pub fn new(base_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self { base_delay_ms: base_delay_ms.max(1), max_delay_ms: max_delay_ms.max(base_delay_ms) }
    }

    fn delay_for_retry(&self, failed_attempt: u32) -> Duration {
        // attempt=1 -> base, attempt=2 -> base*2, attempt=3 -> base*4, capped.
        let exponent = failed_attempt.saturating_sub(1).min(10);
        let backoff_ms = self.base_delay_ms.saturating_mul(1_u64 << exponent);
        Duration::from_millis(backoff_ms.min(self.max_delay_ms))
    }
}

/// Downloads payload files into the workflow's work folder.
///
/// Partial transfers land in `<target>.part` and are renamed only once the
/// hash checks out.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
    policy: RetryPolicy,
}

impl HttpDownloader {
    pub fn new(config: &DownloadConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, policy: RetryPolicy::default() })
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn download_with_retry(
        &self,
        entity: &FileEntity,
        target: &Path,
        retry_timeout: Duration,
    ) -> Result<(), AppError> {
        let deadline = Instant::now() + retry_timeout;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let error = match self.fetch(entity, target) {
                Ok(()) => return Ok(()),
                Err(error) => error,
            };

            if !is_retryable(&error) {
                return Err(error);
            }

            let delay = self.policy.delay_for_retry(attempt);
            if Instant::now() + delay >= deadline {
                return Err(error);
            }

            warn!(
                "Download of '{}' failed (attempt {}): {}. Retrying in {} ms.",
                entity.target_filename,
                attempt,
                error,
                delay.as_millis()
            );
            thread::sleep(delay);
        }
    }

    fn fetch(&self, entity: &FileEntity, target: &Path) -> Result<(), AppError> {
        let download_error = |status: Option<u16>, details: String| AppError::Download {
            url: entity.download_uri.clone(),
            status,
            details,
        };

        let url = Url::parse(&entity.download_uri).map_err(|e| AppError::InvalidUri {
            url: entity.download_uri.clone(),
            details: e.to_string(),
        })?;

        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| download_error(None, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(download_error(Some(status.as_u16()), format!("HTTP {}", status)));
        }

        store_verified(entity, &mut response, target)
    }
}

/// Stream `body` into `<target>.part`, check its hash, then move it to
/// `target`. The partial file is removed on any failure.
fn store_verified(entity: &FileEntity, body: &mut impl Read, target: &Path) -> Result<(), AppError> {
    let partial = partial_path(target);
    let stored = write_verified(entity, body, &partial)
        .and_then(|()| fs::rename(&partial, target).map_err(AppError::from));
    if stored.is_err() {
        let _ = fs::remove_file(&partial);
    }
    stored
}

fn write_verified(entity: &FileEntity, body: &mut impl Read, partial: &Path) -> Result<(), AppError> {
    let mut file = File::create(partial)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0_u8; CHUNK_SIZE];

    loop {
        let read = body.read(&mut buffer).map_err(|e| AppError::Download {
            url: entity.download_uri.clone(),
            status: None,
            details: format!("transfer interrupted: {}", e),
        })?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
        file.write_all(&buffer[..read])?;
    }
    file.sync_all()?;
    drop(file);

    if let Some(expected) = entity.sha256() {
        let actual = STANDARD.encode(hasher.finalize());
        if actual != expected {
            return Err(AppError::HashMismatch {
                file: entity.target_filename.clone(),
                expected: expected.to_string(),
                actual,
            });
        }
    }

    Ok(())
}

impl Downloader for HttpDownloader {
    fn download(
        &self,
        entity: &FileEntity,
        workflow_id: &str,
        work_folder: &Path,
        retry_timeout: Duration,
    ) -> AducResult {
        let target = work_folder.join(&entity.target_filename);

        if matches_manifest_hash(&target, entity) {
            info!("[{}] {} already downloaded", workflow_id, target.display());
            return AducResult::new(ResultCode::DownloadSuccess);
        }

        info!("[{}] Downloading {} to {}", workflow_id, entity.download_uri, target.display());

        match self.download_with_retry(entity, &target, retry_timeout) {
            Ok(()) => {
                info!("[{}] Download succeeded", workflow_id);
                AducResult::new(ResultCode::DownloadSuccess)
            }
            Err(error @ AppError::HashMismatch { .. }) => {
                warn!("[{}] {}", workflow_id, error);
                AducResult::failure(erc::DOWNLOAD_HASH_MISMATCH)
            }
            Err(error) => {
                warn!("[{}] {}", workflow_id, error);
                AducResult::failure(erc::DOWNLOAD_TRANSPORT_FAILURE)
            }
        }
    }
}

fn is_retryable(error: &AppError) -> bool {
    match error {
        AppError::Download { status: Some(code), .. } => {
            *code == 408 || *code == 429 || *code >= 500
        }
        AppError::Download { status: None, .. } => true,
        _ => false,
    }
}

fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}

/// True when `target` exists and hashes to the manifest's SHA-256.
fn matches_manifest_hash(target: &Path, entity: &FileEntity) -> bool {
    let Some(expected) = entity.sha256() else {
        return false;
    };
    let Ok(mut file) = File::open(target) else {
        return false;
    };
    let mut hasher = Sha256::new();
    if io::copy(&mut file, &mut hasher).is_err() {
        return false;
    }
    STANDARD.encode(hasher.finalize()) == expected
}
