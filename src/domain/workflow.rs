//! Workflow and payload descriptors handed over by the update agent host.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A payload file referenced by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntity {
    /// File name relative to the workflow's work folder.
    pub target_filename: String,
    #[serde(default)]
    pub download_uri: String,
    /// Algorithm name to base64 digest, as carried by the update manifest.
    #[serde(default)]
    pub hashes: BTreeMap<String, String>,
    #[serde(default)]
    pub size_in_bytes: Option<u64>,
}

impl FileEntity {
    pub fn new(target_filename: impl Into<String>) -> Self {
        Self {
            target_filename: target_filename.into(),
            download_uri: String::new(),
            hashes: BTreeMap::new(),
            size_in_bytes: None,
        }
    }

    pub fn with_download_uri(mut self, uri: impl Into<String>) -> Self {
        self.download_uri = uri.into();
        self
    }

    pub fn with_sha256(mut self, digest: impl Into<String>) -> Self {
        self.hashes.insert("sha256".to_string(), digest.into());
        self
    }

    pub fn sha256(&self) -> Option<&str> {
        self.hashes.get("sha256").map(String::as_str)
    }
}

/// A single-update workflow as the host describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub work_folder: PathBuf,
    pub update_type: String,
    #[serde(default)]
    pub installed_criteria: Option<String>,
    #[serde(default)]
    pub files: Vec<FileEntity>,
}

impl Workflow {
    pub fn new(
        id: impl Into<String>,
        work_folder: impl Into<PathBuf>,
        update_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            work_folder: work_folder.into(),
            update_type: update_type.into(),
            installed_criteria: None,
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file: FileEntity) -> Self {
        self.files.push(file);
        self
    }

    pub fn with_installed_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.installed_criteria = Some(criteria.into());
        self
    }
}
