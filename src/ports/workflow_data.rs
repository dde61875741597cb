use std::path::PathBuf;

use crate::domain::{FileEntity, Workflow};

/// Read-only view of the host's workflow handle.
pub trait WorkflowData {
    fn id(&self) -> String;

    fn work_folder(&self) -> PathBuf;

    /// Declared update type, e.g. `microsoft/pvcontrol:1`.
    fn update_type(&self) -> String;

    fn update_file_count(&self) -> usize;

    fn update_file(&self, index: usize) -> Option<FileEntity>;

    /// Revision the host expects to find installed.
    fn installed_criteria(&self) -> Option<String>;
}

impl WorkflowData for Workflow {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn work_folder(&self) -> PathBuf {
        self.work_folder.clone()
    }

    fn update_type(&self) -> String {
        self.update_type.clone()
    }

    fn update_file_count(&self) -> usize {
        self.files.len()
    }

    fn update_file(&self, index: usize) -> Option<FileEntity> {
        self.files.get(index).cloned()
    }

    fn installed_criteria(&self) -> Option<String> {
        self.installed_criteria.clone()
    }
}
