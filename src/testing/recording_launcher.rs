use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::TaskResult;
use crate::ports::ProcessLauncher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCall {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Records every launch and answers with scripted results.
///
/// Scripted results are consumed in order; once exhausted the default exit
/// status is returned.
pub struct RecordingLauncher {
    calls: Mutex<Vec<LaunchCall>>,
    scripted: Mutex<VecDeque<TaskResult>>,
    exit_status: i32,
}

impl RecordingLauncher {
    pub fn with_exit_status(exit_status: i32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            scripted: Mutex::new(VecDeque::new()),
            exit_status,
        }
    }

    pub fn succeeding() -> Self {
        Self::with_exit_status(0)
    }

    pub fn push_result(&self, result: TaskResult) {
        self.scripted.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn launch(&self, program: &Path, args: &[String]) -> TaskResult {
        self.calls
            .lock()
            .unwrap()
            .push(LaunchCall { program: program.to_path_buf(), args: args.to_vec() });

        self.scripted
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| TaskResult::new(self.exit_status, format!("ran {}", program.display())))
    }
}
