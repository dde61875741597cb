/// Exit status for a successful task.
pub const EXIT_SUCCESS: i32 = 0;

/// Generic task failure, also used for faults caught at the dispatch boundary.
pub const EXIT_FAILURE: i32 = 1;

/// The shell does not support the requested update type or action.
pub const EXIT_UNSUPPORTED: i32 = 3;

/// The child was killed after exceeding its time budget.
pub const EXIT_TIMED_OUT: i32 = 124;

/// The child program could not be executed at all.
pub const EXIT_EXEC_FAILED: i32 = 127;

/// Offset added to a signal number when the child was killed by a signal.
pub const EXIT_SIGNAL_BASE: i32 = 128;

/// Exit status and merged stdout/stderr of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskResult {
    pub exit_status: i32,
    pub output: String,
}

impl TaskResult {
    pub fn new(exit_status: i32, output: impl Into<String>) -> Self {
        Self { exit_status, output: output.into() }
    }

    /// A result for a task that never launched a child.
    pub fn from_exit_status(exit_status: i32) -> Self {
        Self { exit_status, output: String::new() }
    }

    pub fn is_success(&self) -> bool {
        self.exit_status == EXIT_SUCCESS
    }
}
