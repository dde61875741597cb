use std::path::Path;

use crate::domain::TaskResult;

/// Runs a child process to completion.
pub trait ProcessLauncher {
    /// Launch `program` with `args`, wait for it, and capture its output.
    ///
    /// Launch problems are reported through the exit status rather than an
    /// error: a program that cannot be executed yields `EXIT_EXEC_FAILED`, and
    /// one that overruns its time budget yields `EXIT_TIMED_OUT`.
    fn launch(&self, program: &Path, args: &[String]) -> TaskResult;
}
