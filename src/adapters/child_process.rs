//! Blocking child process launcher with merged stdout/stderr capture.

use std::io::{self, PipeReader, Read};
use std::os::unix::process::ExitStatusExt;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error, warn};

use crate::domain::{
    EXIT_EXEC_FAILED, EXIT_FAILURE, EXIT_SIGNAL_BASE, EXIT_TIMED_OUT, TaskResult,
};
use crate::ports::ProcessLauncher;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Launches programs with `std::process::Command`.
///
/// stdout and stderr share one pipe so the captured output keeps the order in
/// which the child wrote it. stdin is `/dev/null`.
#[derive(Debug, Clone, Default)]
pub struct ChildProcessLauncher {
    timeout: Option<Duration>,
}

impl ChildProcessLauncher {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// A launcher that kills children still running after `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    fn spawn(&self, program: &Path, args: &[String]) -> io::Result<(Child, PipeReader)> {
        let (reader, writer) = io::pipe()?;
        let stderr_writer = writer.try_clone()?;

        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null()).stdout(writer).stderr(stderr_writer);
        let child = command.spawn()?;
        // The command keeps the parent's write ends alive; the reader only sees
        // EOF once they are closed.
        drop(command);

        Ok((child, reader))
    }

    fn timed_out(&self, program: &Path) -> TaskResult {
        let timeout = self.timeout.unwrap_or_default();
        warn!("'{}' timed out after {:?}", program.display(), timeout);
        TaskResult::new(
            EXIT_TIMED_OUT,
            format!("{} timed out after {:?}", program.display(), timeout),
        )
    }
}

impl ProcessLauncher for ChildProcessLauncher {
    fn launch(&self, program: &Path, args: &[String]) -> TaskResult {
        debug!("Launching: {} {}", program.display(), args.join(" "));

        let (mut child, mut reader) = match self.spawn(program, args) {
            Ok(spawned) => spawned,
            Err(e) => {
                error!("Cannot execute '{}': {}", program.display(), e);
                return TaskResult::new(
                    EXIT_EXEC_FAILED,
                    format!("cannot execute {}: {}", program.display(), e),
                );
            }
        };

        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);

        let (output_tx, output_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = reader.read_to_end(&mut buffer);
            let _ = output_tx.send(buffer);
        });

        let waited = match deadline {
            Some(deadline) => wait_until(&mut child, deadline),
            None => child.wait().map(Some),
        };

        match waited {
            Ok(Some(status)) => match collect_output(&output_rx, deadline) {
                Some(output) => TaskResult::new(exit_code(status), output),
                None => {
                    // The child exited but a process it left behind still
                    // holds the output pipe open.
                    warn!("'{}' left a process holding its output open", program.display());
                    self.timed_out(program)
                }
            },
            // A surviving grandchild may still hold the pipe, so the drain
            // thread is left to finish on its own.
            Ok(None) => self.timed_out(program),
            Err(e) => {
                error!("Failed waiting for '{}': {}", program.display(), e);
                TaskResult::new(EXIT_FAILURE, format!("wait failed: {}", e))
            }
        }
    }
}

/// Captured output, or `None` when `deadline` passes before the pipe closes.
fn collect_output(output_rx: &Receiver<Vec<u8>>, deadline: Option<Instant>) -> Option<String> {
    let buffer = match deadline {
        None => output_rx.recv().ok(),
        Some(deadline) => {
            match output_rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                Ok(buffer) => Some(buffer),
                Err(RecvTimeoutError::Timeout) => return None,
                Err(RecvTimeoutError::Disconnected) => None,
            }
        }
    };

    Some(buffer.map(|buffer| String::from_utf8_lossy(&buffer).into_owned()).unwrap_or_default())
}

/// Wait for the child, killing it once `deadline` passes. `None` means killed.
fn wait_until(child: &mut Child, deadline: Instant) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            child.wait()?;
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => EXIT_SIGNAL_BASE + signal,
        (None, None) => EXIT_FAILURE,
    }
}
