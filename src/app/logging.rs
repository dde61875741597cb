//! Logging setup shared by the handler and the shell.

use std::io::Write;

use log::LevelFilter;

use crate::domain::LogSeverity;

/// Category the handler logs under.
pub const HANDLER_LOG_CATEGORY: &str = "pvcontrol-handler";

/// Category the privileged shell logs under.
pub const SHELL_LOG_CATEGORY: &str = "adu-shell";

/// Keeps logging enabled while alive; dropping it silences the global logger.
///
/// The max level is process-wide, so this assumes one live guard per process:
/// the host keeps a single handler instance, and the shell creates one guard
/// in `run`. Dropping any guard turns logging off for every other holder too.
#[derive(Debug)]
pub struct LoggingGuard {
    category: &'static str,
}

impl LoggingGuard {
    pub fn category(&self) -> &'static str {
        self.category
    }
}

impl Drop for LoggingGuard {
    fn drop(&mut self) {
        log::debug!("Shutting down {} logging", self.category);
        log::set_max_level(LevelFilter::Off);
    }
}

/// Install the env_logger backend at `severity`, tagging lines with `category`.
///
/// `RUST_LOG` still overrides the filter. A logger installed earlier in the
/// process keeps its format and filter; the global max level is still reset.
pub fn init(severity: LogSeverity, category: &'static str) -> LoggingGuard {
    let level = severity.level_filter();

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                buf.timestamp_seconds(),
                record.level(),
                category,
                record.args()
            )
        })
        .try_init();

    log::set_max_level(level);
    LoggingGuard { category }
}
