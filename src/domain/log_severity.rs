use log::LevelFilter;

/// Log verbosity the host passes to the handler factory and the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogSeverity {
    /// Severity from the numeric form used by `--log-level`.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(LogSeverity::Debug),
            1 => Some(LogSeverity::Info),
            2 => Some(LogSeverity::Warn),
            3 => Some(LogSeverity::Error),
            _ => None,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogSeverity::Debug => LevelFilter::Debug,
            LogSeverity::Info => LevelFilter::Info,
            LogSeverity::Warn => LevelFilter::Warn,
            LogSeverity::Error => LevelFilter::Error,
        }
    }

    /// Debug for debug builds, info otherwise.
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) { LogSeverity::Debug } else { LogSeverity::Info }
    }
}
