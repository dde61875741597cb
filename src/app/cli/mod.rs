//! CLI Adapter for `adu-shell`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use log::{debug, error};
use nix::unistd::{geteuid, setuid};

use crate::adapters::ChildProcessLauncher;
use crate::app::logging::{self, SHELL_LOG_CATEGORY};
use crate::app::shell;
use crate::domain::{EXIT_FAILURE, LogSeverity, ShellConfig};

/// Arguments the content handler passes to `adu-shell`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "adu-shell")]
#[command(version)]
#[command(about = "Run privileged device update tasks", long_about = None)]
pub struct LaunchArguments {
    /// Update type, e.g. microsoft/pantacor-pvcontrol or common
    #[arg(short = 't', long)]
    pub update_type: String,
    /// Action to perform: install, apply, cancel, rollback, get-status, reboot
    #[arg(short = 'a', long)]
    pub update_action: String,
    /// Action input: image path for install, revision for apply and get-status
    #[arg(short = 'd', long)]
    pub target_data: Option<String>,
    /// Extra options for the target command
    #[arg(short = 'o', long)]
    pub target_options: Option<String>,
    /// Folder the caller collects logs from
    #[arg(short = 'f', long)]
    pub target_log_folder: Option<PathBuf>,
    /// Log level: 0 debug, 1 info, 2 warn, 3 error
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub log_level: Option<u8>,
}

impl LaunchArguments {
    pub fn new(update_type: impl Into<String>, update_action: impl Into<String>) -> Self {
        Self {
            update_type: update_type.into(),
            update_action: update_action.into(),
            target_data: None,
            target_options: None,
            target_log_folder: None,
            log_level: None,
        }
    }

    pub fn with_target_data(mut self, target_data: Option<String>) -> Self {
        self.target_data = target_data;
        self
    }

    pub fn log_severity(&self) -> LogSeverity {
        self.log_level.and_then(LogSeverity::from_level).unwrap_or_else(LogSeverity::build_default)
    }

    /// Parse `argv`. `-v` is the version flag, as the handler host expects.
    pub fn try_parse_args<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = Self::command().disable_version_flag(true).arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        );
        let matches = command.try_get_matches_from(argv)?;
        Self::from_arg_matches(&matches)
    }
}

pub fn run() {
    let args = LaunchArguments::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let _logging = logging::init(args.log_severity(), SHELL_LOG_CATEGORY);
    debug!("Launch arguments: {:?}", args);

    // Children inherit the real uid; pvcontrol and reboot need root.
    if let Err(e) = setuid(geteuid()) {
        error!("Failed to set the real user id to the effective user id: {}", e);
        std::process::exit(EXIT_FAILURE);
    }

    let config = ShellConfig::default();
    let launcher = ChildProcessLauncher::with_timeout(config.timeout);
    let result = shell::do_work(&args, &config, &launcher);

    debug!("Task finished with exit status {}", result.exit_status);
    std::process::exit(result.exit_status);
}
