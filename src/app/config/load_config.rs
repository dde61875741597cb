//! Handler configuration loading from `/etc/adu/pvcontrol-handler.toml`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::domain::config::parse_handler_config;
use crate::domain::{AppError, HandlerConfig};

/// Load the handler configuration at `path`, falling back to defaults when the
/// file does not exist.
pub fn load_handler_config(path: &Path) -> Result<HandlerConfig, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No handler config at {}, using defaults", path.display());
            return Ok(HandlerConfig::default());
        }
        Err(e) => return Err(AppError::Io(e)),
    };

    parse_handler_config(&content)
}
