//! Pure parse/validate for handler configuration (`pvcontrol-handler.toml`).

use crate::domain::{AppError, HandlerConfig};

/// Parse and validate handler configuration from TOML content.
pub fn parse_handler_config(content: &str) -> Result<HandlerConfig, AppError> {
    let config: HandlerConfig = toml::from_str(content)?;

    if config.shell.path.as_os_str().is_empty() {
        return Err(AppError::config_error("shell.path must not be empty"));
    }
    if !config.shell.path.is_absolute() {
        return Err(AppError::config_error(format!(
            "shell.path must be absolute: {}",
            config.shell.path.display()
        )));
    }
    if config.shell.timeout_secs == Some(0) {
        return Err(AppError::config_error("shell.timeout_secs must be greater than zero"));
    }
    if config.download.request_timeout_secs == 0 {
        return Err(AppError::config_error("download.request_timeout_secs must be greater than zero"));
    }

    Ok(config)
}
