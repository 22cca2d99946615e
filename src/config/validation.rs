//! Configuration validation module
//!
//! Turns the raw values read from the configuration sources into validated
//! [`Settings`]. Every failure here happens before any network client exists.

use url::Url;

use crate::utils::errors::{BotError, Result};
use super::settings::RawSettings;
use super::{BotConfig, LoggingConfig, Settings, WebAppConfig};

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const WEB_APP_URL_VAR: &str = "WEB_APP_URL";

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate all configuration settings
pub fn validate_settings(raw: RawSettings) -> Result<Settings> {
    let token = present(raw.bot_token);
    let url = present(raw.web_app_url);

    let mut missing = Vec::new();
    if token.is_none() {
        missing.push(BOT_TOKEN_VAR.to_string());
    }
    if url.is_none() {
        missing.push(WEB_APP_URL_VAR.to_string());
    }

    let (Some(token), Some(url)) = (token, url) else {
        return Err(BotError::MissingVariables(missing));
    };

    let log_dir = raw.log_dir.filter(|dir| !dir.as_os_str().is_empty());
    let logging = validate_logging_config(raw.log_level, log_dir)?;

    Ok(Settings {
        bot: BotConfig { token },
        web_app: validate_web_app_url(&url)?,
        logging,
    })
}

/// Treat empty values the same as absent ones
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Validate the web application target
fn validate_web_app_url(value: &str) -> Result<WebAppConfig> {
    let url = Url::parse(value).map_err(|e| {
        BotError::Config(format!("{} is not a valid URL ({}): {}", WEB_APP_URL_VAR, e, value))
    })?;

    Ok(WebAppConfig { url })
}

/// Validate logging configuration
fn validate_logging_config(
    level: Option<String>,
    directory: Option<std::path::PathBuf>,
) -> Result<LoggingConfig> {
    let level = match level {
        Some(level) if !level.is_empty() => level.to_lowercase(),
        _ => return Ok(LoggingConfig { directory, ..LoggingConfig::default() }),
    };

    if !VALID_LEVELS.contains(&level.as_str()) {
        return Err(BotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", level, VALID_LEVELS)
        ));
    }

    Ok(LoggingConfig { level, directory })
}
