//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from a TOML file and environment variables.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::utils::errors::Result;

/// Main application configuration structure
#[derive(Debug, Clone)]
pub struct Settings {
    pub bot: BotConfig,
    pub web_app: WebAppConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Clone)]
pub struct BotConfig {
    pub token: String,
}

/// Web application opened from the /start reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebAppConfig {
    pub url: Url,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
}

/// Settings exactly as read from the sources, before validation.
///
/// Environment keys are lowercased by the `config` crate, so `BOT_TOKEN`
/// lands in `bot_token`.
#[derive(Debug, Default, Deserialize)]
pub struct RawSettings {
    pub bot_token: Option<String>,
    pub web_app_url: Option<String>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the optional `config` file and the process environment
    pub fn new() -> Result<Self> {
        let raw: RawSettings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()?;

        super::validation::validate_settings(raw)
    }

    /// Load settings from an explicit set of variables instead of the process environment
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self> {
        let raw: RawSettings = config::Config::builder()
            .add_source(config::Environment::default().source(Some(vars)))
            .build()?
            .try_deserialize()?;

        super::validation::validate_settings(raw)
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &mask_token(&self.token))
            .finish()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

/// Keep the bot id part of a token and hide the secret.
pub fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((id, _)) => format!("{}:***", id),
        None => "***".to_string(),
    }
}
