//! # Feature: Configuration System
//!
//! Environment-variable configuration with an optional YAML config file.
//! File values support `${VAR}` / `${VAR:-default}` interpolation so tokens
//! never have to live in the file itself.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Optional YAML file with env interpolation and auto-detection
//! - 1.0.0: Initial environment variable configuration

use anyhow::{Context, Result};
use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Feed used by `/news` for users who never called `/setfeed`.
pub const DEFAULT_FEED_URL: &str = "https://ria.ru/export/rss2/index.xml";

/// Weather-by-text service queried by `/weather`.
pub const DEFAULT_WEATHER_URL: &str = "https://wttr.in";

/// Runtime configuration for the bot process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Secret token used to authenticate to the chat transport
    pub bot_token: String,

    /// Log filter string handed to env_logger
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Base URL of the weather-by-text service
    #[serde(default = "default_weather_url")]
    pub weather_url: String,

    /// Feed URL used when a user has no `/setfeed` preference
    #[serde(default = "default_feed_url")]
    pub default_feed_url: String,

    /// Long-poll timeout for fetching transport updates, in seconds
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,

    /// Timeout for outbound weather/news HTTP requests, in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,
}

// Default value functions for serde
fn default_log_level() -> String {
    "info".to_string()
}

fn default_weather_url() -> String {
    DEFAULT_WEATHER_URL.to_string()
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_poll_timeout() -> u64 {
    30
}

fn default_http_timeout() -> u64 {
    15
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            bot_token: env::var("BOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN environment variable not set"))?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
            weather_url: env::var("WEATHER_URL").unwrap_or_else(|_| default_weather_url()),
            default_feed_url: env::var("DEFAULT_FEED_URL")
                .unwrap_or_else(|_| default_feed_url()),
            poll_timeout_secs: env::var("POLL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_poll_timeout),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_http_timeout),
        })
    }

    /// Load configuration from a YAML file with environment variable interpolation
    ///
    /// Supports `${VAR_NAME}` syntax for environment variable substitution.
    /// Example: `bot_token: "${BOT_TOKEN}"`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let interpolated = interpolate_env_vars(&content)?;

        let config: Config = serde_yaml::from_str(&interpolated)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        info!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Auto-detect and load configuration
    ///
    /// Priority order:
    /// 1. If CONFIG_FILE env var is set, load from that file
    /// 2. If config.yaml exists in current directory, load from it
    /// 3. Fall back to environment variables
    pub fn auto_load() -> Result<Self> {
        if let Ok(config_path) = env::var("CONFIG_FILE") {
            info!("Loading config from CONFIG_FILE: {}", config_path);
            return Self::from_file(&config_path);
        }

        let default_config_path = "config.yaml";
        if Path::new(default_config_path).exists() {
            info!("Loading config from {}", default_config_path);
            return Self::from_file(default_config_path);
        }

        info!("No config file found, using environment variables");
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.is_empty() {
            anyhow::bail!("bot_token is required");
        }
        if self.poll_timeout_secs == 0 {
            anyhow::bail!("poll_timeout_secs must be greater than zero");
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("http_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

/// Interpolate environment variables in a string
///
/// Supports `${VAR_NAME}` syntax. If a variable is not set, returns an error.
/// Use `${VAR_NAME:-default}` for default values.
fn interpolate_env_vars(content: &str) -> Result<String> {
    // Pattern: ${VAR_NAME} or ${VAR_NAME:-default}
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
        .context("Invalid interpolation regex")?;

    let mut result = content.to_string();
    let mut errors = Vec::new();

    for cap in re.captures_iter(content) {
        let full_match = cap.get(0).map(|m| m.as_str()).unwrap_or_default();
        let var_name = &cap[1];
        let default_value = cap.get(2).map(|m| m.as_str());

        let value = match env::var(var_name) {
            Ok(v) => v,
            Err(_) => {
                if let Some(default) = default_value {
                    default.to_string()
                } else {
                    errors.push(format!("Environment variable '{}' is not set", var_name));
                    continue;
                }
            }
        };

        result = result.replace(full_match, &value);
    }

    if !errors.is_empty() {
        anyhow::bail!("Missing environment variables:\n  - {}", errors.join("\n  - "));
    }

    Ok(result)
}
