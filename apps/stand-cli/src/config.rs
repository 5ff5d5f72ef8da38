//! Driver configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Display name of the stand
    pub stand_name: String,

    /// Register the menu through strict validation
    pub strict_menu: bool,

    /// Print the profit report as JSON after the run
    pub report_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            stand_name: "Lemons R Us".to_string(),
            strict_menu: false,
            report_json: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns `None` for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let config = CliConfig {
            stand_name: lookup("STAND_NAME").unwrap_or(defaults.stand_name),

            strict_menu: parse_or(&lookup, "STAND_STRICT_MENU", defaults.strict_menu)?,

            report_json: parse_or(&lookup, "STAND_REPORT_JSON", defaults.report_json)?,
        };

        if config.stand_name.trim().is_empty() {
            return Err(ConfigError::MissingRequired("STAND_NAME".to_string()));
        }

        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
