//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching config/default.toml
//! structure. Built-in defaults reproduce the historical hardcoded values
//! (local backend URL, the 8-symbol review list).

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::domain::DEFAULT_SYMBOLS;

/// Main configuration structure matching config/default.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub report: ReportSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Assets API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    /// Token API base URL (the assets path is fixed)
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Report configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSection {
    /// Symbols to report on; everything else in the feed is skipped
    pub symbols: Vec<String>,
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiSection::default(),
            report: ReportSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "api.base_url cannot be empty".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(format!(
                "api.timeout_secs must be > 0, got {}",
                self.api.timeout_secs
            )));
        }

        if self.report.symbols.is_empty() {
            return Err(ConfigError::ValidationError(
                "report.symbols cannot be empty".to_string(),
            ));
        }

        if self.report.symbols.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::ValidationError(
                "report.symbols cannot contain empty entries".to_string(),
            ));
        }

        Ok(())
    }
}
