use serde::{Deserialize, Serialize};

use super::api::ApiConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::rate_limit::RateLimitConfig;
use super::storage::StorageConfig;

const LOCAL_CONFIG_PATH: &str = "nextdns-allow.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/nextdns-allow/config.toml";

/// Main configuration structure for nextdns-allow
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// NextDNS API endpoint and timeout
    #[serde(default)]
    pub api: ApiConfig,

    /// Throttle applied to allowlist requests
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Where credentials are persisted
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. nextdns-allow.toml in current directory
    /// 3. /etc/nextdns-allow/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize();
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(base_url) = overrides.base_url {
            self.api.base_url = base_url;
        }
        if let Some(path) = overrides.credentials_path {
            self.storage.credentials_path = path;
        }
    }

    fn normalize(&mut self) {
        let trimmed = self.api.base_url.trim().trim_end_matches('/');
        if trimmed.len() != self.api.base_url.len() {
            self.api.base_url = trimmed.to_string();
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "API base URL cannot be empty".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "API timeout cannot be 0".to_string(),
            ));
        }

        if self.rate_limit.min_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "Rate limit interval cannot be 0".to_string(),
            ));
        }

        if self.storage.credentials_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Credentials path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub base_url: Option<String>,
    pub credentials_path: Option<String>,
}
