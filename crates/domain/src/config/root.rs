use super::{CacheConfig, ConfigError, DialerConfig, LoggingConfig};
use crate::{NetworkFamily, SelectionPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration, one section per concern
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub dialer: DialerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line, applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub ttl_secs: Option<u64>,
    pub stale_secs: Option<u64>,
    pub policy: Option<SelectionPolicy>,
    pub network: Option<NetworkFamily>,
    pub timeout_ms: Option<u64>,
    pub fallback_on_failure: Option<bool>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load from an optional TOML file and apply CLI overrides.
    ///
    /// Without a path every section takes its defaults.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(ttl) = overrides.ttl_secs {
            self.cache.ttl_secs = ttl;
        }
        if let Some(stale) = overrides.stale_secs {
            self.cache.stale_secs = stale;
        }
        if let Some(policy) = overrides.policy {
            self.cache.policy = policy;
        }
        if let Some(network) = overrides.network {
            self.cache.network = network;
        }
        if let Some(timeout) = overrides.timeout_ms {
            self.cache.timeout_ms = timeout;
        }
        if let Some(fallback) = overrides.fallback_on_failure {
            self.cache.fallback_on_failure = fallback;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "cache.timeout_ms must be greater than zero".to_string(),
            ));
        }

        if self.dialer.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "dialer.connect_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if !LoggingConfig::is_valid_level(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}
