//! Configuration for the oracle engine.
//!
//! Loads a small YAML file with environment variable interpolation and
//! validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use oracle_engine::config::load_config;
//!
//! // Load from default path (oracle.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/oracle.yaml"))?;
//!
//! println!("poll interval: {}ms", config.poller.interval_ms);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Price poller configuration.
    #[serde(default)]
    pub poller: PollerConfig,
    /// Oracle provider configuration.
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Price poller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Interval between fetches in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Capacity of the observation channel.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl PollerConfig {
    /// The polling interval as a `Duration`.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

/// Oracle provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Name used for this provider instance in logs.
    #[serde(default = "default_instance_name")]
    pub instance_name: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            instance_name: default_instance_name(),
        }
    }
}

const fn default_interval_ms() -> u64 {
    1000
}

const fn default_channel_capacity() -> usize {
    256
}

fn default_instance_name() -> String {
    "stub-oracle".to_string()
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable
/// interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "oracle.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or
/// validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("oracle.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    let interpolated = interpolate_env_vars(&contents);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;

    Ok(config)
}

/// Replace `${VAR}` and `${VAR:-default}` placeholders with environment
/// variable values.
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let mut result = input.to_string();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        // This regex pattern is compile-time constant and always valid
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    for cap in re.captures_iter(input) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let Some(var_match) = cap.get(1) else {
            continue;
        };
        let full_match = full_match.as_str();
        let var_name = var_match.as_str();
        let default_value = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_name) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        };

        result = result.replace(full_match, &value);
    }

    result
}

/// Validate configuration invariants.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.poller.interval_ms == 0 {
        return Err(ConfigError::ValidationError(
            "poller.interval_ms must be greater than zero".to_string(),
        ));
    }

    if config.poller.channel_capacity == 0 {
        return Err(ConfigError::ValidationError(
            "poller.channel_capacity must be greater than zero".to_string(),
        ));
    }

    if config.provider.instance_name.is_empty() {
        return Err(ConfigError::ValidationError(
            "provider.instance_name must not be empty".to_string(),
        ));
    }

    Ok(())
}
