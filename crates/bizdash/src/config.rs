//! Runtime configuration.
//!
//! Loaded from an optional TOML file; every key has a default, so an empty file (or
//! no file) is a valid configuration. Two environment variables override the file:
//!
//! | Variable             | Field                  |
//! |----------------------|------------------------|
//! | `BIZDASH_LATENCY_MS` | `simulated_latency_ms` |
//! | `BIZDASH_TAX_RATE`   | `default_tax_rate`     |
//!
//! `RUST_LOG` overrides `log_level` (see [`bizdash_actor::tracing::setup_tracing`]).
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const LATENCY_ENV: &str = "BIZDASH_LATENCY_MS";
pub const TAX_RATE_ENV: &str = "BIZDASH_TAX_RATE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Request queue size of each record store.
    pub channel_capacity: usize,
    /// Delay applied to every create/update/delete/action. `0` disables it.
    pub simulated_latency_ms: u64,
    /// Tax rate (percent) a new sale starts with.
    pub default_tax_rate: f64,
    /// Default tracing directive when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            simulated_latency_ms: 0,
            default_tax_rate: 0.0,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Reads a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `path` when given, otherwise the defaults, then applies environment overrides.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Applies `BIZDASH_*` environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`. Values that do not parse are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup(LATENCY_ENV) {
            match value.trim().parse() {
                Ok(ms) => self.simulated_latency_ms = ms,
                Err(_) => warn!(key = LATENCY_ENV, %value, "Ignoring invalid override"),
            }
        }
        if let Some(value) = lookup(TAX_RATE_ENV) {
            match value.trim().parse::<f64>() {
                Ok(rate) if rate.is_finite() => self.default_tax_rate = rate,
                _ => warn!(key = TAX_RATE_ENV, %value, "Ignoring invalid override"),
            }
        }
        self
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
