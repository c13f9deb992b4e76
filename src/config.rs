//! Engine configuration.
//!
//! [`EngineConfig`] deserialises from TOML with per-field defaults, so a
//! partial config (or none at all) always yields a working engine:
//!
//! ```toml
//! [cache]
//! max_size = 1000
//! base_ttl_ms = 300000
//! sweep_interval_ms = 300000
//! ```

use serde::Deserialize;

use crate::{OptimizerError, Result};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub cache: CacheSettings,
}

impl EngineConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| OptimizerError::Configuration(e.to_string()))
    }
}

/// Response cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Maximum number of cached entries before eviction (default: 1000).
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    /// Base TTL in milliseconds, before intent/model multipliers
    /// (default: 300000 = 5 minutes).
    #[serde(default = "default_base_ttl_ms")]
    pub base_ttl_ms: u64,
    /// Interval between background expiry sweeps in milliseconds
    /// (default: 300000 = 5 minutes).
    #[serde(default = "default_sweep_interval_ms")]
    pub sweep_interval_ms: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            base_ttl_ms: default_base_ttl_ms(),
            sweep_interval_ms: default_sweep_interval_ms(),
        }
    }
}

fn default_max_size() -> usize {
    1000
}

fn default_base_ttl_ms() -> u64 {
    300_000
}

fn default_sweep_interval_ms() -> u64 {
    300_000
}
