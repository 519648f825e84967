//! Store configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum number of entries.
pub const DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Invalid store configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_entries` was zero, which would reject every entry.
    #[error("max_entries must be greater than zero")]
    ZeroCapacity,
}

/// Configuration of the in-memory store.
///
/// Durations accept humantime strings such as `"30s"` or `"5m"`:
///
/// ```yaml
/// max_entries: 5000
/// ttl: 10m
/// time_to_idle: 1m
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Maximum number of entries before least valuable ones are evicted.
    pub max_entries: u64,
    /// Lifetime of an entry measured from its last write.
    #[serde(with = "humantime_serde")]
    pub ttl: Option<Duration>,
    /// Lifetime of an entry measured from its last read or write.
    #[serde(with = "humantime_serde")]
    pub time_to_idle: Option<Duration>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl: None,
            time_to_idle: None,
        }
    }
}

impl StoreConfig {
    /// Checks the configuration for values the store cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entries == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
