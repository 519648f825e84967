//! Builder for [`MokaStore`].

use std::time::Duration;

use etagged_core::{CacheEntry, CacheKey};
use moka::sync::Cache;

use crate::config::{ConfigError, DEFAULT_MAX_ENTRIES, StoreConfig};
use crate::store::MokaStore;

/// Builder for creating and configuring a [`MokaStore`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use etagged_moka::MokaStore;
///
/// let store = MokaStore::builder()
///     .max_entries(1_000)
///     .ttl(Duration::from_secs(300))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct MokaStoreBuilder {
    max_entries: u64,
    ttl: Option<Duration>,
    time_to_idle: Option<Duration>,
}

impl MokaStoreBuilder {
    /// Creates a builder with the default capacity and no expiry.
    pub fn new() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl: None,
            time_to_idle: None,
        }
    }

    /// Sets the maximum number of entries.
    pub fn max_entries(mut self, max_entries: u64) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Expires entries `ttl` after they were written.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Expires entries `idle` after they were last read or written.
    pub fn time_to_idle(mut self, idle: Duration) -> Self {
        self.time_to_idle = Some(idle);
        self
    }

    /// Builds the store.
    pub fn build(self) -> Result<MokaStore, ConfigError> {
        let config = StoreConfig::from(self);
        config.validate()?;

        let mut builder = Cache::<CacheKey, CacheEntry>::builder().max_capacity(config.max_entries);
        if let Some(ttl) = config.ttl {
            builder = builder.time_to_live(ttl);
        }
        if let Some(idle) = config.time_to_idle {
            builder = builder.time_to_idle(idle);
        }

        Ok(MokaStore {
            cache: builder.build(),
        })
    }
}

impl Default for MokaStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&StoreConfig> for MokaStoreBuilder {
    fn from(config: &StoreConfig) -> Self {
        Self {
            max_entries: config.max_entries,
            ttl: config.ttl,
            time_to_idle: config.time_to_idle,
        }
    }
}

impl From<MokaStoreBuilder> for StoreConfig {
    fn from(builder: MokaStoreBuilder) -> Self {
        Self {
            max_entries: builder.max_entries,
            ttl: builder.ttl,
            time_to_idle: builder.time_to_idle,
        }
    }
}
