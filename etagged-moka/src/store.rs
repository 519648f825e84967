//! Moka store implementation.

use etagged_core::{CacheEntry, CacheKey, CacheStore};
use moka::sync::Cache;

use crate::builder::MokaStoreBuilder;
use crate::config::{ConfigError, StoreConfig};

/// Bounded in-memory store.
///
/// Reads are lock-free and writes use fine-grained locking, so a single store
/// can back many concurrent requests. Eviction follows Moka's TinyLFU policy.
///
/// # Caveats
///
/// - Data is **not persisted** and is lost on process restart
/// - Eviction and expiry are **best-effort**: evicted entries may remain
///   readable until Moka runs its pending maintenance tasks
#[derive(Clone, Debug)]
pub struct MokaStore {
    pub(crate) cache: Cache<CacheKey, CacheEntry>,
}

impl MokaStore {
    /// Creates a builder with default settings.
    pub fn builder() -> MokaStoreBuilder {
        MokaStoreBuilder::new()
    }

    /// Creates a store from a deserialized configuration.
    pub fn from_config(config: &StoreConfig) -> Result<Self, ConfigError> {
        MokaStoreBuilder::from(config).build()
    }

    /// Approximate number of stored entries.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs pending eviction and expiry work.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl CacheStore for MokaStore {
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.cache.get(key)
    }

    fn set(&self, key: CacheKey, entry: CacheEntry) {
        tracing::trace!(etag = %entry.etag, "storing cache entry");
        self.cache.insert(key, entry);
    }

    fn reset(&self) {
        tracing::debug!("invalidating all cache entries");
        self.cache.invalidate_all();
    }
}
