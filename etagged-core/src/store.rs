//! Cache store collaborator.

use std::sync::Arc;

use crate::entry::CacheEntry;
use crate::key::CacheKey;

/// Key to entry storage consulted by the decorator.
///
/// Capacity, eviction and expiry are entirely the store's business. Lookups
/// are synchronous and expected to be cheap; implementations must tolerate
/// concurrent `get`/`set` from many in-flight requests. Concurrent writers to
/// one key race, and the last write wins.
pub trait CacheStore: Send + Sync {
    /// Returns a copy of the entry stored under `key`.
    fn get(&self, key: &CacheKey) -> Option<CacheEntry>;

    /// Stores `entry` under `key`, replacing any previous entry.
    fn set(&self, key: CacheKey, entry: CacheEntry);

    /// Removes every entry.
    fn reset(&self);
}

impl<S> CacheStore for Arc<S>
where
    S: CacheStore + ?Sized,
{
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        (**self).get(key)
    }

    fn set(&self, key: CacheKey, entry: CacheEntry) {
        (**self).set(key, entry)
    }

    fn reset(&self) {
        (**self).reset()
    }
}

impl<S> CacheStore for &S
where
    S: CacheStore + ?Sized,
{
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        (**self).get(key)
    }

    fn set(&self, key: CacheKey, entry: CacheEntry) {
        (**self).set(key, entry)
    }

    fn reset(&self) {
        (**self).reset()
    }
}

impl CacheStore for Box<dyn CacheStore> {
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        (**self).get(key)
    }

    fn set(&self, key: CacheKey, entry: CacheEntry) {
        (**self).set(key, entry)
    }

    fn reset(&self) {
        (**self).reset()
    }
}
