//! Cache status counters.
//!
//! Enable the `metrics` feature to record them through the [`metrics`] facade.
//!
//! - `etagged_cache_bypass_total` - requests passed through untouched
//! - `etagged_cache_miss_total` - eligible requests not served from the cache
//! - `etagged_cache_revalidated_total` - 304 responses answered from the cache
//! - `etagged_cache_refreshed_total` - 200 responses stored with their ETag
//!
//! [`metrics`]: https://docs.rs/metrics

use crate::status::CacheStatus;

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
lazy_static! {
    /// Track number of requests that bypassed the cache.
    pub static ref CACHE_BYPASS_COUNTER: &'static str = {
        metrics::describe_counter!(
            "etagged_cache_bypass_total",
            "Total number of requests passed through without caching."
        );
        "etagged_cache_bypass_total"
    };
    /// Track number of cache miss events.
    pub static ref CACHE_MISS_COUNTER: &'static str = {
        metrics::describe_counter!(
            "etagged_cache_miss_total",
            "Total number of cacheable requests not served from the cache."
        );
        "etagged_cache_miss_total"
    };
    /// Track number of successful revalidations.
    pub static ref CACHE_REVALIDATED_COUNTER: &'static str = {
        metrics::describe_counter!(
            "etagged_cache_revalidated_total",
            "Total number of 304 responses served from the cache."
        );
        "etagged_cache_revalidated_total"
    };
    /// Track number of stored responses.
    pub static ref CACHE_REFRESHED_COUNTER: &'static str = {
        metrics::describe_counter!(
            "etagged_cache_refreshed_total",
            "Total number of responses stored with their entity tag."
        );
        "etagged_cache_refreshed_total"
    };
}

/// Increments the counter matching `status`.
#[cfg(feature = "metrics")]
#[inline]
pub fn record_status(status: CacheStatus) {
    let counter = match status {
        CacheStatus::Bypass => *CACHE_BYPASS_COUNTER,
        CacheStatus::Miss => *CACHE_MISS_COUNTER,
        CacheStatus::Revalidated => *CACHE_REVALIDATED_COUNTER,
        CacheStatus::Refreshed => *CACHE_REFRESHED_COUNTER,
    };
    metrics::counter!(counter).increment(1);
}

/// No-op when the `metrics` feature is disabled.
#[cfg(not(feature = "metrics"))]
#[inline]
pub fn record_status(_status: CacheStatus) {}
