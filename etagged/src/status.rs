//! Per-request cache status.

use std::fmt;

/// How the cache took part in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheStatus {
    /// The request was not eligible for caching (non-GET or cookie-bearing).
    Bypass,
    /// The request was eligible but nothing was served from or written to
    /// the cache.
    #[default]
    Miss,
    /// The server confirmed the cached entry with 304 and the cached body
    /// was served.
    Revalidated,
    /// A 200 response carrying an ETag was stored.
    Refreshed,
}

impl CacheStatus {
    /// Returns the status as a string slice.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Bypass => "bypass",
            CacheStatus::Miss => "miss",
            CacheStatus::Revalidated => "revalidated",
            CacheStatus::Refreshed => "refreshed",
        }
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
