//! Stored revalidation entries.

use smol_str::SmolStr;

use crate::options::Body;

/// A cached response body together with the entity tag that validates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    /// Copy of the body of the 200 response that produced the entry.
    pub data: Body,
    /// Entity tag sent back as `If-None-Match`.
    pub etag: SmolStr,
}

impl CacheEntry {
    /// Creates an entry.
    pub fn new(data: Body, etag: impl Into<SmolStr>) -> Self {
        Self {
            data,
            etag: etag.into(),
        }
    }
}
