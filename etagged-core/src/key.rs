//! Cache key capture.
//!
//! A [`CacheKey`] is an immutable snapshot of [`RequestOptions`] taken before
//! any revalidation header is injected. Keys compare and hash through a
//! canonical JSON rendering of the snapshot, so two requests share a key iff
//! their options are structurally equal.
//!
//! ```
//! use etagged_core::{CacheKey, RequestOptions};
//!
//! let a = CacheKey::capture(&RequestOptions::new("/r").header("Accept", "*/*")).unwrap();
//! let b = CacheKey::capture(&RequestOptions::new("/r").header("Accept", "*/*")).unwrap();
//! assert_eq!(a, b);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use thiserror::Error;

use crate::headers::IF_NONE_MATCH;
use crate::options::RequestOptions;

/// Failure to derive a cache key from request options.
#[derive(Debug, Error)]
#[error("failed to canonicalize request options for {target}")]
pub struct KeyError {
    target: String,
    #[source]
    source: serde_json::Error,
}

#[derive(Debug)]
struct CacheKeyInner {
    options: RequestOptions,
    canonical: String,
}

/// Identity of a cacheable request.
///
/// Cloning only increments a reference count; the captured options can never
/// be mutated after capture.
#[derive(Clone, Debug)]
pub struct CacheKey {
    inner: Arc<CacheKeyInner>,
}

impl CacheKey {
    /// Captures a key from `options`.
    ///
    /// The snapshot excludes `If-None-Match` in any casing: the header is a
    /// revalidation detail, not part of the request's identity.
    pub fn capture(options: &RequestOptions) -> Result<Self, KeyError> {
        let mut options = options.clone();
        options.headers.remove_ignore_case(IF_NONE_MATCH);

        let canonical = serde_json::to_string(&options).map_err(|source| KeyError {
            target: options.target.clone(),
            source,
        })?;

        Ok(CacheKey {
            inner: Arc::new(CacheKeyInner { options, canonical }),
        })
    }

    /// The captured request options.
    pub fn options(&self) -> &RequestOptions {
        &self.inner.options
    }

    /// The canonical string form used for equality and hashing.
    pub fn as_str(&self) -> &str {
        &self.inner.canonical
    }
}

impl PartialEq for CacheKey {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.canonical == other.inner.canonical
    }
}

impl Eq for CacheKey {}

impl Hash for CacheKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.canonical.hash(state);
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.canonical)
    }
}
