//! Case-preserving header mapping with case-insensitive lookup.
//!
//! Header names are stored exactly as the caller (or the server) wrote them,
//! but every lookup and replacement compares names ASCII case-insensitively,
//! as HTTP requires. `Cookie`, `cookie` and `COOKIE` are the same header.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Request header carrying the cached entity tag on revalidation.
pub const IF_NONE_MATCH: &str = "If-None-Match";
/// Request header whose presence disables caching.
pub const COOKIE: &str = "cookie";
/// Response header carrying the entity tag.
pub const ETAG: &str = "etag";

/// Header name to value mapping.
///
/// Iteration order is the byte order of the stored names, which makes the
/// serialized form of a mapping independent of insertion order.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers(BTreeMap<String, String>);

impl Headers {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the first value whose name matches `name` case-insensitively.
    ///
    /// ```
    /// use etagged_core::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.insert("ETag", "\"v1\"");
    /// assert_eq!(headers.get_ignore_case("etag"), Some("\"v1\""));
    /// assert_eq!(headers.get_ignore_case("cookie"), None);
    /// ```
    pub fn get_ignore_case(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if a header named `name` (any casing) is present.
    pub fn contains_ignore_case(&self, name: &str) -> bool {
        self.get_ignore_case(name).is_some()
    }

    /// Sets `name` to `value`, replacing every entry whose name matches
    /// case-insensitively.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.remove_ignore_case(&name);
        self.0.insert(name, value.into());
    }

    /// Removes every entry whose name matches `name` case-insensitively.
    pub fn remove_ignore_case(&mut self, name: &str) {
        self.0.retain(|key, _| !key.eq_ignore_ascii_case(name));
    }

    /// Iterates over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored headers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no headers are stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl From<&http::HeaderMap> for Headers {
    /// Converts a transport header map. Values that are not visible ASCII are
    /// skipped, repeated headers keep the last value.
    fn from(map: &http::HeaderMap) -> Self {
        map.iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_owned(), value.to_owned()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let headers: Headers = [("Cookie", "session=1")].into_iter().collect();
        assert_eq!(headers.get_ignore_case("cookie"), Some("session=1"));
        assert_eq!(headers.get_ignore_case("COOKIE"), Some("session=1"));
        assert!(headers.contains_ignore_case(COOKIE));
    }

    #[test]
    fn missing_header_is_none() {
        let headers = Headers::new();
        assert_eq!(headers.get_ignore_case(ETAG), None);
    }

    #[test]
    fn insert_replaces_differently_cased_name() {
        let mut headers = Headers::new();
        headers.insert("if-none-match", "\"old\"");
        headers.insert(IF_NONE_MATCH, "\"new\"");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get_ignore_case("IF-NONE-MATCH"), Some("\"new\""));
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec![(IF_NONE_MATCH, "\"new\"")]
        );
    }

    #[test]
    fn converts_from_header_map() {
        let mut map = http::HeaderMap::new();
        map.insert(http::header::ETAG, http::HeaderValue::from_static("\"v1\""));
        let headers = Headers::from(&map);
        assert_eq!(headers.get_ignore_case(ETAG), Some("\"v1\""));
    }
}
