//! Request options and message bodies.

use std::collections::BTreeMap;
use std::time::Duration;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::headers::Headers;

/// A message body.
///
/// Both variants are immutable values, so a clone never aliases data a caller
/// could later mutate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Body {
    /// Structured JSON document.
    Json(serde_json::Value),
    /// Raw bytes.
    Bytes(Bytes),
}

impl Body {
    /// Returns the JSON document, if this is a JSON body.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Body::Json(value) => Some(value),
            Body::Bytes(_) => None,
        }
    }

    /// Returns the raw bytes, if this is a byte body.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Body::Bytes(bytes) => Some(bytes),
            Body::Json(_) => None,
        }
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Body::Json(value)
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Body::Bytes(bytes)
    }
}

impl From<&'static str> for Body {
    fn from(text: &'static str) -> Self {
        Body::Bytes(Bytes::from_static(text.as_bytes()))
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Bytes(Bytes::from(text))
    }
}

/// Options describing a single HTTP request.
///
/// Two requests are cache-equivalent iff their options are structurally
/// equal. `Clone` produces a fully independent copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Target resource, usually an absolute URL.
    pub target: String,
    /// Request method. `None` means GET.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<SmolStr>,
    /// Request headers.
    #[serde(default)]
    pub headers: Headers,
    /// Query parameters appended to the target.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, String>,
    /// Request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    /// Send the body as JSON and parse the response body as JSON.
    #[serde(default)]
    pub json: bool,
    /// Per-request timeout, enforced by the transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Creates options for a GET of `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    /// Sets the request method.
    pub fn method(mut self, method: impl Into<SmolStr>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Adds a header, replacing any differently-cased entry of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Adds a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Sets the request body.
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Enables JSON encoding of the request body and decoding of the response.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the effective method, defaulting to GET when absent or empty.
    pub fn effective_method(&self) -> &str {
        match self.method.as_deref() {
            Some(method) if !method.is_empty() => method,
            _ => "GET",
        }
    }

    /// Returns `true` when the method is absent or case-insensitively `GET`.
    pub fn is_get(&self) -> bool {
        self.effective_method().eq_ignore_ascii_case("GET")
    }
}
