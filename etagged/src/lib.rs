#![warn(missing_docs)]
//! # etagged
//!
//! Transparent ETag revalidation caching for HTTP clients.
//!
//! [`ConditionalClient`] wraps any [`HttpClient`] and turns repeated GET
//! requests into conditional requests: the entity tag of the last `200`
//! response is sent back as `If-None-Match`, and a `304 Not Modified` answer
//! is completed with the cached body.
//!
//! ```no_run
//! # use std::future::Future;
//! # use etagged::{Completion, HttpClient, RequestOptions, Response};
//! # struct Transport;
//! # impl HttpClient for Transport {
//! #     type Error = std::io::Error;
//! #     fn execute(&self, _: RequestOptions) -> impl Future<Output = Completion<Self::Error>> + Send {
//! #         std::future::ready(Completion::ok(Response::new(http::StatusCode::OK)))
//! #     }
//! # }
//! # async fn run() -> Result<(), etagged::InitError> {
//! use etagged::StoreConfig;
//!
//! let client = etagged::create(&StoreConfig::default(), Some(Transport))?;
//!
//! let first = client.call("https://api.example.com/items").await;
//! let second = client.call("https://api.example.com/items").await;
//! assert_eq!(first.body, second.body);
//!
//! client.reset();
//! # Ok(())
//! # }
//! ```
//!
//! ## Caching rules
//!
//! - Only GET requests are cached; any other method passes through.
//! - Requests carrying a `Cookie` header pass through.
//! - Only `200` responses with an `ETag` header create or replace entries.
//! - A `304` answer to a conditional request yields the cached body and
//!   clears any transport error reported with it.
//!
//! ## Features
//!
//! - `metrics` - count requests per [`CacheStatus`] through the `metrics`
//!   facade (see [`metrics`](crate::metrics)).

mod builder;
mod client;
mod error;
/// Cache status counters, recorded when the `metrics` feature is enabled.
pub mod metrics;
mod status;

pub use builder::{ConditionalClientBuilder, NotSet, create};
pub use client::{ClientCompletion, ConditionalClient};
pub use error::{InitError, RequestError};
pub use status::CacheStatus;

pub use etagged_core::{
    Body, CacheEntry, CacheKey, CacheStore, Callback, Completion, Headers, HttpClient, Params,
    RequestOptions, Response,
};
pub use etagged_moka::{ConfigError, MokaStore, StoreConfig};
