#![warn(missing_docs)]
//! # etagged-core
//!
//! Core types and collaborator traits for ETag revalidation caching.
//!
//! This crate defines the data model shared by the decorator in `etagged`,
//! the default store in `etagged-moka` and transports such as
//! `etagged-reqwest`:
//!
//! - **Requests** ([`RequestOptions`], [`Headers`], [`Body`])
//! - **Responses** ([`Response`], [`Completion`])
//! - **Cache identity** ([`CacheKey`], [`CacheEntry`])
//! - **Call normalization** ([`Params`], [`Normalized`])
//! - **Collaborators** ([`CacheStore`], [`HttpClient`])
//!
//! The decorator never talks to the network or manages storage itself; both
//! are reached through the two collaborator traits.

pub mod client;
pub mod entry;
pub mod headers;
pub mod key;
pub mod options;
pub mod params;
pub mod response;
pub mod store;

pub use client::HttpClient;
pub use entry::CacheEntry;
pub use headers::{COOKIE, ETAG, Headers, IF_NONE_MATCH};
pub use key::{CacheKey, KeyError};
pub use options::{Body, RequestOptions};
pub use params::{Callback, Normalized, Params};
pub use response::{Completion, Response};
pub use store::CacheStore;
