//! [reqwest](https://docs.rs/reqwest) transport for etagged.
//!
//! [`ReqwestClient`] implements [`HttpClient`](etagged_core::HttpClient) on top
//! of a [`reqwest::Client`], so it can be wrapped by `etagged`'s
//! `ConditionalClient`:
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use etagged::StoreConfig;
//! use etagged_reqwest::ReqwestClient;
//!
//! let client = etagged::create(&StoreConfig::default(), Some(ReqwestClient::default()))?;
//! let completion = client.call("https://api.example.com/items").await;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::ReqwestClient;
pub use error::ReqwestError;
