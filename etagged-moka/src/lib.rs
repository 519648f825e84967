#![warn(missing_docs)]
//! In-memory [`CacheStore`](etagged_core::CacheStore) for etagged, powered by
//! [Moka](https://docs.rs/moka).
//!
//! ```
//! use etagged_moka::{MokaStore, StoreConfig};
//!
//! let store = MokaStore::from_config(&StoreConfig::default()).unwrap();
//! assert_eq!(store.entry_count(), 0);
//! ```

mod builder;
mod config;
mod store;

pub use builder::MokaStoreBuilder;
pub use config::{ConfigError, StoreConfig};
pub use store::MokaStore;
