//! Error types for construction and per-request failures.

use etagged_moka::ConfigError;
use thiserror::Error;

/// Failure to construct a decorated client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InitError {
    /// No transport was supplied. There is no default transport.
    #[error("a base HTTP client must be supplied (e.g. etagged_reqwest::ReqwestClient)")]
    MissingClient,
    /// The store configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error reported through [`Completion::error`](etagged_core::Completion).
#[derive(Debug, Error)]
pub enum RequestError<E> {
    /// Error produced by the underlying transport, unchanged.
    #[error(transparent)]
    Transport(E),
    /// The server answered 304 Not Modified but no cached entry was sent as
    /// the validator, so there is no body to substitute.
    #[error("received 304 Not Modified for {target} without a cached entry")]
    OrphanedNotModified {
        /// Target of the request.
        target: String,
    },
}

impl<E> RequestError<E> {
    /// Returns the transport error, if this is one.
    pub fn as_transport(&self) -> Option<&E> {
        match self {
            RequestError::Transport(error) => Some(error),
            RequestError::OrphanedNotModified { .. } => None,
        }
    }
}
