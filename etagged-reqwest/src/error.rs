//! Transport errors.

use thiserror::Error;

/// Error raised while building, sending or reading a request.
#[derive(Debug, Error)]
pub enum ReqwestError {
    /// The request method is not a valid HTTP token.
    #[error("invalid request method {0:?}")]
    InvalidMethod(String),
    /// The target could not be parsed as an absolute URL.
    #[error("invalid request target {target:?}: {reason}")]
    InvalidUrl {
        /// The rejected target.
        target: String,
        /// Parser message.
        reason: String,
    },
    /// The JSON request body could not be encoded.
    #[error("failed to encode JSON request body")]
    Encode(#[from] serde_json::Error),
    /// reqwest failed to send the request or read the response.
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}
