//! Error types for the remote location store.

use reqwest::StatusCode;

/// Errors that can occur while talking to a [`LocationStore`](super::LocationStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never produced a response (connection, DNS, TLS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store returned {status} for {path}")]
    Status { status: StatusCode, path: String },

    /// The store base URL could not be joined with a document path.
    #[error("invalid store url: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not the expected JSON.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout(#[from] tokio::time::error::Elapsed),

    /// A failure injected by an in-memory store.
    #[error("simulated store failure: {0}")]
    Simulated(&'static str),
}
