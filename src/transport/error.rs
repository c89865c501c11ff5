//! Transport failures.

use thiserror::Error;

/// Why a request produced no response.
///
/// Nothing in this crate retries; every variant ends the current run.
#[derive(Debug, Error)]
pub enum HttpError {
    /// DNS, connect, TLS or body read failure.
    #[error("Request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No response arrived before the client timeout.
    #[error("No response within the request timeout")]
    Timeout,

    /// The request was rejected before it was sent.
    #[error("Request could not be built: {0}")]
    Build(String),
}
