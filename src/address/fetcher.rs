//! Address fetching trait, error types and HTTP implementation.

use std::net::IpAddr;

use thiserror::Error;

use crate::transport::{HttpClient, HttpError, HttpRequest};

/// Resolver queried when no override is configured.
///
/// Answers a GET with the caller's address followed by a newline.
pub const DEFAULT_ENDPOINT: &str = "http://checkip.amazonaws.com/";

/// Error type for address fetching operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed.
    #[error("Address request failed: {0}")]
    Http(#[from] HttpError),

    /// The resolver answered with a non-2xx status.
    #[error("Address endpoint returned HTTP {status}")]
    NonSuccessStatus {
        /// HTTP status code
        status: http::StatusCode,
    },

    /// The response body was not valid UTF-8.
    #[error("Address response is not valid UTF-8")]
    Decode,

    /// The response body was empty after trimming.
    #[error("Address endpoint returned an empty body")]
    EmptyBody,

    /// The response body is not an IP address.
    #[error("Address endpoint returned '{value}', which is not an IP address")]
    InvalidAddress {
        /// The trimmed body text
        value: String,
    },
}

/// Trait for determining the caller's current public address.
///
/// One call is one outbound attempt; implementations do not retry.
pub trait AddressFetcher: Send + Sync {
    /// Fetches the current public address as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on any network, status or decoding failure.
    fn fetch(&self) -> impl std::future::Future<Output = Result<String, FetchError>> + Send;
}

/// Fetches the public address from a plain-text HTTP resolver.
#[derive(Debug)]
pub struct HttpAddressFetcher<H> {
    client: H,
    endpoint: url::Url,
}

impl<H> HttpAddressFetcher<H> {
    /// Creates a fetcher that queries `endpoint` through `client`.
    #[must_use]
    pub const fn new(client: H, endpoint: url::Url) -> Self {
        Self { client, endpoint }
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }
}

impl<H: HttpClient> AddressFetcher for HttpAddressFetcher<H> {
    async fn fetch(&self) -> Result<String, FetchError> {
        tracing::debug!("Requesting public address from {}", self.endpoint);

        let response = self
            .client
            .request(HttpRequest::get(self.endpoint.clone()))
            .await?;

        if !response.is_success() {
            return Err(FetchError::NonSuccessStatus {
                status: response.status,
            });
        }

        let body = response.text().ok_or(FetchError::Decode)?;
        parse_body(body)
    }
}

/// Strips the line terminator and validates the address.
fn parse_body(body: &str) -> Result<String, FetchError> {
    let address = body.trim();

    if address.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    if address.parse::<IpAddr>().is_err() {
        return Err(FetchError::InvalidAddress {
            value: address.to_string(),
        });
    }

    Ok(address.to_string())
}
