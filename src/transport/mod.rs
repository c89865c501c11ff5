//! HTTP transport shared by the address fetcher and the notifier.

mod client;
mod error;
mod request;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use request::{HttpRequest, HttpResponse, USER_AGENT};

/// Sends one request and buffers the response.
///
/// Lets the fetcher and notifier run against mock clients in tests.
pub trait HttpClient: Send + Sync {
    /// Sends `req` once.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response is received. A non-2xx
    /// response is not an error at this layer.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
