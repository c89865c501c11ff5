//! Outbound request and buffered response values.

use http::header::{self, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use url::Url;

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = concat!("ip-tracker/", env!("CARGO_PKG_VERSION"));

/// A request the fetcher or notifier wants sent.
///
/// Every request carries [`USER_AGENT`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Target URL
    pub url: Url,
    /// Headers to send
    pub headers: HeaderMap,
    /// Request body, if any
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    fn with_method(method: Method, url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

        Self {
            method,
            url,
            headers,
            body: None,
        }
    }

    /// A bodiless GET.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::with_method(Method::GET, url)
    }

    /// A POST whose body is already-encoded JSON.
    #[must_use]
    pub fn post_json(url: Url, body: Vec<u8>) -> Self {
        let mut request = Self::with_method(Method::POST, url);
        request
            .headers
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        request.body = Some(body);
        request
    }
}

/// Status and fully buffered body of a response.
///
/// Both endpoints this crate talks to answer with a few bytes at most.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true for a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as text, or `None` if it is not valid UTF-8.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}
