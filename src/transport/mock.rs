//! Mock HTTP client for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that replays a queue of results and records requests.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    /// Creates a mock that answers requests with `results` in order.
    pub fn new(results: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(results.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock answering once with `status` and `body`.
    pub fn responding(status: http::StatusCode, body: &[u8]) -> Self {
        Self::new(vec![Ok(HttpResponse::new(status, body.to_vec()))])
    }

    /// Creates a mock whose single request fails with `error`.
    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Returns every request seen so far.
    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(HttpError::Timeout))
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}
