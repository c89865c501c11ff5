//! Error types for webhook delivery.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for notification delivery.
///
/// Delivery is attempted once; callers treat any variant as fatal for the run.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The webhook URL does not have the `/api/webhooks/<id>/<token>` shape.
    #[error("Invalid webhook URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The request could not be completed.
    #[error("Webhook request failed: {0}")]
    Http(#[from] HttpError),

    /// The JSON payload could not be encoded.
    #[error("Failed to encode webhook payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// The webhook answered with a non-2xx status.
    #[error("Webhook returned HTTP {status}")]
    NonSuccessStatus {
        /// HTTP status code
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8
        body: Option<String>,
    },
}
