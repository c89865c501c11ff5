//! Notifier trait.

use super::NotifyError;

/// Trait for delivering a human-readable message to an external service.
///
/// Lets the run controller be tested without any network access.
pub trait Notifier: Send + Sync {
    /// Delivers `message` and returns the status the service answered with.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] on any network failure or non-2xx status.
    fn notify(
        &self,
        message: &str,
    ) -> impl std::future::Future<Output = Result<http::StatusCode, NotifyError>> + Send;
}
