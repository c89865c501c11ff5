//! Notification texts.

/// Message sent when the first observation is recorded.
#[must_use]
pub fn tracking_started(address: &str) -> String {
    format!("Started tracking public IP address {address}")
}

/// Message sent when the address differs from the last recorded one.
#[must_use]
pub fn address_changed(previous: &str, current: &str) -> String {
    format!("Public IP address changed from {previous} to {current}")
}
