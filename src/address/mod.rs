//! Public address resolution.
//!
//! This module provides:
//! - The fetching abstraction ([`AddressFetcher`])
//! - An HTTP implementation against a plain-text resolver ([`HttpAddressFetcher`])

mod fetcher;


pub use fetcher::{AddressFetcher, DEFAULT_ENDPOINT, FetchError, HttpAddressFetcher};
