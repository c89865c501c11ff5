//! Tests for `ReqwestClient`.
//!
//! No network is assumed; the request test tolerates a proxy answering
//! for the unresolvable host.

use std::time::Duration;

use super::*;

#[test]
fn with_timeout_builds_client() {
    assert!(ReqwestClient::with_timeout(Duration::from_secs(5)).is_ok());
}

#[test]
fn client_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestClient>();
}

#[tokio::test]
async fn unresolvable_host_is_an_error_or_proxy_response() {
    let client = ReqwestClient::with_timeout(Duration::from_secs(5)).unwrap();
    let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

    let result = client.request(HttpRequest::get(url)).await;

    match result {
        Err(HttpError::Transport(_) | HttpError::Timeout) => {}
        Ok(resp) if !resp.is_success() => {}
        other => panic!("Expected transport error or proxy error response, got {other:?}"),
    }
}

#[test]
fn builder_errors_map_to_build() {
    let error = reqwest::Client::new().get("not a url").build().unwrap_err();

    assert!(matches!(HttpError::from(error), HttpError::Build(_)));
}
