//! Tests for `WebhookTarget` and `DiscordWebhook`.

use std::sync::Arc;

use super::{DISPLAY_NAME, DiscordWebhook, Notifier, NotifyError, WebhookTarget};
use crate::transport::HttpError;
use crate::transport::mock::MockClient;

const WEBHOOK: &str = "https://discord.com/api/webhooks/123456789/abc-DEF_token";

fn target() -> WebhookTarget {
    WebhookTarget::parse(url::Url::parse(WEBHOOK).unwrap()).unwrap()
}

fn parse(url: &str) -> Result<WebhookTarget, NotifyError> {
    WebhookTarget::parse(url::Url::parse(url).unwrap())
}

mod target_parsing {
    use super::*;

    #[test]
    fn extracts_id_and_token() {
        let target = target();

        assert_eq!(target.id(), "123456789");
        assert_eq!(target.token(), "abc-DEF_token");
        assert_eq!(target.url().as_str(), WEBHOOK);
    }

    #[test]
    fn accepts_versioned_api_prefix() {
        let target = parse("https://discord.com/api/v10/webhooks/42/tok").unwrap();

        assert_eq!(target.id(), "42");
        assert_eq!(target.token(), "tok");
    }

    #[test]
    fn tolerates_trailing_slash() {
        let target = parse("https://discord.com/api/webhooks/42/tok/").unwrap();

        assert_eq!(target.token(), "tok");
    }

    #[test]
    fn rejects_missing_token() {
        let result = parse("https://discord.com/api/webhooks/42");

        assert!(matches!(result, Err(NotifyError::InvalidUrl { .. })));
    }

    #[test]
    fn rejects_extra_segments() {
        let result = parse("https://discord.com/api/webhooks/42/tok/github");

        assert!(matches!(result, Err(NotifyError::InvalidUrl { .. })));
    }

    #[test]
    fn rejects_unrelated_path() {
        let result = parse("https://example.com/hooks/42/tok");

        assert!(matches!(result, Err(NotifyError::InvalidUrl { .. })));
    }

    #[test]
    fn rejects_non_numeric_id() {
        match parse("https://discord.com/api/webhooks/abc/tok") {
            Err(NotifyError::InvalidUrl { reason, .. }) => assert!(reason.contains("numeric")),
            other => panic!("Expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn rejects_plain_http() {
        match parse("http://discord.com/api/webhooks/42/tok") {
            Err(NotifyError::InvalidUrl { reason, .. }) => assert!(reason.contains("https")),
            other => panic!("Expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = parse("ftp://discord.com/api/webhooks/42/tok");

        assert!(matches!(result, Err(NotifyError::InvalidUrl { .. })));
    }
}

mod delivery {
    use super::*;

    fn webhook_with(client: &Arc<MockClient>) -> DiscordWebhook<Arc<MockClient>> {
        DiscordWebhook::new(Arc::clone(client), target())
    }

    #[tokio::test]
    async fn posts_once_with_wait_query() {
        let client = Arc::new(MockClient::responding(http::StatusCode::OK, b"{}"));

        webhook_with(&client).notify("hello").await.unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::POST);
        assert_eq!(requests[0].url.query(), Some("wait=true"));
        assert_eq!(requests[0].url.path(), "/api/webhooks/123456789/abc-DEF_token");
    }

    #[tokio::test]
    async fn sends_json_headers() {
        let client = Arc::new(MockClient::responding(http::StatusCode::OK, b"{}"));

        webhook_with(&client).notify("hello").await.unwrap();

        let request = &client.captured_requests()[0];
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(
            request
                .headers
                .get(http::header::USER_AGENT)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("ip-tracker/")
        );
    }

    #[tokio::test]
    async fn payload_carries_fixed_name_and_credentials() {
        let client = Arc::new(MockClient::responding(http::StatusCode::OK, b"{}"));

        webhook_with(&client)
            .notify("Public IP address changed from 203.0.113.7 to 198.51.100.9")
            .await
            .unwrap();

        let body = client.captured_requests()[0].body.clone().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["name"], DISPLAY_NAME);
        assert_eq!(json["type"], 1);
        assert_eq!(json["id"], "123456789");
        assert_eq!(json["token"], "abc-DEF_token");
        assert_eq!(
            json["content"],
            "Public IP address changed from 203.0.113.7 to 198.51.100.9"
        );
    }

    #[tokio::test]
    async fn returns_response_status() {
        let client = Arc::new(MockClient::responding(http::StatusCode::NO_CONTENT, b""));

        let status = webhook_with(&client).notify("hello").await.unwrap();

        assert_eq!(status, http::StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn non_success_status_is_error_with_body() {
        let client = Arc::new(MockClient::responding(
            http::StatusCode::UNAUTHORIZED,
            br#"{"message": "Invalid Webhook Token"}"#,
        ));

        match webhook_with(&client).notify("hello").await {
            Err(NotifyError::NonSuccessStatus { status, body }) => {
                assert_eq!(status, http::StatusCode::UNAUTHORIZED);
                assert!(body.unwrap().contains("Invalid Webhook Token"));
            }
            other => panic!("Expected NonSuccessStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn network_error_is_not_retried() {
        let client = Arc::new(MockClient::failing(HttpError::Timeout));

        let result = webhook_with(&client).notify("hello").await;

        assert!(matches!(result, Err(NotifyError::Http(HttpError::Timeout))));
        assert_eq!(client.captured_requests().len(), 1);
    }
}
