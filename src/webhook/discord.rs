//! Discord-style webhook delivery.

use serde::Serialize;
use url::Url;

use crate::transport::{HttpClient, HttpRequest};

use super::{Notifier, NotifyError};

/// Display name the message is posted under.
pub const DISPLAY_NAME: &str = "IP Tracker";

/// Discord's webhook type for incoming webhooks.
const INCOMING_WEBHOOK: u8 = 1;

const EXPECTED_SHAPE: &str = "expected https://<host>/api/webhooks/<id>/<token>";

/// A webhook URL with its id and token extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookTarget {
    url: Url,
    id: String,
    token: String,
}

impl WebhookTarget {
    /// Parses a webhook URL of the form `https://<host>/api/webhooks/<id>/<token>`.
    ///
    /// A versioned API prefix such as `/api/v10/webhooks/...` is accepted too.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidUrl`] for any other shape.
    pub fn parse(url: Url) -> Result<Self, NotifyError> {
        let invalid = |reason| NotifyError::InvalidUrl {
            url: url.to_string(),
            reason,
        };

        if url.scheme() != "https" {
            return Err(invalid("scheme must be https"));
        }
        if url.host_str().is_none() {
            return Err(invalid("missing host"));
        }

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        let rest = match segments.as_slice() {
            ["api", "webhooks", rest @ ..] => rest,
            ["api", version, "webhooks", rest @ ..] if is_api_version(version) => rest,
            _ => return Err(invalid(EXPECTED_SHAPE)),
        };

        let [id, token] = rest else {
            return Err(invalid(EXPECTED_SHAPE));
        };

        if !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("webhook id must be numeric"));
        }

        let (id, token) = ((*id).to_string(), (*token).to_string());
        Ok(Self { url, id, token })
    }

    /// Returns the full webhook URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the webhook id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the webhook token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

fn is_api_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// JSON body posted to the webhook.
#[derive(Serialize)]
struct Payload<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: u8,
    token: &'a str,
    id: &'a str,
    content: &'a str,
}

/// Delivers messages to a Discord-style webhook.
///
/// Each call is a single POST with `?wait=true`, so the service confirms
/// the message was stored before it answers.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ip_tracker::transport::ReqwestClient;
/// use ip_tracker::webhook::{DiscordWebhook, Notifier, WebhookTarget};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let target = WebhookTarget::parse(Url::parse(
///     "https://discord.com/api/webhooks/123456/secret-token",
/// )?)?;
/// let webhook = DiscordWebhook::new(ReqwestClient::with_timeout(Duration::from_secs(10))?, target);
/// webhook.notify("hello").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DiscordWebhook<H> {
    client: H,
    target: WebhookTarget,
}

impl<H> DiscordWebhook<H> {
    /// Creates a webhook notifier posting to `target` through `client`.
    #[must_use]
    pub const fn new(client: H, target: WebhookTarget) -> Self {
        Self { client, target }
    }

    /// Returns the configured target.
    #[must_use]
    pub const fn target(&self) -> &WebhookTarget {
        &self.target
    }

    /// Builds the POST request carrying `message`.
    fn build_request(&self, message: &str) -> Result<HttpRequest, NotifyError> {
        let payload = Payload {
            name: DISPLAY_NAME,
            kind: INCOMING_WEBHOOK,
            token: &self.target.token,
            id: &self.target.id,
            content: message,
        };
        let body = serde_json::to_vec(&payload).map_err(NotifyError::Encode)?;

        let mut url = self.target.url.clone();
        url.query_pairs_mut().append_pair("wait", "true");

        Ok(HttpRequest::post_json(url, body))
    }
}

impl<H: HttpClient> Notifier for DiscordWebhook<H> {
    async fn notify(&self, message: &str) -> Result<http::StatusCode, NotifyError> {
        let request = self.build_request(message)?;
        tracing::debug!("Posting notification to webhook {}", self.target.id);

        let response = self.client.request(request).await?;

        if !response.is_success() {
            return Err(NotifyError::NonSuccessStatus {
                status: response.status,
                body: response.text().map(ToString::to_string),
            });
        }

        Ok(response.status)
    }
}
