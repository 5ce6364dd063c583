//! Slack API client module
//!
//! Posts replies through `chat.postMessage`, retrying only failures that
//! are likely to clear up on their own.

use std::time::Duration;

use async_trait::async_trait;
use slack_morphism::errors::SlackClientError;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::SlackApiChatPostMessageRequest;
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

use crate::bot::MessageSender;
use crate::core::models::OutboundMessage;
use crate::errors::SlackError;

// Build the Slack client connector safely without panicking.
// If connector construction fails, store None and surface a SlackError at call sites.
static SLACK_CLIENT: std::sync::LazyLock<Option<SlackHyperClient>> =
    std::sync::LazyLock::new(|| match SlackClientHyperConnector::new() {
        Ok(connector) => Some(SlackHyperClient::new(connector)),
        Err(e) => {
            warn!("Failed to create Slack HTTP connector: {}", e);
            None
        }
    });

// Backoff of 100ms, 200ms, 400ms before jitter scales each one into [0, delay)
const RETRY_FACTOR_MILLIS: u64 = 50;
const RETRY_MAX_DELAY: Duration = Duration::from_secs(1);
pub const MAX_RETRIES: usize = 3;

/// Delays between attempts before jitter is applied.
pub fn backoff_schedule() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(2)
        .factor(RETRY_FACTOR_MILLIS)
        .max_delay(RETRY_MAX_DELAY)
        .take(MAX_RETRIES)
}

/// Jittered delays used between `chat.postMessage` attempts.
pub fn retry_strategy() -> impl Iterator<Item = Duration> {
    backoff_schedule().map(jitter)
}

/// Whether a failed Slack call is worth repeating.
///
/// Rate limits, 5xx responses and broken connections are transient. API
/// rejections such as `channel_not_found` or `invalid_auth` are not, and a
/// repeated post could duplicate a message that already went through.
#[must_use]
pub fn is_transient_error(error: &SlackClientError) -> bool {
    match error {
        SlackClientError::RateLimitError(_) | SlackClientError::HttpProtocolError(_) => true,
        SlackClientError::HttpError(e) => e.status_code.is_server_error(),
        _ => false,
    }
}

/// Slack API client with retry logic and error handling
pub struct SlackClient {
    token: SlackApiToken,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP connector is unavailable, Slack rejects
    /// the message, or a transient failure outlasts the retries.
    pub async fn post_message(&self, channel_id: &str, message: &str) -> Result<(), SlackError> {
        let client = SLACK_CLIENT.as_ref().ok_or_else(|| {
            SlackError::ApiError("Slack HTTP connector not initialized".to_string())
        })?;

        let post_req = SlackApiChatPostMessageRequest::new(
            SlackChannelId(channel_id.to_string()),
            SlackMessageContent::new().with_text(message.to_string()),
        );
        let post_req = &post_req;
        let token = &self.token;

        RetryIf::spawn(
            retry_strategy(),
            move || async move {
                client
                    .open_session(token)
                    .chat_post_message(post_req)
                    .await
                    .map(|_| ())
            },
            is_transient_error,
        )
        .await?;

        debug!(channel_id = %channel_id, "Posted message");
        Ok(())
    }
}

#[async_trait]
impl MessageSender for SlackClient {
    async fn post_message(&self, message: &OutboundMessage) -> Result<(), SlackError> {
        SlackClient::post_message(self, &message.channel, &message.text).await
    }
}
