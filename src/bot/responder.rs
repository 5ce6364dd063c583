//! The ping/pong rule.
//!
//! [`PingResponder`] looks at one [`MessageEvent`] at a time and, when the
//! text contains `ping`, posts `pong` back to the same channel through an
//! injected [`MessageSender`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::models::{MessageEvent, OutboundMessage};
use crate::errors::SlackError;

/// Substring that triggers a reply. Matched case-sensitively.
pub const PING_TRIGGER: &str = "ping";

/// Text of every reply.
pub const PONG_REPLY: &str = "pong";

/// Outbound side of the responder: anything that can post a chat message.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the message could not be delivered.
    async fn post_message(&self, message: &OutboundMessage) -> Result<(), SlackError>;
}

/// Returns true when `text` contains [`PING_TRIGGER`].
#[must_use]
pub fn contains_trigger(text: &str) -> bool {
    text.contains(PING_TRIGGER)
}

/// Replies `pong` to any message containing `ping`.
///
/// Holds no state besides the shared sender, so one instance can serve
/// concurrent events.
pub struct PingResponder<S: ?Sized> {
    sender: Arc<S>,
}

impl<S: MessageSender + ?Sized> PingResponder<S> {
    #[must_use]
    pub fn new(sender: Arc<S>) -> Self {
        Self { sender }
    }

    /// Handle a single message event.
    ///
    /// Sends at most one reply and waits for the send to finish before
    /// returning. Events without text are ignored.
    ///
    /// # Errors
    ///
    /// Returns the sender's error as-is if posting the reply fails.
    pub async fn handle(&self, event: &MessageEvent) -> Result<(), SlackError> {
        let Some(text) = event.text.as_deref() else {
            return Ok(());
        };

        if !contains_trigger(text) {
            return Ok(());
        }

        let reply = OutboundMessage {
            text: PONG_REPLY.to_string(),
            channel: event.channel.clone(),
        };

        self.sender.post_message(&reply).await
    }
}

impl<S: ?Sized> Clone for PingResponder<S> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}
