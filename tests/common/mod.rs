// Each integration test binary only uses part of this module
#![allow(dead_code)]

//! In-memory `MessageSender` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use pingpong::bot::MessageSender;
use pingpong::core::models::OutboundMessage;
use pingpong::errors::SlackError;

/// Records every message it is asked to post.
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<OutboundMessage>>,
}

impl RecordingSender {
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn post_message(&self, message: &OutboundMessage) -> Result<(), SlackError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Fails every post with a fixed Slack API error, counting attempts.
pub struct FailingSender {
    pub reason: String,
    attempts: Mutex<usize>,
}

impl FailingSender {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            attempts: Mutex::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl MessageSender for FailingSender {
    async fn post_message(&self, _message: &OutboundMessage) -> Result<(), SlackError> {
        *self.attempts.lock().unwrap() += 1;
        Err(SlackError::ApiError(self.reason.clone()))
    }
}
