//! Handler for Slack Events API callbacks.
//!
//! This module processes:
//! - `url_verification` - the handshake Slack runs when the request URL is saved
//! - `event_callback` carrying a `message` event - routed to the [`PingResponder`]

use serde_json::Value;
use tracing::{debug, error, info};

use super::helpers::{err_response, ok_empty, ok_text};
use crate::bot::{MessageSender, PingResponder};
use crate::core::models::MessageEvent;

/// Handle a `message` event.
async fn handle_message_event<S>(responder: &PingResponder<S>, event: &Value) -> Value
where
    S: MessageSender + ?Sized,
{
    let message: MessageEvent = match serde_json::from_value(event.clone()) {
        Ok(m) => m,
        Err(e) => {
            error!("Malformed message event: {}", e);
            return err_response(400, &format!("Parse Error: {e}"));
        }
    };

    // Ignore bot messages and edited/system messages to avoid loops
    if message.bot_id.is_some() || message.subtype.is_some() {
        debug!(channel = %message.channel, "Skipping bot or subtyped message");
        return ok_empty();
    }

    match responder.handle(&message).await {
        Ok(()) => ok_empty(),
        Err(e) => {
            error!(channel = %message.channel, "Failed to reply: {}", e);
            err_response(500, &e.to_string())
        }
    }
}

/// Handle a JSON payload from the Slack Events API.
///
/// # Returns
/// A JSON response value to send back to Slack.
pub async fn handle_event_callback<S>(responder: &PingResponder<S>, json_body: &Value) -> Value
where
    S: MessageSender + ?Sized,
{
    let body_type = json_body.get("type").and_then(|t| t.as_str()).unwrap_or("");

    match body_type {
        "url_verification" => {
            let challenge = json_body
                .get("challenge")
                .and_then(|c| c.as_str())
                .unwrap_or("");
            ok_text(challenge)
        }
        "event_callback" => {
            let Some(event) = json_body.get("event") else {
                return ok_empty();
            };

            let event_type = event.get("type").and_then(|t| t.as_str()).unwrap_or("");
            info!(event_type = %event_type, "Processing event callback");

            match event_type {
                "message" => handle_message_event(responder, event).await,
                _ => ok_empty(),
            }
        }
        _ => ok_empty(),
    }
}
