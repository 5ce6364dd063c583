//! API Lambda handler - thin router in front of the event dispatcher.
//!
//! This module handles:
//! - Request validation (body presence, encoding, JSON)
//! - Wiring a `SlackClient` into the `PingResponder`
//! - Delegating Events API payloads to `event_handler`

use std::borrow::Cow;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use super::{event_handler, helpers};
use crate::bot::{MessageSender, PingResponder};
use crate::core::config::AppConfig;
use crate::slack::SlackClient;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded. Malformed requests
/// are answered with a 400 payload instead.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(request_id = %event.context.request_id, "API Lambda received request");

    let responder = PingResponder::new(Arc::new(SlackClient::new(
        config.slack_bot_token.clone(),
    )));

    Ok(route_request(&responder, &event.payload).await)
}

/// Validate an API Gateway payload and hand its body to the event dispatcher.
pub async fn route_request<S>(responder: &PingResponder<S>, payload: &Value) -> Value
where
    S: MessageSender + ?Sized,
{
    let body = match extract_body(payload) {
        Ok(b) => b,
        Err(response) => return response,
    };

    match serde_json::from_str::<Value>(&body) {
        Ok(json_body) => event_handler::handle_event_callback(responder, &json_body).await,
        Err(e) => {
            error!("Request body is not JSON: {}", e);
            helpers::err_response(400, &format!("Parse Error: {e}"))
        }
    }
}

// ============================================================================
// Request Validation Helpers
// ============================================================================

fn extract_body(payload: &Value) -> Result<Cow<'_, str>, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(Cow::Borrowed(body_str));
    }

    STANDARD
        .decode(body_str)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .map(Cow::Owned)
        .ok_or_else(|| {
            error!("Request body is not valid base64 UTF-8");
            helpers::err_response(400, "Invalid body encoding")
        })
}
