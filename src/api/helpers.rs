//! Common helper functions for API handlers.
//!
//! Response envelopes in the shape API Gateway expects from a Lambda proxy
//! integration.

use serde_json::{Value, json};

/// Returns a 200 OK response with an empty JSON body.
#[must_use]
pub fn ok_empty() -> Value {
    json!({ "statusCode": 200, "body": "{}" })
}

/// Returns a 200 OK response with a plain-text body.
#[must_use]
pub fn ok_text(body: &str) -> Value {
    json!({ "statusCode": 200, "body": body })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}
