//! Response normalization.
//!
//! Turns a [`RawResponse`] into either the parsed JSON body or an
//! [`ApiError`] built from the platform's error body.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use xendit_types::ApiError;

use crate::ClientError;
use crate::transport::RawResponse;

/// Error code used when the error body does not carry one.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

const ERROR_CODE_KEYS: &[&str] = &["error_code", "errorCode", "code"];
const ERROR_MESSAGE_KEYS: &[&str] = &["message", "error_message", "error"];

/// Fails with an [`ApiError`] unless the status is 2xx.
pub fn handle_error_response(resp: &RawResponse) -> Result<(), ApiError> {
    if resp.is_success() {
        return Ok(());
    }

    let body = serde_json::from_str::<Value>(&resp.body).ok();
    let error_code = first_string(body.as_ref(), ERROR_CODE_KEYS)
        .unwrap_or_else(|| UNKNOWN_ERROR_CODE.to_string());
    let error_message =
        first_string(body.as_ref(), ERROR_MESSAGE_KEYS).unwrap_or_else(|| fallback_message(resp));
    let errors = body.as_ref().and_then(|b| b.get("errors")).cloned();

    warn!(
        status = resp.status,
        error_code = %error_code,
        "API returned an error response"
    );

    Err(ApiError {
        http_status: resp.status,
        error_code,
        error_message,
        errors,
    })
}

/// Parses a successful body. An empty body parses as JSON `null`.
pub fn parse_body<T: DeserializeOwned>(resp: &RawResponse) -> Result<T, serde_json::Error> {
    let body = resp.body.trim();
    if body.is_empty() {
        return serde_json::from_value(Value::Null);
    }
    serde_json::from_str(body)
}

/// Normalizes then parses.
pub(crate) fn handle_response<T: DeserializeOwned>(resp: RawResponse) -> Result<T, ClientError> {
    handle_error_response(&resp)?;
    Ok(parse_body(&resp)?)
}

fn first_string(body: Option<&Value>, keys: &[&str]) -> Option<String> {
    let body = body?;
    keys.iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(String::from)
}

fn fallback_message(resp: &RawResponse) -> String {
    let body = resp.body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    StatusCode::from_u16(resp.status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown error")
        .to_string()
}
