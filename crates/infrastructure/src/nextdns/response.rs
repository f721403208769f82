use nextdns_allow_domain::{AllowlistError, AllowlistResult, ConnectionError};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

/// Maps an allowlist response to the result handed back to the dispatcher.
///
/// An unreadable body on a 2xx is still a success, just without payload.
pub(crate) fn interpret_add_response(status: StatusCode, body: &[u8]) -> AllowlistResult {
    if status.is_success() {
        return Ok(parse_payload(body));
    }

    Err(AllowlistError::Api {
        status: status.as_u16(),
        message: api_error_message(status, body),
    })
}

pub(crate) fn interpret_verify_response(status: StatusCode) -> Result<(), ConnectionError> {
    if status.is_success() {
        return Ok(());
    }

    Err(match status {
        StatusCode::UNAUTHORIZED => ConnectionError::Unauthorized,
        StatusCode::NOT_FOUND => ConnectionError::ProfileNotFound,
        _ => ConnectionError::Http {
            status: status.as_u16(),
            reason: reason_phrase(status).to_string(),
        },
    })
}

fn parse_payload(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(error = %e, "Ignoring malformed success body");
            None
        }
    }
}

/// Message precedence: `message`, then the first `errors[]` entry (`detail`, then
/// `code`), then `API Error: {status}`. A body that is not JSON at all gives
/// `API Error: {status} {reason}`.
fn api_error_message(status: StatusCode, body: &[u8]) -> String {
    let Ok(parsed) = serde_json::from_slice::<Value>(body) else {
        return format!("API Error: {} {}", status.as_u16(), reason_phrase(status));
    };

    non_empty_str(parsed.get("message"))
        .or_else(|| {
            let first = parsed.get("errors")?.as_array()?.first()?;
            non_empty_str(first.get("detail")).or_else(|| non_empty_str(first.get("code")))
        })
        .map(str::to_string)
        .unwrap_or_else(|| format!("API Error: {}", status.as_u16()))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown")
}
