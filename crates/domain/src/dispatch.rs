//! Request/response contract between a front end and the allowlist dispatcher.
//!
//! ```text
//! request:  {"action": "addToAllowlist", "domain": "example.com"}
//! response: {"success": true, "data": {...}}
//!           {"success": false, "error": "Invalid domain format"}
//! ```

use crate::errors::AllowlistResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ADD_TO_ALLOWLIST_ACTION: &str = "addToAllowlist";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub action: String,

    /// Kept untyped: a missing or non-string domain is answered as an invalid domain
    /// instead of being rejected while decoding.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub domain: Value,
}

impl DispatchRequest {
    pub fn add_to_allowlist(domain: impl Into<String>) -> Self {
        Self {
            action: ADD_TO_ALLOWLIST_ACTION.to_string(),
            domain: Value::String(domain.into()),
        }
    }

    pub fn domain_str(&self) -> Option<&str> {
        self.domain.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DispatchResponse {
    pub fn success(data: Option<Value>) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl From<AllowlistResult> for DispatchResponse {
    fn from(result: AllowlistResult) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}
