use serde::{Deserialize, Serialize};
use std::fmt;

/// NextDNS API key and profile id. Both are required for any API call.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    pub profile_id: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, profile_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            profile_id: profile_id.into(),
        }
    }

    /// Builds credentials from user input, trimming surrounding whitespace.
    pub fn from_input(api_key: &str, profile_id: &str) -> Self {
        Self::new(api_key.trim(), profile_id.trim())
    }

    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.profile_id.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "<empty>"
        } else {
            "<redacted>"
        };
        f.debug_struct("Credentials")
            .field("api_key", &api_key)
            .field("profile_id", &self.profile_id)
            .finish()
    }
}
