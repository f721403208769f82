use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// TOML file holding `nextdns_api_key` and `nextdns_profile_id`
    #[serde(default = "default_credentials_path")]
    pub credentials_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            credentials_path: default_credentials_path(),
        }
    }
}

fn default_credentials_path() -> String {
    "nextdns-allow-credentials.toml".to_string()
}
