use super::response::{interpret_add_response, interpret_verify_response};
use async_trait::async_trait;
use nextdns_allow_application::ports::AllowlistApi;
use nextdns_allow_domain::{
    AllowlistError, AllowlistResult, ConnectionError, Credentials, Domain, DomainError,
};
use reqwest::Url;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};

const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Serialize)]
struct AllowlistEntry<'a> {
    id: &'a str,
    active: bool,
}

/// reqwest-backed [`AllowlistApi`] for the NextDNS API.
#[derive(Clone)]
pub struct NextDnsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NextDnsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            DomainError::ConfigError(format!("Invalid API base URL {}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::ConfigError(format!(
                "API base URL {} cannot carry a path",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .user_agent(concat!("nextdns-allow/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/profiles/{profile_id}[/extra...]`, each segment percent-encoded.
    fn profile_url(&self, profile_id: &str, extra: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("profiles")
                .push(profile_id)
                .extend(extra);
        }
        url
    }
}

#[async_trait]
impl AllowlistApi for NextDnsClient {
    #[instrument(skip(self, credentials), fields(profile_id = %credentials.profile_id))]
    async fn add_domain(&self, domain: &Domain, credentials: &Credentials) -> AllowlistResult {
        if !credentials.is_complete() {
            return Err(AllowlistError::MissingCredentials);
        }

        let url = self.profile_url(&credentials.profile_id, &["allowlist"]);
        debug!(url = %url, domain = %domain, "Sending allowlist request");

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &credentials.api_key)
            .json(&AllowlistEntry {
                id: domain.as_str(),
                active: true,
            })
            .send()
            .await
            .map_err(|e| AllowlistError::Transport(e.to_string()))?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(e) => {
                debug!(
                    status = status.as_u16(),
                    error = %e,
                    "Failed to read allowlist response body"
                );
                Vec::new()
            }
        };

        debug!(
            status = status.as_u16(),
            body_len = body.len(),
            "Allowlist response received"
        );

        interpret_add_response(status, &body)
    }

    #[instrument(skip(self, credentials), fields(profile_id = %credentials.profile_id))]
    async fn verify_profile(&self, credentials: &Credentials) -> Result<(), ConnectionError> {
        if !credentials.is_complete() {
            return Err(ConnectionError::MissingCredentials);
        }

        let url = self.profile_url(&credentials.profile_id, &[]);
        debug!(url = %url, "Verifying profile access");

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &credentials.api_key)
            .send()
            .await
            .map_err(|e| ConnectionError::Transport(e.to_string()))?;

        interpret_verify_response(response.status())
    }
}
