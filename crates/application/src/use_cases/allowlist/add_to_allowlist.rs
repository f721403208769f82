use nextdns_allow_domain::{
    sanitize_domain, AllowlistError, AllowlistResult, DispatchRequest, DispatchResponse,
    ADD_TO_ALLOWLIST_ACTION,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{AllowlistApi, CredentialStore};
use crate::services::RateLimiter;

/// Handles "add to allowlist" requests: sanitize, throttle, call the API, answer once.
///
/// The domain is always re-sanitized here, whatever the caller already checked.
/// Requests are neither queued nor coalesced; concurrent calls only share the
/// rate limiter.
pub struct AddToAllowlistUseCase {
    api: Arc<dyn AllowlistApi>,
    credentials: Arc<dyn CredentialStore>,
    rate_limiter: Arc<RateLimiter>,
}

impl AddToAllowlistUseCase {
    pub fn new(
        api: Arc<dyn AllowlistApi>,
        credentials: Arc<dyn CredentialStore>,
        rate_limiter: Arc<RateLimiter>,
    ) -> Self {
        Self {
            api,
            credentials,
            rate_limiter,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, raw_domain: &str) -> AllowlistResult {
        let Some(domain) = sanitize_domain(raw_domain) else {
            warn!(domain = %raw_domain, "Rejected invalid domain");
            return Err(AllowlistError::InvalidDomain);
        };

        if !self.rate_limiter.try_acquire() {
            warn!(domain = %domain, "Allowlist request throttled");
            return Err(AllowlistError::RateLimited);
        }

        let credentials = self.credentials.load().await.map_err(|e| {
            warn!(error = %e, "Failed to load credentials");
            AllowlistError::Storage(e.to_string())
        })?;

        let result = self.api.add_domain(&domain, &credentials).await;

        match &result {
            Ok(data) => info!(
                domain = %domain,
                profile_id = %credentials.profile_id,
                has_payload = data.is_some(),
                "Domain added to allowlist"
            ),
            Err(e) => warn!(domain = %domain, error = %e, "Failed to add domain to allowlist"),
        }

        result
    }

    /// Answers one message of the front-end contract.
    pub async fn dispatch(&self, request: DispatchRequest) -> DispatchResponse {
        if request.action != ADD_TO_ALLOWLIST_ACTION {
            warn!(action = %request.action, "Unsupported dispatcher action");
            return DispatchResponse::failure(format!("Unsupported action: {}", request.action));
        }

        let result = match request.domain_str() {
            Some(domain) => self.execute(domain).await,
            None => Err(AllowlistError::InvalidDomain),
        };

        DispatchResponse::from(result)
    }
}
