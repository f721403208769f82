use nextdns_allow_application::ports::{AllowlistApi, Clock, CredentialStore};
use nextdns_allow_application::services::RateLimiter;
use nextdns_allow_domain::Config;
use nextdns_allow_infrastructure::{NextDnsClient, SystemClock, TomlCredentialStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct Adapters {
    pub api: Arc<dyn AllowlistApi>,
    pub credentials: Arc<dyn CredentialStore>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl Adapters {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let api = NextDnsClient::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )?;
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        debug!(
            base_url = %api.base_url(),
            credentials_path = %config.storage.credentials_path,
            min_interval_ms = config.rate_limit.min_interval_ms,
            "Adapters initialized"
        );

        Ok(Self {
            api: Arc::new(api),
            credentials: Arc::new(TomlCredentialStore::new(&config.storage.credentials_path)),
            rate_limiter: Arc::new(RateLimiter::new(
                clock,
                Duration::from_millis(config.rate_limit.min_interval_ms),
            )),
        })
    }
}
