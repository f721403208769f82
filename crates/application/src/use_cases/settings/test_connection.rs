use nextdns_allow_domain::{ConnectionError, Credentials};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::AllowlistApi;

pub struct TestConnectionUseCase {
    api: Arc<dyn AllowlistApi>,
}

impl TestConnectionUseCase {
    pub fn new(api: Arc<dyn AllowlistApi>) -> Self {
        Self { api }
    }

    #[instrument(skip(self, api_key))]
    pub async fn execute(&self, api_key: &str, profile_id: &str) -> Result<(), ConnectionError> {
        let credentials = Credentials::from_input(api_key, profile_id);
        if !credentials.is_complete() {
            return Err(ConnectionError::MissingCredentials);
        }

        match self.api.verify_profile(&credentials).await {
            Ok(()) => {
                info!(profile_id = %credentials.profile_id, "Connection test succeeded");
                Ok(())
            }
            Err(e) => {
                warn!(profile_id = %credentials.profile_id, error = %e, "Connection test failed");
                Err(e)
            }
        }
    }
}
