use nextdns_allow_domain::{Credentials, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::CredentialStore;

pub struct SaveCredentialsUseCase {
    store: Arc<dyn CredentialStore>,
}

impl SaveCredentialsUseCase {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, api_key))]
    pub async fn execute(
        &self,
        api_key: &str,
        profile_id: &str,
    ) -> Result<Credentials, DomainError> {
        let credentials = Credentials::from_input(api_key, profile_id);
        if !credentials.is_complete() {
            return Err(DomainError::IncompleteCredentials);
        }

        self.store.save(&credentials).await?;

        info!(profile_id = %credentials.profile_id, "Credentials saved");
        Ok(credentials)
    }
}
