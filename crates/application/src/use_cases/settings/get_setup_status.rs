use nextdns_allow_domain::DomainError;
use std::sync::Arc;

use crate::ports::CredentialStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupStatus {
    pub configured: bool,
    pub profile_id: Option<String>,
}

/// Reports whether both credentials are present, before any request is attempted.
pub struct GetSetupStatusUseCase {
    store: Arc<dyn CredentialStore>,
}

impl GetSetupStatusUseCase {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<SetupStatus, DomainError> {
        let credentials = self.store.load().await?;
        let profile_id = Some(credentials.profile_id.clone()).filter(|id| !id.is_empty());

        Ok(SetupStatus {
            configured: credentials.is_complete(),
            profile_id,
        })
    }
}
