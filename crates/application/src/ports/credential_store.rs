use async_trait::async_trait;
use nextdns_allow_domain::{Credentials, DomainError};

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the stored credentials; missing values come back empty, not as errors.
    async fn load(&self) -> Result<Credentials, DomainError>;
    async fn save(&self, credentials: &Credentials) -> Result<(), DomainError>;
}
