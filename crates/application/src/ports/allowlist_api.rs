use async_trait::async_trait;
use nextdns_allow_domain::{AllowlistResult, ConnectionError, Credentials, Domain};

/// Remote allowlist of a filtering profile.
///
/// Implementations resolve every outcome, including transport failures, into the
/// returned value; nothing is raised past this boundary.
#[async_trait]
pub trait AllowlistApi: Send + Sync {
    /// Adds `domain` as an active entry of the profile's allowlist.
    async fn add_domain(&self, domain: &Domain, credentials: &Credentials) -> AllowlistResult;

    /// Checks that the credentials can read the profile.
    async fn verify_profile(&self, credentials: &Credentials) -> Result<(), ConnectionError>;
}
