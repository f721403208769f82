mod allowlist_api;
mod clock;
mod credential_store;

pub use allowlist_api::AllowlistApi;
pub use clock::Clock;
pub use credential_store::CredentialStore;
