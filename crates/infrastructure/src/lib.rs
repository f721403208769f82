//! NextDNS Allow Infrastructure Layer
pub mod clock;
pub mod nextdns;
pub mod storage;

pub use clock::SystemClock;
pub use nextdns::NextDnsClient;
pub use storage::TomlCredentialStore;
