//! NextDNS Allow Domain Layer
pub mod config;
pub mod credentials;
pub mod dispatch;
pub mod domain_name;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use credentials::Credentials;
pub use dispatch::{DispatchRequest, DispatchResponse, ADD_TO_ALLOWLIST_ACTION};
pub use domain_name::{sanitize_domain, validate_domain, Domain};
pub use errors::{AllowlistError, AllowlistResult, ConnectionError, DomainError};
