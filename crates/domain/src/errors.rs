use thiserror::Error;

const CREDENTIALS_REQUIRED: &str = "Both API key and profile ID are required.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("{msg}", msg = CREDENTIALS_REQUIRED)]
    IncompleteCredentials,

    #[error("Credential storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Failure of an "add to allowlist" request. The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllowlistError {
    #[error("Invalid domain format")]
    InvalidDomain,

    #[error("Please wait a moment before trying again")]
    RateLimited,

    #[error("API key or profile ID not configured. Please check settings.")]
    MissingCredentials,

    #[error("Failed to read settings: {0}")]
    Storage(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Failed to communicate with NextDNS API: {0}")]
    Transport(String),
}

/// `Ok` carries the optional JSON payload returned by the API.
pub type AllowlistResult = Result<Option<serde_json::Value>, AllowlistError>;

/// Failure of a credential check against `GET /profiles/{id}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("{msg}", msg = CREDENTIALS_REQUIRED)]
    MissingCredentials,

    #[error("Authentication failed. Please check your API key.")]
    Unauthorized,

    #[error("Profile not found. Please check your profile ID.")]
    ProfileNotFound,

    #[error("Connection failed: {status} {reason}")]
    Http { status: u16, reason: String },

    #[error("Connection test failed: {0}")]
    Transport(String),
}
