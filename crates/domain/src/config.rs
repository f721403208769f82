pub mod api;
pub mod errors;
pub mod logging;
pub mod rate_limit;
pub mod root;
pub mod storage;

pub use api::ApiConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use rate_limit::RateLimitConfig;
pub use root::{CliOverrides, Config};
pub use storage::StorageConfig;
