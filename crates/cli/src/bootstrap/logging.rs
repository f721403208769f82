use anyhow::Context;
use nextdns_allow_domain::config::LogFormat;
use nextdns_allow_domain::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs go to stderr so stdout stays reserved for command output and dispatcher JSON.
/// `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.logging.level)
            .with_context(|| format!("Invalid log level: {}", config.logging.level))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    }
    .context("Failed to initialize logging")
}
