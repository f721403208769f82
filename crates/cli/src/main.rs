use clap::{Parser, Subcommand};
use nextdns_allow_domain::CliOverrides;
use tracing::debug;

mod bootstrap;
mod commands;
mod di;
mod page;

#[derive(Parser)]
#[command(name = "nextdns-allow")]
#[command(version)]
#[command(about = "Add the domain of a page to a NextDNS profile allowlist")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Credentials file path
    #[arg(long, value_name = "FILE", global = true)]
    credentials: Option<String>,

    /// NextDNS API base URL
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add the domain of a URL (or a bare hostname) to the allowlist
    Add {
        /// Page URL or hostname, e.g. https://www.example.com/page
        target: String,

        /// Print the raw dispatcher response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Store the API key and profile ID
    Configure {
        #[arg(long)]
        api_key: String,

        #[arg(long)]
        profile_id: String,
    },

    /// Check that the credentials can reach the profile
    Test {
        /// API key to test instead of the stored one
        #[arg(long)]
        api_key: Option<String>,

        /// Profile ID to test instead of the stored one
        #[arg(long)]
        profile_id: Option<String>,
    },

    /// Show whether credentials are configured
    Status,

    /// Answer JSON dispatcher messages, one per line, from stdin
    Dispatch,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        base_url: cli.base_url.clone(),
        credentials_path: cli.credentials.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    debug!("Starting nextdns-allow v{}", env!("CARGO_PKG_VERSION"));

    let adapters = di::Adapters::new(&config)?;
    let use_cases = di::UseCases::new(&adapters);

    match cli.command {
        Command::Add { target, json } => commands::add::run(&use_cases, &target, json).await,
        Command::Configure {
            api_key,
            profile_id,
        } => commands::configure::run(&use_cases, &api_key, &profile_id).await,
        Command::Test {
            api_key,
            profile_id,
        } => commands::test::run(&use_cases, &adapters, api_key, profile_id).await,
        Command::Status => commands::status::run(&use_cases).await,
        Command::Dispatch => commands::dispatch::run(&use_cases).await,
    }
}
