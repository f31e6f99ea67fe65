mod commands;
mod output;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use carbonintensity_api::{Client, ClientConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "carbonintensity")]
#[command(about = "Query GB grid carbon intensity, generation mix and regional data")]
struct Cli {
    /// Output format for listings: table, markdown or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Override the API origin (also CARBON_INTENSITY_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (also CARBON_INTENSITY_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Skip TLS certificate validation. Unsafe; for local test servers only
    #[arg(long, global = true)]
    insecure: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every available operation
    Endpoints(commands::endpoints::EndpointsArgs),
    /// Print the request path for an operation without sending it
    Render(commands::render::RenderArgs),
    /// Call an operation and print the JSON payload
    Get(commands::get::GetArgs),
}

/// Environment (and `.env`) first, then command-line flags.
fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if cli.insecure {
        config = config.danger_accept_invalid_certs(true);
    }
    config
}

/// `RUST_LOG` when set. Otherwise only the CLI's own logs: failed calls are
/// already reported as error objects, so the library stays quiet.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

const DEFAULT_LOG_FILTER: &str = "carbonintensity=info,carbonintensity_api=off";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let code = match &cli.command {
        Commands::Endpoints(args) => {
            commands::endpoints::run(args, &format)?;
            ExitCode::SUCCESS
        }
        Commands::Render(args) => {
            commands::render::run(args)?;
            ExitCode::SUCCESS
        }
        Commands::Get(args) => {
            let config = build_config(&cli);
            if config.accept_invalid_certs {
                tracing::warn!("TLS certificate validation is disabled");
            }
            let client = Client::with_config(config)?;
            commands::get::run(args, &client).await?
        }
    };

    Ok(code)
}
