//! # Zonekeeper
//!
//! Simulated directory-integrated DNS zone manager: an HTTP API over an
//! in-memory zone store with a full audit trail.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use zonekeeper_domain::CliOverrides;

#[derive(Parser)]
#[command(name = "zonekeeper")]
#[command(version)]
#[command(about = "Simulated directory-integrated DNS zone manager")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level or filter directive (e.g. "debug", "zonekeeper=trace")
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Disable every simulated latency
    #[arg(long)]
    instant: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        log_level: cli.log_level,
        instant: cli.instant,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    tracing::info!("Zonekeeper starting");

    let state = di::build_app_state(&config);
    server::run(&config, state).await
}
