//! formrelay server binary

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use formrelay::config::RelayConfig;

#[derive(Parser)]
#[command(name = "formrelay")]
#[command(version)]
#[command(about = "Relay website form submissions as email", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "FORMRELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind, overriding configuration
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RelayConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    formrelay::observability::init(&config.log)?;
    config.validate()?;

    formrelay::server::serve(config).await
}
