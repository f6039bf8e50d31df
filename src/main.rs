// src/main.rs
use anyhow::Context;
use clap::Parser;
use covid_stats::{
    api::{ApiServer, AppState},
    config,
    utils::setup_logging,
};
use log::{error, info};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "covid-stats", about = "COVID-19 statistics API backed by a Redis cache")]
struct Args {
    /// Port to listen on (overrides SERVER_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Extra env file loaded before the process environment is read
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.env_file {
        dotenv::from_path(path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?;
    }

    let app_config = config::load_config()?;
    setup_logging(&app_config).context("Failed to initialize logging")?;
    info!("Starting covid-stats server");
    app_config.validate_and_log();

    let state = AppState::from_config(&app_config).await.map_err(|e| {
        error!("Failed to initialize services: {}", e);
        e
    })?;

    let port = args.port.unwrap_or(app_config.server_port);
    ApiServer::new(port, state).start().await?;
    Ok(())
}
