// Gutcheck - single-user gut health tracker
// Entry point: parses flags, wires up state, serves the JSON API

use anyhow::Context;
use clap::Parser;
use gutcheck::{app, config, server};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "gutcheck", version, about = "Gut health tracking service")]
struct Cli {
    /// Directory holding the JSON record stores
    #[arg(long, env = "GUTCHECK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Address to serve the API on
    #[arg(long, env = "GUTCHECK_BIND", default_value = config::DEFAULT_BIND)]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gutcheck=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(app::default_data_dir);

    tracing::info!("Starting gutcheck");

    let state = app::setup(data_dir)
        .await
        .context("failed to initialize application state")?;

    server::serve(cli.bind, state)
        .await
        .context("server exited with an error")?;

    Ok(())
}
