// Offline seeding step: writes the hand-authored research-paper corpus
// into the data directory before first run. The running application only
// ever reads this file.

use anyhow::Context;
use clap::Parser;
use gutcheck::app;
use gutcheck::services::papers::seed_corpus;
use gutcheck::store::RecordStore;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "seed-papers", version, about = "Seed the research-paper corpus")]
struct Cli {
    /// Directory holding the JSON record stores
    #[arg(long, env = "GUTCHECK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Overwrite an existing corpus file
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gutcheck=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(app::default_data_dir);

    let store = RecordStore::new(data_dir);
    store
        .initialize()
        .await
        .context("failed to create data directory")?;

    let written = seed_corpus(&store, cli.force)
        .await
        .context("failed to seed the paper corpus")?;

    tracing::info!("Seeded {} papers", written);

    Ok(())
}
