//! Application state and initialization
//!
//! All services are initialized here and made available through AppState,
//! which the HTTP layer clones into every handler.

use crate::error::Result;
use crate::services::{DailyService, PapersService, WeeklyService};
use crate::store::RecordStore;
use std::path::PathBuf;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub daily: DailyService,
    pub weekly: WeeklyService,
    pub papers: PapersService,
    pub data_dir: PathBuf,
}

/// Application setup - called once on startup
pub async fn setup(data_dir: PathBuf) -> Result<AppState> {
    tracing::info!("Initializing application, data directory: {:?}", data_dir);

    let store = RecordStore::new(data_dir.clone());
    store.initialize().await?;

    let state = AppState {
        daily: DailyService::new(store.clone()),
        weekly: WeeklyService::new(store.clone()),
        papers: PapersService::new(store),
        data_dir,
    };

    tracing::info!("Application initialized successfully");

    Ok(state)
}

/// Default per-user data directory (`~/.local/share/gutcheck` on Linux)
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gutcheck")
}
