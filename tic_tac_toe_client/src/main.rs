mod config;
mod game_app;
mod game_service;

use crate::config::Config;
use crate::game_app::GameApp;
use crate::game_service::GameService;

use anyhow::{anyhow, Result};
use tic_tac_toe_core::JsonFileNameCache;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    info!(
        "🚀 Starting Tic-Tac-Toe, name cache at {}",
        config.name_cache_path.display()
    );

    let service = GameService::new(JsonFileNameCache::new(&config.name_cache_path));
    let app = GameApp::new(service);

    eframe::run_native(
        "Tic-Tac-Toe",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("UI exited with an error: {e}"))
}
