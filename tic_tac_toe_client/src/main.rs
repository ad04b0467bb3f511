mod config;
mod game_app;
mod game_service;

use anyhow::{anyhow, Result};
use config::AppConfig;
use game_app::GameApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    info!("Starting {} with {}pt cells", config.title, config.cell_size);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size()),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(GameApp::new(&config)))),
    )
    .map_err(|e| anyhow!("UI stopped with an error: {}", e))
}
