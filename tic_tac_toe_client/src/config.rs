use anyhow::{ensure, Context, Result};
use std::env;

pub const LOG_VAR: &str = "TTT_LOG";
pub const CELL_SIZE_VAR: &str = "TTT_CELL_SIZE";
pub const TITLE_VAR: &str = "TTT_TITLE";

/// Horizontal room left on each side of the grid in the initial window.
pub const SIDE_MARGIN: f32 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub cell_size: f32,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Tic-Tac-Toe".to_string(),
            cell_size: 100.0,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = AppConfig::default();

        if let Some(title) = lookup(TITLE_VAR) {
            config.title = title;
        }
        if let Some(filter) = lookup(LOG_VAR) {
            config.log_filter = filter;
        }
        if let Some(raw) = lookup(CELL_SIZE_VAR) {
            let size: f32 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number, got {:?}", CELL_SIZE_VAR, raw))?;
            ensure!(
                size.is_finite() && size > 0.0,
                "{} must be positive, got {}",
                CELL_SIZE_VAR,
                size
            );
            config.cell_size = size;
        }

        Ok(config)
    }

    /// Width of the 3x3 grid including egui's spacing between cells.
    pub fn grid_width(&self, spacing: f32) -> f32 {
        self.cell_size * 3.0 + spacing * 2.0
    }

    /// Window size that fits the grid, the banner, scores and buttons.
    pub fn window_size(&self) -> [f32; 2] {
        let grid = self.cell_size * 3.0;
        [grid + SIDE_MARGIN * 2.0, grid + 260.0]
    }
}
