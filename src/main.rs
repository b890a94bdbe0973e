mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use app::AvocadoApp;
use config::Config;
use data::filter::FilterCriteria;
use data::loader::load_file;
use state::AppState;

const WINDOW_TITLE: &str = "Avocado Analytics: Understand Your Avocados!";

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();

    // Startup load and default selection are both fatal on failure.
    let dataset = load_file(&config.data)
        .with_context(|| format!("loading {}", config.data.display()))?;
    let criteria = FilterCriteria::initial(&dataset, &config.region, config.avocado_type.into())
        .context("default selection is not present in the dataset")?;
    let state = AppState::new(dataset, criteria);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(AvocadoApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}
