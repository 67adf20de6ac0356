mod app;
mod charts;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::LaunchboardApp;
use eframe::egui;

/// Input dataset, resolved relative to the working directory.
const DATA_PATH: &str = "launch_records.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // The dashboard cannot serve anything without its dataset.
    let dataset = match data::loader::load_dataset(Path::new(DATA_PATH)) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load {DATA_PATH}: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} launches from {} sites, payload bounds {:?} kg",
        dataset.len(),
        dataset.sites.len(),
        dataset.payload_bounds
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launchboard – Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchboardApp::new(dataset)))),
    )
}
