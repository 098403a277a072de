mod app;
mod color;
mod data;
mod state;
mod ui;

use app::LaunchboardApp;
use eframe::egui;
use state::AppState;

/// Dataset bundled into the binary; File → Open replaces it at runtime.
const BUNDLED_DATASET: &str = include_str!("../assets/launches.csv");

fn main() -> eframe::Result {
    env_logger::init();

    let state = match data::loader::load_csv(BUNDLED_DATASET) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} bundled launch records from {} sites",
                dataset.len(),
                dataset.sites.len()
            );
            AppState::new(dataset)
        }
        Err(e) => {
            log::error!("Failed to parse bundled dataset: {e:#}");
            let mut state = AppState::default();
            state.status_message = Some(format!("Error: {e:#}"));
            state
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launchboard – Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchboardApp::new(state)))),
    )
}
