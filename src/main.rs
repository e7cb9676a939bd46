// CakeDay Application
// Main entry point

mod models;
mod services;
mod ui_egui;
mod utils;

use ui_egui::CakedayApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting CakeDay");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 720.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("CakeDay"),
        ..Default::default()
    };

    eframe::run_native(
        "CakeDay",
        options,
        Box::new(|cc| Ok(Box::new(CakedayApp::new(cc)))),
    )
}
