// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use sunbiz_scrape::config::{state::GuiState, Settings};
use sunbiz_scrape::{gui, log};

fn main() {
    let settings = match Settings::load(None) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}; using defaults");
            Settings::default()
        }
    };
    if let Err(e) = log::init_file(&settings.log_level) {
        eprintln!("Logging disabled: {e}");
    }

    let gs = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gs.window_w, gs.window_h])
            .with_title("Sunbiz Business Scraper"),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, settings) {
        tracing::error!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
