// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{debug, error, info};

use crate::{file, gui::app::App};

/// Session rows as TSV (with headers) onto the clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.session.is_empty() {
        app.set_status("Nothing to copy");
        debug!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    match file::to_delimited(app.session.rows(), b'\t') {
        Ok(bytes) => {
            info!("Copy: rows={}", app.session.len());
            ui_ctx.copy_text(String::from_utf8_lossy(&bytes).into_owned());
            app.set_status("Copied to clipboard");
        }
        Err(e) => {
            error!("Copy: {e}");
            app.set_status(e.to_string());
        }
    }
}
