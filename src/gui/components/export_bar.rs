// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::debug;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format + Output dir ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let before = export.format;

        ui.label("Format:");
        for fmt in ExportFormat::ALL {
            ui.selectable_value(&mut export.format, fmt, fmt.label());
        }
        if export.format != before {
            debug!("UI: Export format → {:?}", export.format);
        }

        ui.separator();

        ui.label("Output folder:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(240.0),
        );
    });

    // --- Actions (Download / Copy) ---
    let has_rows = !app.session.is_empty() && !app.running;
    let label = format!("Download {}", app.state.options.export.format.label());

    ui.horizontal(|ui| {
        if ui.add_enabled(has_rows, egui::Button::new(label)).clicked() {
            actions::export(app);
        }
        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if !app.session.is_empty() {
            ui.label(format!("{} rows", app.session.len()));
        }
    });
}
