// src/gui/components/search_bar.rs
//
// Search form + progress line. Edits `state.options.search` in place;
// the scrape action validates it.

use eframe::egui;
use tracing::debug;

use crate::{
    config::{
        consts::{MAX_RESULTS, MIN_RESULTS},
        options::SearchKind,
    },
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut start = false;
    let running = app.running;

    {
        let search = &mut app.state.options.search;

        ui.horizontal(|ui| {
            let before = search.kind;
            egui::ComboBox::from_label("Search by")
                .selected_text(search.kind.label())
                .show_ui(ui, |ui| {
                    for kind in SearchKind::ALL {
                        ui.selectable_value(&mut search.kind, kind, kind.label());
                    }
                });
            if search.kind != before {
                debug!("UI: search kind → {:?}", search.kind);
            }

            let resp = ui.add_enabled(
                !running,
                egui::TextEdit::singleline(&mut search.term)
                    .hint_text(search.kind.placeholder())
                    .desired_width(280.0),
            );
            if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                start = true;
            }

            ui.add_enabled(
                !running,
                egui::Slider::new(&mut search.max_results, MIN_RESULTS..=MAX_RESULTS).text("Max results"),
            );

            if ui.add_enabled(!running, egui::Button::new("Start Scraping")).clicked() {
                start = true;
            }
        });
    }

    if start && !running {
        actions::scrape(app, ui.ctx());
    }

    let status = app.status_snapshot();
    ui.horizontal(|ui| {
        if app.running {
            ui.add(
                egui::ProgressBar::new(status.fraction())
                    .desired_width(220.0)
                    .text(format!("{}/{}", status.done, status.total)),
            );
            ui.spinner();
        }
        ui.label(&status.message);
    });
}
