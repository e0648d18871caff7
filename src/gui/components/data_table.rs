// src/gui/components/data_table.rs
//
// Draws the session rows. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{data::HEADERS, gui::app::App};

/// Initial widths, in `HEADERS` order.
const COLUMN_WIDTHS: [f32; 10] = [220.0, 70.0, 120.0, 100.0, 160.0, 110.0, 180.0, 260.0, 90.0, 240.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let rows = app.session.rows();

    if rows.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No results yet").weak());
        });
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("results_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for w in COLUMN_WIDTHS {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in HEADERS {
                        header.col(|ui| {
                            ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let Some(data) = rows.get(row.index()) else { return };
                        for cell in data.fields() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.label(cell).on_hover_text(cell);
                                });
                            });
                        }
                    });
                });
        });
}
