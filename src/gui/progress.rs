// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::data::ResultRow;
use crate::progress::Progress;

/// Shared between the UI thread (reads every frame) and the search worker.
#[derive(Clone, Debug, Default)]
pub struct ScrapeStatus {
    pub message: String,
    pub done: usize,
    pub total: usize,
}

impl ScrapeStatus {
    pub fn idle() -> Self {
        Self { message: s!("Idle"), ..Default::default() }
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 { 0.0 } else { (self.done as f32 / self.total as f32).min(1.0) }
    }
}

pub struct GuiProgress {
    status: Arc<Mutex<ScrapeStatus>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<ScrapeStatus>>, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }

    fn update(&self, f: impl FnOnce(&mut ScrapeStatus)) {
        if let Ok(mut s) = self.status.lock() {
            f(&mut s);
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.update(|s| {
            s.total = total;
            s.done = 0;
        });
    }
    fn log(&mut self, msg: &str) {
        self.update(|s| s.message = s!(msg));
    }
    fn item_done(&mut self, _row: &ResultRow) {
        self.update(|s| s.done += 1);
    }
    fn item_failed(&mut self, name: &str, reason: &str) {
        self.update(|s| s.message = format!("Error processing {name}: {reason}"));
    }
    fn finish(&mut self) {
        self.update(|s| s.total = s.total.max(s.done));
    }
}
