// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use eframe::egui;
use tracing::{info, warn};

use crate::{
    core::net::HttpFetcher,
    gui::{app::App, progress::GuiProgress},
};

/// Validate the form, clear the session and start the walk on a worker.
/// The outcome arrives through `app.pending`.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running { return; }

    let request = match app.state.options.search.to_request() {
        Ok(r) => r,
        Err(e) => {
            warn!("Scrape: rejected form: {e}");
            app.set_status(e.to_string());
            return;
        }
    };

    info!("Scrape: Begin kind={:?} term={:?} cap={}", request.kind(), request.term(), request.result_cap());

    app.session.clear();
    if let Ok(mut s) = app.status.lock() {
        s.done = 0;
        s.total = request.result_cap();
        s.message = s!("Starting...");
    }
    app.running = true;

    let (tx, rx) = mpsc::channel();
    app.pending = Some(rx);

    let settings = app.settings.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();

    // → This is where the scrape happens ←
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, ctx.clone());
        let result = HttpFetcher::new(&settings)
            .and_then(|fetcher| crate::scrape::search(&fetcher, &settings, &request, Some(&mut prog)));
        let _ = tx.send((request, result));
        ctx.request_repaint();
    });
}
