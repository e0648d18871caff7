// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        mpsc::{Receiver, TryRecvError},
        Arc, Mutex,
    },
};

use eframe::egui;
use tracing::{error, info};

use crate::{
    config::{options::SearchRequest, state::AppState, Settings},
    data::ResultRow,
    error::Result,
    session::Session,
};

use super::progress::ScrapeStatus;

/// What the search worker sends back when it is done.
pub type SearchOutcome = (SearchRequest, Result<Vec<ResultRow>>);

pub fn run(options: eframe::NativeOptions, settings: Settings) -> std::result::Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Sunbiz Business Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default(), settings)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub settings: Settings,
    pub session: Session,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<ScrapeStatus>>,
    pub running: bool,
    pub pending: Option<Receiver<SearchOutcome>>,
}

impl App {
    pub fn new(state: AppState, settings: Settings) -> Self {
        info!("Init: base_url={} pause={}ms", settings.base_url, settings.request_pause_ms);
        Self {
            state,
            settings,
            session: Session::new(),
            status: Arc::new(Mutex::new(ScrapeStatus::idle())),
            running: false,
            pending: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    pub fn set_status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            s.message = msg.into();
        }
    }

    pub fn status_snapshot(&self) -> ScrapeStatus {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Pick up a finished search, if any.
    fn poll_search(&mut self) {
        let Some(rx) = self.pending.as_ref() else { return };
        let (request, result) = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.running = false;
                error!("Search: worker ended without a result");
                self.set_status("Search stopped unexpectedly");
                return;
            }
        };
        self.pending = None;
        self.running = false;

        match result {
            Ok(rows) => {
                let n = rows.len();
                self.session.replace(request, rows);
                self.set_status(format!("Found {n} businesses"));
            }
            Err(e) => {
                self.session.clear();
                self.set_status(e.to_string());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_search();

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            ui.add_space(4.0);
            super::components::search_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });
    }
}
