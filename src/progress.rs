// src/progress.rs
use crate::data::ResultRow;

/// Lightweight progress reporting for a search walk.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the result cap (the most rows that can arrive).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One business record was extracted and kept.
    fn item_done(&mut self, _row: &ResultRow) {}

    /// One candidate was dropped (detail fetch failed).
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
