// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod data;
pub mod error;
pub mod file;
pub mod gui;
pub mod log;
pub mod progress;
pub mod scrape;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::{ExtractionResult, ResultRow};
pub use error::ScrapeError;
