// src/error.rs
//
// One error type for the whole scrape → export path. Messages are the
// user-facing text: the GUI status line and the CLI print them as-is.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Server answered, but not with a 2xx.
    #[error("Error: received status code {status} from {url}")]
    Status { url: String, status: u16 },

    /// Connect/timeout/body read failure.
    #[error("Error: request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// First results page carried the registry's "no results" marker.
    #[error("No results found. Try a different search term.")]
    NoResults,

    /// First results page had no marker, but no row selector matched either.
    #[error("Could not find search results. The website structure may have changed.")]
    SelectorDrift,

    #[error("Please enter a search term.")]
    EmptyTerm,

    #[error("Maximum results must be at least 1 (got {0})")]
    InvalidCap(usize),

    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ScrapeError {
    /// Status and network failures; the walker treats these as end-of-results past page 1.
    pub fn is_transport(&self) -> bool {
        matches!(self, ScrapeError::Status { .. } | ScrapeError::Request { .. })
    }
}
