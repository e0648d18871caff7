// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub search: SearchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchKind {
    #[default]
    BusinessName,
    DocumentNumber,
}

impl SearchKind {
    pub const ALL: [SearchKind; 2] = [SearchKind::BusinessName, SearchKind::DocumentNumber];

    pub fn label(&self) -> &'static str {
        match self {
            SearchKind::BusinessName => "Business Name",
            SearchKind::DocumentNumber => "Document Number",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SearchKind::BusinessName => "e.g., Acme Corporation",
            SearchKind::DocumentNumber => "e.g., L21000123456",
        }
    }

    /// Path segment under `SEARCH_PATH`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            SearchKind::BusinessName => "EntityName",
            SearchKind::DocumentNumber => "DocumentNumber",
        }
    }
}

/// What the user typed, before validation. Lives in the form; mutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub kind: SearchKind,
    pub term: String,
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            kind: SearchKind::BusinessName,
            term: s!(),
            max_results: DEFAULT_RESULTS,
        }
    }
}

impl SearchOptions {
    pub fn to_request(&self) -> Result<SearchRequest> {
        SearchRequest::new(self.kind, &self.term, self.max_results)
    }
}

/// A validated search. Immutable once built; the walker only reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    kind: SearchKind,
    term: String,
    result_cap: usize,
}

impl SearchRequest {
    pub fn new(kind: SearchKind, term: &str, result_cap: usize) -> Result<Self> {
        let term = term.trim();
        if term.is_empty() {
            return Err(ScrapeError::EmptyTerm);
        }
        if result_cap < MIN_RESULTS {
            return Err(ScrapeError::InvalidCap(result_cap));
        }
        Ok(Self { kind, term: s!(term), result_cap })
    }

    pub fn kind(&self) -> SearchKind { self.kind }
    pub fn term(&self) -> &str { &self.term }
    pub fn result_cap(&self) -> usize { self.result_cap }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Xlsx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Xlsx];

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Tsv => "TSV",
            ExportFormat::Xlsx => "Excel",
        }
    }

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Tsv => "text/tab-separated-values",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Field separator for the delimited formats; `None` for the workbook.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Xlsx => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}
