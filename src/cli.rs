// src/cli.rs
use std::{fs, path::PathBuf};

use clap::{ArgGroup, Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::config::consts::{DEFAULT_RESULTS, MAX_RESULTS, MIN_RESULTS};
use crate::config::options::{ExportFormat, SearchKind, SearchRequest};
use crate::config::Settings;
use crate::core::net::HttpFetcher;
use crate::data::ResultRow;
use crate::progress::Progress;
use crate::session::Session;
use crate::{file, log, scrape};

#[derive(Parser, Debug)]
#[command(name = "sunbiz_scrape")]
#[command(about = "Search the Florida business registry (Sunbiz) and export the matches")]
#[command(version)]
#[command(group(ArgGroup::new("query").required(true).args(["name", "doc"])))]
pub struct Cli {
    /// Search by business name
    #[arg(long, value_name = "TERM")]
    pub name: Option<String>,

    /// Search by document number
    #[arg(long, value_name = "NUMBER")]
    pub doc: Option<String>,

    /// Maximum number of businesses to collect (1-50)
    #[arg(short = 'n', long, default_value_t = DEFAULT_RESULTS, value_parser = parse_cap)]
    pub max_results: usize,

    /// Export format
    #[arg(short = 'f', long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Output file or directory (defaults to sunbiz_results_<term>.<ext> here)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Settings file (TOML); sunbiz_scrape.toml is read if present
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Csv,
    Tsv,
    Xlsx,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
            FormatArg::Xlsx => ExportFormat::Xlsx,
        }
    }
}

impl Cli {
    fn query(&self) -> (SearchKind, &str) {
        match (&self.name, &self.doc) {
            (_, Some(doc)) => (SearchKind::DocumentNumber, doc.as_str()),
            (Some(name), None) => (SearchKind::BusinessName, name.as_str()),
            (None, None) => (SearchKind::BusinessName, ""),
        }
    }
}

fn parse_cap(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (MIN_RESULTS..=MAX_RESULTS).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between {MIN_RESULTS} and {MAX_RESULTS}"))
    }
}

/// Search, export, and return the path written.
pub fn run(args: Cli) -> Result<PathBuf> {
    let settings = Settings::load(args.config.as_deref())?;
    log::init_stderr(log::level_for_verbosity(&settings.log_level, args.verbose));

    let (kind, term) = args.query();
    let request = SearchRequest::new(kind, term, args.max_results)?;
    let fetcher = HttpFetcher::new(&settings)?;

    let mut session = Session::new();
    let mut progress = CliProgress::new();
    let rows = scrape::search(&fetcher, &settings, &request, Some(&mut progress))?;
    session.replace(request, rows);

    let payload = file::export(session.rows(), session.term(), args.format.into())?;
    let path = file::resolve_out_path(args.out.as_deref(), &payload.file_name)?;
    fs::write(&path, &payload.bytes)
        .wrap_err_with(|| format!("writing {}", path.display()))?;

    info!("Wrote {} rows to {}", session.len(), path.display());
    Ok(path)
}

/* ---------------- indicatif progress ---------------- */

struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("static progress template")
                .progress_chars("=>-"),
        );
        Self { bar }
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn log(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn item_done(&mut self, row: &ResultRow) {
        self.bar.inc(1);
        self.bar.set_message(row.business_name.clone());
    }

    fn item_failed(&mut self, name: &str, reason: &str) {
        self.bar.println(format!("skipped {name}: {reason}"));
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}
