// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://search.sunbiz.org";
pub const SEARCH_PATH: &str = "/Inquiry/CorporationSearch/SearchResults";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
/// Sent on every request next to the User-Agent (header names lowercase).
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
    ("accept-language", "en-US,en;q=0.5"),
    ("upgrade-insecure-requests", "1"),
    ("cache-control", "max-age=0"),
];
pub const TIMEOUT_SECS: u64 = 30;

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite
pub const MIN_RESULTS: usize = 1;
pub const MAX_RESULTS: usize = 50;
pub const DEFAULT_RESULTS: usize = 10;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_PREFIX: &str = "sunbiz_results_";

// Local files
pub const SETTINGS_FILE: &str = "sunbiz_scrape.toml";
pub const ENV_PREFIX: &str = "SUNBIZ";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_LEVEL: &str = "info";
