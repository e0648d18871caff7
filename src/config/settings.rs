// src/config/settings.rs
//
// Runtime settings layered as: built-in defaults → optional TOML file →
// `SUNBIZ_*` environment variables. Only knobs that matter at runtime live
// here; everything else stays in `consts`.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use super::consts::*;
use crate::error::Result;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub user_agent: String,
    pub request_pause_ms: u64,
    pub timeout_secs: u64,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
            request_pause_ms: REQUEST_PAUSE_MS,
            timeout_secs: TIMEOUT_SECS,
            log_level: s!(LOG_LEVEL),
        }
    }
}

impl Settings {
    /// Load settings. With `path = None` the default `sunbiz_scrape.toml` is
    /// read if present; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();

        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(SETTINGS_FILE).required(false),
        };

        let cfg = Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("request_pause_ms", defaults.request_pause_ms as i64)?
            .set_default("timeout_secs", defaults.timeout_secs as i64)?
            .set_default("log_level", defaults.log_level)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        settings.validated()
    }

    fn validated(mut self) -> Result<Self> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::Message(format!("base_url {:?} is not a URL: {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Message(format!(
                "base_url must be http(s), got {:?}",
                self.base_url
            ))
            .into());
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Message(s!("timeout_secs must be > 0")).into());
        }
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        Ok(self)
    }
}
