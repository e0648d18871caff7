// src/log.rs
//
// Subscriber setup. Call sites use `tracing::{info, debug, warn, error}`.
// `RUST_LOG` wins over the configured level when set.
// Both initializers are safe to call twice; the second call is a no-op.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};
use crate::error::Result;

/// GUI: append plain lines to `.store/debug.log`. Returns the log path.
pub fn init_file(level: &str) -> Result<PathBuf> {
    let dir = Path::new(STORE_DIR);
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));

    let _ = tracing_subscriber::registry()
        .with(filter(level))
        .with(layer)
        .try_init();
    Ok(path)
}

/// CLI: compact lines on stderr so stdout stays clean.
pub fn init_stderr(level: &str) {
    let layer = fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter(level))
        .with(layer)
        .try_init();
}

/// `-v` → debug, `-vv` and up → trace; otherwise the configured level.
pub fn level_for_verbosity(configured: &str, verbose: u8) -> &str {
    match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    }
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_configured_level() {
        assert_eq!(level_for_verbosity("warn", 0), "warn");
        assert_eq!(level_for_verbosity("warn", 1), "debug");
        assert_eq!(level_for_verbosity("warn", 3), "trace");
    }
}
