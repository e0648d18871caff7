// src/gui/actions/export.rs
use std::path::PathBuf;

use tracing::{error, info};

use crate::{file, gui::app::App};

/// Build the chosen format from the session and write it into the output dir.
pub fn export(app: &mut App) {
    if app.session.is_empty() {
        app.set_status("Nothing to export");
        return;
    }

    let dir_text = app.state.gui.out_dir_text.trim();
    let dir = if dir_text.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(file::normalize_separators(dir_text))
    };
    app.state.options.export.out_dir = dir.clone();
    let format = app.state.options.export.format;

    let written = file::export(app.session.rows(), app.session.term(), format)
        .and_then(|payload| file::write_export(&dir, &payload));

    match written {
        Ok(path) => {
            info!("Export: {:?} rows={} → {}", format, app.session.len(), path.display());
            app.set_status(format!("Saved {}", path.display()));
        }
        Err(e) => {
            error!("Export: {:?} failed: {e}", format);
            app.set_status(e.to_string());
        }
    }
}
