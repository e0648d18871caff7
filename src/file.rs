// src/file.rs
//
// Export: rows → bytes (pure), then bytes → disk (the "download").

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, WriterBuilder};
use rust_xlsxwriter::{Format, Workbook};

use crate::config::consts::EXPORT_PREFIX;
use crate::config::options::ExportFormat;
use crate::core::sanitize::{sanitize_file_stem, strip_line_breaks};
use crate::data::{ResultRow, HEADERS};
use crate::error::{Result, ScrapeError};

const SHEET_NAME: &str = "Results";

/// A finished export, ready to hand to a save dialog or write to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPayload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

pub fn export(rows: &[ResultRow], term: &str, format: ExportFormat) -> Result<ExportPayload> {
    let bytes = match format.delimiter() {
        Some(delim) => to_delimited(rows, delim)?,
        None => to_xlsx(rows)?,
    };
    Ok(ExportPayload {
        file_name: export_file_name(term, format),
        content_type: format.content_type(),
        bytes,
    })
}

/// Header row + one record per row. Non-numeric fields are quoted and
/// line breaks inside values become spaces.
pub fn to_delimited(rows: &[ResultRow], delimiter: u8) -> Result<Vec<u8>> {
    let mut w = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(Vec::new());

    w.write_record(HEADERS)?;
    for row in rows {
        w.write_record(row.fields().iter().map(|f| strip_line_breaks(f)))?;
    }

    w.into_inner().map_err(|e| ScrapeError::Io(e.into_error()))
}

/// Single "Results" worksheet with a bold header row.
pub fn to_xlsx(rows: &[ResultRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (c, h) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, c as u16, *h, &bold)?;
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.fields().iter().enumerate() {
            sheet.write_string(r as u32 + 1, c as u16, *value)?;
        }
    }
    sheet.autofit();

    Ok(workbook.save_to_buffer()?)
}

/// `sunbiz_results_{term}.{ext}`
pub fn export_file_name(term: &str, format: ExportFormat) -> String {
    format!("{EXPORT_PREFIX}{}.{}", sanitize_file_stem(term), format.ext())
}

/// Write `payload` into `dir` (created if needed). Returns the file path.
pub fn write_export(dir: &Path, payload: &ExportPayload) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(&payload.file_name);
    fs::write(&path, &payload.bytes)?;
    Ok(path)
}

/// Resolve a user-supplied `-o` value: empty → default name in the current
/// directory; an existing dir or a trailing separator → default name inside it;
/// anything else is taken as the file path.
pub fn resolve_out_path(user_o: Option<&str>, default_file_name: &str) -> Result<PathBuf> {
    let user_o = user_o.map(str::trim).unwrap_or("");
    if user_o.is_empty() {
        return Ok(PathBuf::from(default_file_name));
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_file_name))
    } else {
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_sanitized_term() {
        assert_eq!(export_file_name("Acme Corp", ExportFormat::Csv), "sunbiz_results_Acme_Corp.csv");
        assert_eq!(export_file_name("", ExportFormat::Xlsx), "sunbiz_results_results.xlsx");
    }

    #[test]
    fn empty_rows_still_have_header() {
        let bytes = to_delimited(&[], b',').unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("\"Business Name\",\"Status\""));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn line_breaks_are_flattened() {
        let row = ResultRow { address: s!("123 Main St\r\nSuite 4"), ..Default::default() };
        let text = String::from_utf8(to_delimited(&[row], b'\t').unwrap()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("123 Main St  Suite 4"));
    }

    #[test]
    fn default_out_path_is_the_file_name() {
        assert_eq!(resolve_out_path(None, "a.csv").unwrap(), PathBuf::from("a.csv"));
        assert_eq!(resolve_out_path(Some("  "), "a.csv").unwrap(), PathBuf::from("a.csv"));
    }
}
