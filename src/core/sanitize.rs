// src/core/sanitize.rs

/// Collapse any run of whitespace (incl. NBSP, newlines) to one space; trim ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Replace CR and LF with a space so a value always stays on one line.
pub fn strip_line_breaks(s: &str) -> String {
    s.chars().map(|c| if c == '\r' || c == '\n' { ' ' } else { c }).collect()
}

/// Filename-safe stem: ASCII alphanumerics, `-` and `_` kept, whitespace → `_`.
pub fn sanitize_file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("results") } else { out }
}

/// First non-blank line of a block of text, whitespace-normalized.
pub fn first_line(s: &str) -> Option<String> {
    s.lines()
        .map(normalize_ws)
        .find(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_mixed_space() {
        assert_eq!(normalize_ws("  123 \n\t Main\u{a0}St  "), "123 Main St");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn line_breaks_become_spaces() {
        assert_eq!(strip_line_breaks("a\r\nb\nc"), "a  b c");
    }

    #[test]
    fn file_stem_variants() {
        assert_eq!(sanitize_file_stem("Acme Corporation"), "Acme_Corporation");
        assert_eq!(sanitize_file_stem("  a / b  "), "a_b");
        assert_eq!(sanitize_file_stem("L21000123456"), "L21000123456");
        assert_eq!(sanitize_file_stem("???"), "results");
    }

    #[test]
    fn first_line_skips_blank_lines() {
        assert_eq!(first_line("\n  \n JANE  DOE \n123 MAIN ST").as_deref(), Some("JANE DOE"));
        assert_eq!(first_line(" \n "), None);
    }
}
