// src/specs/detail.rs
//! Scraping *spec* for a business detail page.
//!
//! The detail page has no stable ids, so fields are anchored on their
//! visible labels: find the first text node containing the label, step to
//! its parent element, then read the element(s) after it.
//!
//! Fields:
//! - `Document Number`, `FEI/EIN Number`, `Date Filed`: next sibling element.
//! - `Principal Address`: following siblings up to "Mailing Address" /
//!   "Registered Agent", joined with ", ".
//! - Owner: officer tables → authorized-person tables → registered agent.
//! - Email: first plausible address in the visible text, registry and
//!   placeholder domains excluded.
//!
//! `extract` is pure and never fails; anything not found stays empty.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::core::dom::{following_elements, lines_of, next_element, text_of, Dom};
use crate::core::sanitize::first_line;
use crate::data::DetailFields;

const OFFICER_KEYWORDS: [&str; 3] = ["president", "ceo", "chief executive"];
const AUTHORIZED_KEYWORDS: [&str; 2] = ["manager", "managing member"];

const EMAIL_DENY_SUFFIXES: [&str; 3] = ["@sunbiz.org", "@dos.myflorida.com", "@leg.state.fl.us"];
const EMAIL_DENY_CONTAINS: [&str; 2] = ["example.com", "domain.com"];

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+").expect("static regex"));
static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("static selector"));
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static selector"));
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("static selector"));

pub fn extract(html: &str) -> DetailFields {
    let dom = Dom::parse(html);
    let (owner_name, owner_title) = owner(&dom).unwrap_or_default();

    DetailFields {
        document_number: labeled_value(&dom, "Document Number"),
        fei_number: labeled_value(&dom, "FEI/EIN Number"),
        filing_date: labeled_value(&dom, "Date Filed"),
        address: principal_address(&dom),
        owner_name,
        owner_title,
        owner_email: email(&dom),
    }
}

fn labeled_value(dom: &Dom, label: &str) -> String {
    dom.label_parent(label)
        .and_then(next_element)
        .map(text_of)
        .unwrap_or_default()
}

fn principal_address(dom: &Dom) -> String {
    let Some(label) = dom.label_parent("Principal Address") else { return s!() };

    let parts: Vec<String> = following_elements(label)
        .map(text_of)
        .take_while(|t| !t.contains("Mailing Address") && !t.contains("Registered Agent"))
        .filter(|t| !t.is_empty())
        .collect();

    parts.join(", ").trim_end_matches([',', ' ']).to_string()
}

/* ---------------- owner priority search ---------------- */

fn owner(dom: &Dom) -> Option<(String, String)> {
    let has_officers = dom.contains_text("Officer/Director");
    let has_authorized = dom.contains_text("Authorized Person");

    if has_officers || !has_authorized {
        if let Some(hit) = table_owner(dom, &OFFICER_KEYWORDS) {
            return Some(hit);
        }
    }
    if has_authorized {
        if let Some(hit) = table_owner(dom, &AUTHORIZED_KEYWORDS) {
            return Some(hit);
        }
    }
    registered_agent(dom)
}

/// Per table: first keyword row by title cell, else the table's first row.
fn table_owner(dom: &Dom, keywords: &[&str]) -> Option<(String, String)> {
    dom.select(&TABLE).find_map(|table| {
        let rows: Vec<ElementRef<'_>> = table.select(&TR).collect();

        let keyword_row = rows.iter().find_map(|row| {
            let (name, title) = name_title(*row)?;
            let lc = title.to_lowercase();
            keywords.iter().any(|k| lc.contains(*k)).then_some((name, title))
        });

        keyword_row.or_else(|| rows.first().and_then(|row| name_title(*row)))
    })
}

fn name_title(row: ElementRef<'_>) -> Option<(String, String)> {
    let mut cells = row.select(&TD);
    let name = text_of(cells.next()?);
    let title = text_of(cells.next()?);
    Some((name, title))
}

fn registered_agent(dom: &Dom) -> Option<(String, String)> {
    let label = dom.label_parent("Registered Agent")?;

    following_elements(label)
        .map(|el| (text_of(el), el))
        .take_while(|(t, _)| !t.contains("Officer/Director") && !t.contains("Authorized Person"))
        .find(|(t, _)| !t.is_empty() && !t.contains("Name & Address"))
        .and_then(|(_, el)| first_line(&lines_of(el)))
        .map(|name| (name, s!("Registered Agent")))
}

/* ---------------- email ---------------- */

fn email(dom: &Dom) -> String {
    let text = dom.visible_text();
    EMAIL
        .find_iter(&text)
        .map(|m| m.as_str().trim_end_matches('.'))
        .find(|e| is_plausible_email(e))
        .map(String::from)
        .unwrap_or_default()
}

fn is_plausible_email(e: &str) -> bool {
    let lc = e.to_ascii_lowercase();
    !EMAIL_DENY_SUFFIXES.iter().any(|s| lc.ends_with(*s))
        && !EMAIL_DENY_CONTAINS.iter().any(|s| lc.contains(*s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn president_beats_earlier_officer() {
        let html = r#"<div>Officer/Director Detail</div>
            <table>
              <tr><td>Jane Doe</td><td>Secretary</td></tr>
              <tr><td>John Smith</td><td>President</td></tr>
            </table>"#;
        let f = extract(html);
        assert_eq!(f.owner_name, "John Smith");
        assert_eq!(f.owner_title, "President");
    }

    #[test]
    fn first_row_when_no_keyword() {
        let html = r#"<table>
              <tr><td>Jane Doe</td><td>Secretary</td></tr>
              <tr><td>Bob Roe</td><td>Treasurer</td></tr>
            </table>"#;
        let f = extract(html);
        assert_eq!((f.owner_name.as_str(), f.owner_title.as_str()), ("Jane Doe", "Secretary"));
    }

    #[test]
    fn email_filter_skips_registry_domains() {
        let html = "<p>Questions: info@dos.myflorida.com or contact@acme.com.</p>";
        assert_eq!(extract(html).owner_email, "contact@acme.com");
    }

    #[test]
    fn email_placeholders_are_dropped() {
        let html = "<p>you@example.com name@domain.com</p>";
        assert_eq!(extract(html).owner_email, "");
    }

    #[test]
    fn address_stops_at_mailing_section() {
        let html = r#"<div>
            <span>Principal Address</span>
            <span>123 Main St</span>
            <span>Suite 4</span>
            <span>Mailing Address: PO Box 1</span>
            <span>Ignored</span>
          </div>"#;
        assert_eq!(extract(html).address, "123 Main St, Suite 4");
    }

    #[test]
    fn plausibility_is_case_insensitive() {
        assert!(!is_plausible_email("Clerk@SUNBIZ.ORG"));
        assert!(is_plausible_email("owner@acme.com"));
    }
}
