// src/specs/results.rs
//! Scraping *spec* for one search-results page.
//!
//! Purpose:
//! - Pull the candidate business links (name, detail URL, status) out of a
//!   results page, in document order.
//! - Find the "Next" affordance, if any.
//! - Notice the registry's explicit "no results" marker so the walker can
//!   tell an empty search apart from markup that no longer matches.
//!
//! Selector precedence (first selector with any match wins):
//! - rows: `ROW_SELECTORS`
//! - next: `NEXT_SELECTORS`, restricted to anchors whose text contains "Next"
//!
//! Non-Responsibilities:
//! - **No fetching, no paging decisions, no caps.** See `scrape`.

use std::sync::LazyLock;

use scraper::Selector;
use tracing::debug;

use crate::core::dom::{closest, text_of, Dom, SelectorChain};
use crate::specs::query::resolve_href;

pub const ROW_SELECTORS: &[&str] = &[
    "a.entity-name",
    "table.search-results-table a",
    "div.searchResultsList a",
    "tr.searchResultsTable a",
    "table tr td:first-child a",
    "table a[href*='SearchResultDetail']",
];

pub const NEXT_SELECTORS: &[&str] = &["a.navigationLink", "a[href*='Page']", "a"];

const NO_RESULTS_MARKERS: [&str; 2] = ["No Results Found", "No records found"];

static ROWS: LazyLock<SelectorChain> = LazyLock::new(|| SelectorChain::new(ROW_SELECTORS));
static NEXT: LazyLock<SelectorChain> = LazyLock::new(|| SelectorChain::new(NEXT_SELECTORS));
static TD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("static selector"));

/// One candidate row on a results page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultLink {
    pub name: String,
    pub detail_url: String,
    pub status: String,
}

/// Where the "Next" affordance points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NextPage {
    Link(String),
    /// Present, but without a usable href.
    Unlinked,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsPage {
    pub links: Vec<ResultLink>,
    pub next: Option<NextPage>,
    pub matched_selector: Option<&'static str>,
    pub no_results_marker: bool,
}

/// Parse a results page. Relative hrefs resolve against `base`.
pub fn parse(html: &str, base: &str) -> ResultsPage {
    let dom = Dom::parse(html);

    let no_results_marker = NO_RESULTS_MARKERS.iter().any(|m| dom.contains_text(m));

    let (matched_selector, links) = match ROWS.first_match(&dom) {
        Some((pattern, anchors)) => {
            debug!("Results: {} anchors via {pattern:?}", anchors.len());
            let links = anchors
                .into_iter()
                .filter_map(|a| {
                    let href = a.value().attr("href")?;
                    let detail_url = resolve_href(base, href)?;
                    let status = closest(a, "tr")
                        .and_then(|tr| tr.select(&TD).nth(1))
                        .map(text_of)
                        .unwrap_or_default();
                    Some(ResultLink { name: text_of(a), detail_url, status })
                })
                .collect();
            (Some(pattern), links)
        }
        None => (None, Vec::new()),
    };

    let next = NEXT
        .first_match_where(&dom, |a| text_of(*a).contains("Next"))
        .and_then(|(_, hits)| hits.into_iter().next())
        .map(|a| match a.value().attr("href").and_then(|h| resolve_href(base, h)) {
            Some(url) => NextPage::Link(url),
            None => NextPage::Unlinked,
        });

    ResultsPage { links, next, matched_selector, no_results_marker }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://search.sunbiz.org";

    #[test]
    fn every_row_selector_parses() {
        assert_eq!(ROWS.len(), ROW_SELECTORS.len());
        assert_eq!(NEXT.len(), NEXT_SELECTORS.len());
    }

    #[test]
    fn rows_with_status_and_next_link() {
        let html = r#"
            <table class="search-results-table">
              <tr><td><a href="/Inquiry/Detail/1">  ACME   LLC </a></td><td>Active</td></tr>
              <tr><td><a href="/Inquiry/Detail/2">ACME HOLDINGS INC</a></td><td>INACT</td></tr>
            </table>
            <div><a class="navigationLink" href="/Inquiry/Search/Page2">Next List</a></div>
        "#;
        let page = parse(html, BASE);
        assert_eq!(page.matched_selector, Some("table.search-results-table a"));
        assert_eq!(page.links.len(), 2);
        assert_eq!(page.links[0].name, "ACME LLC");
        assert_eq!(page.links[0].status, "Active");
        assert_eq!(page.links[0].detail_url, "https://search.sunbiz.org/Inquiry/Detail/1");
        assert_eq!(page.links[1].status, "INACT");
        assert_eq!(
            page.next,
            Some(NextPage::Link(s!("https://search.sunbiz.org/Inquiry/Search/Page2")))
        );
        assert!(!page.no_results_marker);
    }

    #[test]
    fn earlier_selector_wins_over_later() {
        let html = r#"
            <a class="entity-name" href="/d/1">FIRST</a>
            <table><tr><td><a href="/d/2">SECOND</a></td></tr></table>
        "#;
        let page = parse(html, BASE);
        assert_eq!(page.matched_selector, Some("a.entity-name"));
        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].name, "FIRST");
        assert_eq!(page.links[0].status, "");
    }

    #[test]
    fn anchors_without_href_are_skipped() {
        let html = r#"<a class="entity-name">NO LINK</a><a class="entity-name" href="/d/9">OK</a>"#;
        let page = parse(html, BASE);
        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].name, "OK");
    }

    #[test]
    fn next_without_href_is_unlinked() {
        let html = r#"<a class="entity-name" href="/d/1">A</a><a class="navigationLink">Next List</a>"#;
        assert_eq!(parse(html, BASE).next, Some(NextPage::Unlinked));
    }

    #[test]
    fn no_results_marker_detected() {
        let page = parse("<html><body><p>No Results Found</p></body></html>", BASE);
        assert!(page.links.is_empty());
        assert!(page.no_results_marker);
        assert_eq!(page.matched_selector, None);
        assert_eq!(page.next, None);
    }
}
