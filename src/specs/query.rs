// src/specs/query.rs
//! Search entry URLs.
//!
//! `{base}/Inquiry/CorporationSearch/SearchResults/{EntityName|DocumentNumber}/{term}`
//!
//! Names are percent-encoded (space → `%20`, never `+`). Document numbers go
//! in verbatim; the registry decides whether they are valid.

use url::{form_urlencoded, Url};

use crate::config::consts::SEARCH_PATH;
use crate::config::options::{SearchKind, SearchRequest};

pub fn build_search_url(base: &str, req: &SearchRequest) -> String {
    let base = base.trim_end_matches('/');
    let term = match req.kind() {
        SearchKind::BusinessName => encode_term(req.term()),
        SearchKind::DocumentNumber => s!(req.term()),
    };
    format!("{base}{SEARCH_PATH}/{}/{term}", req.kind().path_segment())
}

/// `{first_url}/Page{n}`; only used when a "Next" link has no href.
pub fn page_url(first_url: &str, n: usize) -> String {
    format!("{}/Page{n}", first_url.trim_end_matches('/'))
}

/// Resolve an href found on a registry page. Absolute hrefs pass through.
pub fn resolve_href(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let base = Url::parse(base).ok()?;
    base.join(href).ok().map(String::from)
}

fn encode_term(term: &str) -> String {
    // form encoding turns spaces into '+'; a literal '+' is already %2B
    form_urlencoded::byte_serialize(term.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://search.sunbiz.org";

    fn req(kind: SearchKind, term: &str) -> SearchRequest {
        SearchRequest::new(kind, term, 10).unwrap()
    }

    #[test]
    fn business_name_is_percent_encoded() {
        let url = build_search_url(BASE, &req(SearchKind::BusinessName, "Acme Corp"));
        assert_eq!(
            url,
            "https://search.sunbiz.org/Inquiry/CorporationSearch/SearchResults/EntityName/Acme%20Corp"
        );
    }

    #[test]
    fn plus_and_ampersand_survive_encoding() {
        let url = build_search_url(BASE, &req(SearchKind::BusinessName, "A+B & Sons"));
        assert!(url.ends_with("/EntityName/A%2BB%20%26%20Sons"), "{url}");
    }

    #[test]
    fn document_number_is_verbatim() {
        let url = build_search_url(BASE, &req(SearchKind::DocumentNumber, "L21000123456"));
        assert_eq!(
            url,
            "https://search.sunbiz.org/Inquiry/CorporationSearch/SearchResults/DocumentNumber/L21000123456"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let a = build_search_url("https://search.sunbiz.org/", &req(SearchKind::BusinessName, "x"));
        let b = build_search_url(BASE, &req(SearchKind::BusinessName, "x"));
        assert_eq!(a, b);
    }

    #[test]
    fn page_url_appends_page_segment() {
        assert_eq!(page_url("http://h/a/b", 3), "http://h/a/b/Page3");
        assert_eq!(page_url("http://h/a/b/", 2), "http://h/a/b/Page2");
    }

    #[test]
    fn hrefs_resolve_against_base() {
        assert_eq!(
            resolve_href(BASE, "/Inquiry/CorporationSearch/SearchResultDetail?x=1").as_deref(),
            Some("https://search.sunbiz.org/Inquiry/CorporationSearch/SearchResultDetail?x=1")
        );
        assert_eq!(
            resolve_href(BASE, "http://other.org/p").as_deref(),
            Some("http://other.org/p")
        );
        assert_eq!(resolve_href(BASE, "  "), None);
    }
}
