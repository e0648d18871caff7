// src/core/dom.rs
//
// Tree-walk helpers over a parsed document. Everything runs in document
// order so "first match" means the same thing everywhere:
// - find a text node by substring, step to its parent element
// - step to following sibling elements
// - query with an ordered fallback chain of selectors

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use super::sanitize::normalize_ws;

/// Text under these elements never shows up on screen.
const HIDDEN_TAGS: [&str; 4] = ["script", "style", "noscript", "head"];

pub struct Dom {
    html: Html,
}

impl Dom {
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Parent element of the first text node containing `needle`.
    pub fn label_parent(&self, needle: &str) -> Option<ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .find(|n| n.value().as_text().is_some_and(|t| t.contains(needle)))
            .and_then(|n| n.parent())
            .and_then(ElementRef::wrap)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.html
            .root_element()
            .descendants()
            .any(|n| n.value().as_text().is_some_and(|t| t.contains(needle)))
    }

    pub fn select<'a>(&'a self, sel: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(sel)
    }

    /// Visible text nodes, trimmed and joined by single spaces.
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        for node in self.html.root_element().descendants() {
            let Some(text) = node.value().as_text() else { continue };
            let t = text.trim();
            if t.is_empty() { continue; }

            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|a| HIDDEN_TAGS.contains(&a.value().name()));
            if hidden { continue; }

            if !out.is_empty() { out.push(' '); }
            out.push_str(t);
        }
        out
    }
}

/// Element text with whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Element text with one line per text node (blank nodes dropped).
pub fn lines_of(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn next_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

pub fn following_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.next_siblings().filter_map(ElementRef::wrap)
}

/// Nearest ancestor (excluding `el`) with the given tag name.
pub fn closest<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name().eq_ignore_ascii_case(tag))
}

/// Ordered selector candidates; the first with a non-empty match set wins.
pub struct SelectorChain {
    entries: Vec<(&'static str, Selector)>,
}

impl SelectorChain {
    pub fn new(patterns: &[&'static str]) -> Self {
        let entries = patterns
            .iter()
            .filter_map(|&p| match Selector::parse(p) {
                Ok(sel) => Some((p, sel)),
                Err(e) => {
                    warn!("Selector: dropping invalid pattern {p:?}: {e}");
                    None
                }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn first_match<'a>(&self, dom: &'a Dom) -> Option<(&'static str, Vec<ElementRef<'a>>)> {
        self.first_match_where(dom, |_| true)
    }

    /// Like `first_match`, but only elements passing `keep` count toward a match.
    pub fn first_match_where<'a, P>(&self, dom: &'a Dom, keep: P) -> Option<(&'static str, Vec<ElementRef<'a>>)>
    where
        P: Fn(&ElementRef<'a>) -> bool,
    {
        self.entries.iter().find_map(|(pattern, sel)| {
            let hits: Vec<ElementRef<'a>> = dom.html.select(sel).filter(|el| keep(el)).collect();
            if hits.is_empty() { None } else { Some((*pattern, hits)) }
        })
    }
}
