// src/scrape.rs
//
// The results walker. One search = one sequential walk:
//
//   page N: fetch → parse → for each candidate: fetch detail → extract
//           → (HasMore(next) | Exhausted)
//
// Stops at the first of: cap reached, no rows, no "Next", a "Next" that
// points back at the current page, or a transport error past page 1.

use std::{thread, time::Duration};

use tracing::{debug, info, warn};

use crate::{
    config::{options::SearchRequest, Settings},
    core::net::Fetch,
    data::{ExtractionResult, ResultRow},
    error::{Result, ScrapeError},
    progress::Progress,
    specs::{
        detail,
        query::{build_search_url, page_url},
        results::{self, NextPage, ResultLink, ResultsPage},
    },
};

#[derive(Debug, PartialEq, Eq)]
enum PageState {
    HasMore(String),
    Exhausted,
}

/// Run a search to completion and return up to `result_cap` rows, in
/// results-page order. Nothing partial is returned on failure.
pub fn search<F: Fetch + ?Sized>(
    fetcher: &F,
    settings: &Settings,
    req: &SearchRequest,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ResultRow>> {
    let cap = req.result_cap();
    let pause = Duration::from_millis(settings.request_pause_ms);
    let first_url = build_search_url(&settings.base_url, req);

    info!("Search: {} {:?} (cap {cap})", req.kind().label(), req.term());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(cap);
        p.log(&format!("Searching by {}...", req.kind().label().to_lowercase()));
    }

    let mut rows: Vec<ResultRow> = Vec::with_capacity(cap);
    let mut url = first_url.clone();
    let mut page_no = 1usize;

    let outcome = loop {
        let html = match fetcher.fetch(&url) {
            Ok(html) => html,
            Err(e) if page_no > 1 && e.is_transport() => {
                warn!("Page {page_no}: {e}; keeping {} rows", rows.len());
                break Ok(());
            }
            Err(e) => break Err(e),
        };

        let page = results::parse(&html, &settings.base_url);
        if page.links.is_empty() {
            if page_no == 1 {
                break Err(classify_empty_first_page(&page));
            }
            debug!("Page {page_no}: no rows; done");
            break Ok(());
        }
        debug!("Page {page_no}: {} candidates", page.links.len());

        for link in &page.links {
            if rows.len() >= cap { break; }

            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Processing: {}/{cap} businesses", rows.len() + 1));
            }

            match process_candidate(fetcher, link) {
                ExtractionResult::Success(row) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&row);
                    }
                    rows.push(row);
                    if !pause.is_zero() { thread::sleep(pause); }
                }
                ExtractionResult::Failure(reason) => {
                    warn!("Dropping {:?}: {reason}", link.name);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&link.name, &reason);
                    }
                }
            }
        }

        if rows.len() >= cap {
            break Ok(());
        }

        match next_state(&page, &url, &first_url, page_no) {
            PageState::HasMore(next) => {
                url = next;
                page_no += 1;
            }
            PageState::Exhausted => break Ok(()),
        }
    };

    match &outcome {
        Ok(()) => info!("Search: {} rows from {page_no} page(s)", rows.len()),
        Err(e) => warn!("Search failed: {e}"),
    }
    if let Some(p) = progress.as_deref_mut() {
        match &outcome {
            Ok(()) => p.log(&format!("Found {} businesses", rows.len())),
            Err(e) => p.log(&e.to_string()),
        }
        p.finish();
    }

    outcome.map(|()| rows)
}

/// Fetch one candidate's detail page and turn it into a row.
pub fn process_candidate<F: Fetch + ?Sized>(fetcher: &F, link: &ResultLink) -> ExtractionResult {
    match fetcher.fetch(&link.detail_url) {
        Ok(html) => ExtractionResult::Success(
            detail::extract(&html).into_row(&link.name, &link.status, &link.detail_url),
        ),
        Err(e) => ExtractionResult::Failure(e.to_string()),
    }
}

fn classify_empty_first_page(page: &ResultsPage) -> ScrapeError {
    if page.no_results_marker {
        ScrapeError::NoResults
    } else {
        ScrapeError::SelectorDrift
    }
}

fn next_state(page: &ResultsPage, current: &str, first_url: &str, page_no: usize) -> PageState {
    let next = match &page.next {
        None => return PageState::Exhausted,
        Some(NextPage::Link(u)) => u.clone(),
        Some(NextPage::Unlinked) => page_url(first_url, page_no + 1),
    };
    if next == current {
        debug!("Page {page_no}: next link points at itself");
        return PageState::Exhausted;
    }
    PageState::HasMore(next)
}
