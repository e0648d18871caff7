// src/session.rs
//
// The last search and its rows, owned by whichever frontend is running.
// Cleared when a search starts, filled only when one succeeds; a failed
// search leaves it empty. Never written to disk.

use crate::config::options::SearchRequest;
use crate::data::ResultRow;

#[derive(Clone, Debug, Default)]
pub struct Session {
    request: Option<SearchRequest>,
    rows: Vec<ResultRow>,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) {
        self.request = None;
        self.rows.clear();
    }

    /// Install the outcome of a successful search.
    pub fn replace(&mut self, request: SearchRequest, rows: Vec<ResultRow>) {
        self.request = Some(request);
        self.rows = rows;
    }

    pub fn request(&self) -> Option<&SearchRequest> { self.request.as_ref() }
    pub fn rows(&self) -> &[ResultRow] { &self.rows }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn len(&self) -> usize { self.rows.len() }

    /// Term used for export file names.
    pub fn term(&self) -> &str {
        self.request.as_ref().map(|r| r.term()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::SearchKind;

    #[test]
    fn replace_then_clear() {
        let mut s = Session::new();
        assert!(s.is_empty());
        assert_eq!(s.term(), "");

        let req = SearchRequest::new(SearchKind::BusinessName, "acme", 3).unwrap();
        s.replace(req, vec![ResultRow::default(), ResultRow::default()]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.term(), "acme");

        s.clear();
        assert!(s.is_empty());
        assert!(s.request().is_none());
    }
}
