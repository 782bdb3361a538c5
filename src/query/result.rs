//! Result types for query execution

use serde::Serialize;

/// Result of one search.
///
/// `matches` holds the identifiers of every satisfying row, in catalog
/// order, duplicates preserved. The empty vector IS the no-match outcome;
/// it is a normal result value, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Matching identifiers in catalog order
    matches: Vec<String>,
    /// Number of rows scanned (always the full catalog)
    scanned_count: usize,
}

impl SearchResult {
    /// Creates a result from the collected identifiers.
    pub fn new(matches: Vec<String>, scanned_count: usize) -> Self {
        Self {
            matches,
            scanned_count,
        }
    }

    /// Matching identifiers, in catalog order.
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Number of matching rows.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns true if no row satisfied the composite filter.
    pub fn is_no_match(&self) -> bool {
        self.matches.is_empty()
    }

    /// Alias for [`is_no_match`](Self::is_no_match), for iterator-style callers.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of rows the scan visited.
    pub fn scanned_count(&self) -> usize {
        self.scanned_count
    }

    /// Consumes the result, yielding the identifiers.
    pub fn into_matches(self) -> Vec<String> {
        self.matches
    }
}
