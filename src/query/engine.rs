//! Query engine
//!
//! Owns the immutable catalog and evaluates one criteria set per call:
//! plan, conjoin, single linear pass in row order, collect identifiers.
//! `search` is stateless between calls and deterministic: the same
//! catalog and criteria always produce the same result, in the same
//! order.

use crate::catalog::Catalog;

use super::criteria::Criteria;
use super::planner;
use super::predicate::Predicate;
use super::result::SearchResult;

/// Evaluates criteria against the catalog.
pub struct QueryEngine {
    catalog: Catalog,
}

impl QueryEngine {
    /// Creates an engine over a fully-loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this engine serves from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Evaluates one criteria set and returns the matching identifiers.
    ///
    /// Zero active criteria (all absent, or all below their validity
    /// floors) is the "list everything" query and returns every row's
    /// identifier in catalog order. Zero matches is a normal result, not
    /// an error.
    pub fn search(&self, criteria: &Criteria) -> SearchResult {
        let predicates = planner::plan(criteria);

        let mut matches = Vec::new();
        let mut scanned_count = 0;
        for record in self.catalog.iter() {
            scanned_count += 1;
            if Predicate::matches_all(record, &predicates) {
                matches.push(record.pl_name.clone());
            }
        }

        tracing::debug!(
            active_predicates = predicates.len(),
            scanned = scanned_count,
            returned = matches.len(),
            "search complete"
        );

        SearchResult::new(matches, scanned_count)
    }
}
