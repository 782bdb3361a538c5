//! Query subsystem for exoquery
//!
//! The core of the crate: builds a composite filter from a set of
//! optional criteria and evaluates it against the catalog.
//!
//! # Search flow (strict order)
//!
//! 1. Plan: turn supplied criteria into predicates, dropping any value
//!    below its validity floor
//! 2. Conjoin: a row matches iff every planned predicate matches; the
//!    empty plan matches every row
//! 3. Evaluate: one linear pass over the catalog, in row order
//! 4. Return the ordered identifiers, or the empty no-match result
//!
//! # Invariants
//!
//! - Search is pure: same catalog + same criteria = same result
//! - The catalog is never mutated by a query
//! - Below-floor criteria are dropped silently, never an error
//! - Results are never deduplicated, ranked, or reordered

mod criteria;
mod engine;
mod field;
mod planner;
mod predicate;
mod result;

pub use criteria::Criteria;
pub use engine::QueryEngine;
pub use field::{Field, FieldValue};
pub use planner::{plan, MIN_DISC_YEAR};
pub use predicate::{MatchOp, Predicate};
pub use result::SearchResult;
