//! Catalog subsystem for exoquery
//!
//! The catalog is the immutable, fully-resident dataset behind every query:
//! one [`PlanetRecord`] per planet, in source order.
//!
//! # Invariants
//!
//! - Loaded exactly once, before the first query is served
//! - Never mutated after load; row order is source order
//! - A malformed source row aborts the load (no per-row recovery, no
//!   coercion) so the engine never serves from a partial catalog

mod errors;
mod loader;
mod types;

pub use errors::{CatalogError, CatalogResult};
pub use loader::CatalogLoader;
pub use types::{Catalog, PlanetRecord};
