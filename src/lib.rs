//! exoquery - A strict, deterministic exoplanet catalog search engine
//!
//! The catalog is loaded once at startup, validated strictly, and never
//! mutated afterwards. Every search is a pure function of (catalog, criteria).

pub mod catalog;
pub mod cli;
pub mod query;
