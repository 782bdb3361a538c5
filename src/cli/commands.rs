//! CLI command implementations
//!
//! Both commands follow the same strict sequence: load and validate the
//! catalog (any failure aborts before a single query runs), then serve
//! exactly one operation and exit.

use std::io::Write;
use std::path::Path;

use crate::catalog::CatalogLoader;
use crate::query::{Criteria, QueryEngine};

use super::errors::CliResult;

/// Message printed when the composite filter admits no row.
const NO_MATCH_MESSAGE: &str = "No matching planets found";

/// Runs a one-shot search and prints the matching identifiers.
pub fn search(catalog_path: &Path, criteria: Criteria, json: bool) -> CliResult<()> {
    let catalog = CatalogLoader::load(catalog_path)?;
    let engine = QueryEngine::new(catalog);

    let result = engine.search(&criteria);
    tracing::info!(
        supplied = criteria.supplied_count(),
        scanned = result.scanned_count(),
        returned = result.len(),
        "search finished"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result.matches(), json)?;
    Ok(())
}

/// Loads the catalog and reports its row count.
pub fn check(catalog_path: &Path) -> CliResult<()> {
    let catalog = CatalogLoader::load(catalog_path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "catalog ok: {} rows ({})",
        catalog.len(),
        catalog_path.display()
    )?;
    Ok(())
}

fn write_result<W: Write>(out: &mut W, matches: &[String], json: bool) -> CliResult<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &matches)?;
        writeln!(out)?;
        return Ok(());
    }

    if matches.is_empty() {
        writeln!(out, "{}", NO_MATCH_MESSAGE)?;
    } else {
        for name in matches {
            writeln!(out, "{}", name)?;
        }
    }
    Ok(())
}
