//! Catalog loader
//!
//! Reads the planet catalog from a headed CSV source into a fully
//! materialized [`Catalog`]. Loading is strict: a missing column, a
//! non-numeric value in a numeric column, or an empty identifier aborts
//! the load. A catalog that only half-parses would silently corrupt
//! every later query, so there is no row-skipping fallback.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::errors::{CatalogError, CatalogResult};
use super::types::{Catalog, PlanetRecord};

/// Columns every catalog source must carry, in schema order.
const REQUIRED_COLUMNS: [&str; 13] = [
    "pl_name",
    "stars",
    "moons",
    "disc_year",
    "orbital period",
    "radius",
    "mass",
    "equilibrium temp",
    "solar radius",
    "solar mass",
    "rotational velocity",
    "distance",
    "gaia magnitude",
];

/// Loads the catalog from CSV and validates it against the fixed schema.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads a catalog from a CSV file on disk.
    pub fn load(path: &Path) -> CatalogResult<Catalog> {
        let file = File::open(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let catalog = Self::load_from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            rows = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Loads a catalog from any CSV reader.
    ///
    /// The first record must be a header row carrying every required
    /// column; extra columns are ignored.
    pub fn load_from_reader<R: Read>(reader: R) -> CatalogResult<Catalog> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| CatalogError::MalformedHeader {
                reason: e.to_string(),
            })?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(CatalogError::MalformedHeader {
                    reason: format!("missing required column '{}'", column),
                });
            }
        }

        let mut records = Vec::new();
        for (index, result) in csv_reader.deserialize::<PlanetRecord>().enumerate() {
            // 1-based data row number, header excluded
            let row = index + 1;
            let record = result.map_err(|e| CatalogError::MalformedRecord {
                row,
                reason: e.to_string(),
            })?;
            if record.pl_name.trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier { row });
            }
            records.push(record);
        }

        Ok(Catalog::new(records))
    }
}
