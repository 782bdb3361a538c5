//! Catalog error types
//!
//! Every catalog error is a load-time failure and is fatal: a catalog that
//! cannot be fully parsed must not serve queries. There is no per-row
//! recovery path.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened or read
    #[error("failed to read catalog '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The header row is missing or does not carry the expected columns
    #[error("malformed catalog header: {reason}")]
    MalformedHeader { reason: String },

    /// A data row does not parse into the fixed schema (missing column,
    /// non-numeric value in a numeric column, ...). `row` is 1-based and
    /// counts data rows, excluding the header.
    #[error("malformed catalog row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// A data row carries an empty `pl_name`; identifiers are non-null
    #[error("catalog row {row} has an empty pl_name identifier")]
    EmptyIdentifier { row: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_display() {
        let err = CatalogError::MalformedRecord {
            row: 7,
            reason: "invalid float literal".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("row 7"));
        assert!(display.contains("invalid float literal"));
    }

    #[test]
    fn test_empty_identifier_display() {
        let err = CatalogError::EmptyIdentifier { row: 3 };
        assert!(format!("{}", err).contains("pl_name"));
    }
}
