//! CLI error types
//!
//! Every CLI error is fatal: the process prints it and exits non-zero.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the command-line layer
#[derive(Debug, Error)]
pub enum CliError {
    /// The catalog failed to load; the engine never enters service
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Output could not be written
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Results could not be encoded as JSON
    #[error("failed to encode results as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
