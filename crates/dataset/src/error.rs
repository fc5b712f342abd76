//! Loader error types.

use thiserror::Error;

/// Errors that can occur while loading and enriching the dataset.
///
/// Every variant is fatal: a failed load publishes no table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV structure or a row failed to parse.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header.
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// An invoice date could not be parsed as DD/MM/YYYY.
    #[error("Row {row}: invalid invoice date {value:?}")]
    InvalidDate { row: usize, value: String },

    /// An amount could not be parsed as a decimal.
    #[error("Row {row}: invalid amount {value:?}")]
    InvalidAmount { row: usize, value: String },
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;
