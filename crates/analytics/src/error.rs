//! Query error types.

use thiserror::Error;

/// Errors that can occur while querying the invoice table.
#[derive(Debug, Error)]
pub enum QueryError {
    /// No invoice carries the requested invoice number.
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(String),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
