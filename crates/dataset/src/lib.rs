//! Enrichment loader for the invoice dataset.
//!
//! Reads the raw CSV export once, derives the fields the raw rows lack
//! (invoice number, due date, synthetic status, hashed customer id), and
//! publishes an immutable [`InvoiceTable`]:
//! - [`load_csv`] / [`load_csv_with`] perform the one-pass load
//! - [`DatasetCache`] guarantees at-most-once loading per source path
//! - [`StatusGenerator`] is the seam for status nondeterminism

pub mod cache;
pub mod error;
pub mod loader;
pub mod record;
pub mod status;
pub mod table;

pub use cache::DatasetCache;
pub use error::{LoadError, Result};
pub use loader::{REQUIRED_COLUMNS, load_csv, load_csv_with};
pub use record::{Invoice, RawRecord};
pub use status::{RandomStatus, SequenceStatus, StatusGenerator};
pub use table::InvoiceTable;
