//! Query and analytics engine for the invoice read model.
//!
//! Operates purely on the [`InvoiceTable`](dataset::InvoiceTable) produced
//! by the `dataset` crate:
//! - [`InvoiceQueries`] — filter/sort/paginate listing, exact lookups,
//!   grouped retrieval, and the overdue view
//! - aggregate reports — total revenue, top customers by spend, top
//!   products by quantity
//!
//! Every operation is a total function over the table except
//! [`InvoiceQueries::get_by_number`], which reports a typed miss. Unknown
//! filter values yield empty results and unknown sort fields fall back to
//! the default sort key.

pub mod engine;
pub mod error;
pub mod query;
pub mod reports;

pub use engine::InvoiceQueries;
pub use error::{QueryError, Result};
pub use query::{DEFAULT_LIMIT, ListQuery, SortField, SortOrder};
pub use reports::{CustomerSummary, DEFAULT_TOP_N, ProductSales};
