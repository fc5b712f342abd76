//! Shared value objects for the invoice billing system.
//!
//! These types cross crate boundaries: the loader derives them from raw
//! rows, the query engine groups and sorts by them, and the API renders
//! them at the serialization boundary.

pub mod money;
pub mod status;
pub mod types;

pub use money::Money;
pub use status::InvoiceStatus;
pub use types::{CustomerId, InvoiceNumber, ProductId};
