//! Raw CSV rows and the enriched invoice entity.

use chrono::NaiveDate;
use common::{CustomerId, InvoiceNumber, InvoiceStatus, Money, ProductId};
use serde::{Deserialize, Serialize};

/// A single row as it appears in the source CSV.
///
/// Fields other than `invoice_date` may be empty or absent in sloppy
/// exports; they are normalized during enrichment (empty string for text,
/// zero for numbers). The date is load-bearing for derivation and fails
/// the load when unparseable.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub qty: Option<u32>,
    #[serde(default)]
    pub amount: Option<String>,
    pub invoice_date: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub stock_code: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
}

/// A raw row plus every derived field; the system's canonical entity.
///
/// Built exactly once per row at load time and never mutated afterwards.
/// Dates are kept as calendar dates and rendered `YYYY-MM-DD` at the
/// serialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
    pub invoice_number: InvoiceNumber,
    pub first_name: String,
    pub last_name: String,
    /// First and last name joined with a single space.
    pub name: String,
    pub email: String,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub qty: u32,
    pub amount: Money,
    pub invoice_date: NaiveDate,
    /// Thirty calendar days after the invoice date.
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub address: String,
    pub city: String,
    pub country: String,
    pub stock_code: String,
    pub job: String,
}
