//! CSV loading and field derivation.

use std::path::Path;

use chrono::{Days, NaiveDate};
use common::{CustomerId, InvoiceNumber, Money, ProductId};

use crate::error::{LoadError, Result};
use crate::record::{Invoice, RawRecord};
use crate::status::{RandomStatus, StatusGenerator};
use crate::table::InvoiceTable;

/// Columns that must be present in the source header.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "first_name",
    "last_name",
    "email",
    "product_id",
    "qty",
    "amount",
    "invoice_date",
    "address",
    "city",
    "stock_code",
    "job",
];

const INVOICE_DATE_FORMAT: &str = "%d/%m/%Y";
const DUE_DAYS: u64 = 30;
const COUNTRY: &str = "USA";

/// Loads and enriches the dataset with the default random status
/// generator.
pub fn load_csv(path: impl AsRef<Path>) -> Result<InvoiceTable> {
    load_csv_with(path, &mut RandomStatus)
}

/// Loads and enriches the dataset, drawing statuses from `statuses`.
///
/// Rows are processed in file order; the 1-based row position becomes the
/// invoice number. Any unreadable or unparseable row aborts the whole
/// load: no partial table is ever published.
pub fn load_csv_with(
    path: impl AsRef<Path>,
    statuses: &mut dyn StatusGenerator,
) -> Result<InvoiceTable> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut invoices = Vec::new();
    for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
        invoices.push(enrich(row?, index + 1, statuses)?);
    }

    tracing::info!(rows = invoices.len(), "invoice dataset loaded");
    metrics::gauge!("dataset_rows").set(invoices.len() as f64);

    Ok(InvoiceTable::new(invoices))
}

/// Derives every synthetic field for one row.
fn enrich(raw: RawRecord, position: usize, statuses: &mut dyn StatusGenerator) -> Result<Invoice> {
    let invoice_date = NaiveDate::parse_from_str(&raw.invoice_date, INVOICE_DATE_FORMAT)
        .map_err(|_| LoadError::InvalidDate {
            row: position,
            value: raw.invoice_date.clone(),
        })?;
    let due_date = invoice_date
        .checked_add_days(Days::new(DUE_DAYS))
        .ok_or_else(|| LoadError::InvalidDate {
            row: position,
            value: raw.invoice_date.clone(),
        })?;

    let amount = match raw.amount {
        Some(text) if !text.trim().is_empty() => {
            Money::parse(&text).ok_or(LoadError::InvalidAmount {
                row: position,
                value: text,
            })?
        }
        _ => Money::zero(),
    };

    let first_name = raw.first_name.unwrap_or_default();
    let last_name = raw.last_name.unwrap_or_default();
    let email = raw.email.unwrap_or_default();

    Ok(Invoice {
        invoice_number: InvoiceNumber::from_position(position),
        name: format!("{first_name} {last_name}"),
        customer_id: CustomerId::from_email(&email),
        product_id: ProductId::new(raw.product_id.unwrap_or_default()),
        qty: raw.qty.unwrap_or(0),
        amount,
        invoice_date,
        due_date,
        status: statuses.next_status(),
        address: raw.address.unwrap_or_default(),
        city: raw.city.unwrap_or_default(),
        country: COUNTRY.to_string(),
        stock_code: raw.stock_code.unwrap_or_default(),
        job: raw.job.unwrap_or_default(),
        first_name,
        last_name,
        email,
    })
}
