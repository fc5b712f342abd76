//! Read-side queries over the shared invoice table.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use common::{CustomerId, InvoiceStatus};
use dataset::{Invoice, InvoiceTable};

use crate::error::{QueryError, Result};
use crate::query::{ListQuery, SortOrder};

/// Query engine over the immutable invoice table.
///
/// Every method is a pure read returning owned copies; the table is
/// shared by `Arc` and never mutated, so any number of queries may run
/// concurrently without synchronization.
#[derive(Debug, Clone)]
pub struct InvoiceQueries {
    table: Arc<InvoiceTable>,
}

impl InvoiceQueries {
    /// Creates a query engine over a loaded table.
    pub fn new(table: Arc<InvoiceTable>) -> Self {
        Self { table }
    }

    /// Returns the table this engine reads from.
    pub fn table(&self) -> &InvoiceTable {
        &self.table
    }

    /// Filter → sort → paginate listing.
    ///
    /// The sort is stable: invoices with equal keys keep their original
    /// table order, ascending or descending. Offsets past the end of the
    /// filtered set yield an empty page rather than an error.
    pub fn list(&self, query: &ListQuery) -> Vec<Invoice> {
        let mut rows: Vec<&Invoice> = self
            .table
            .invoices()
            .iter()
            .filter(|inv| {
                query
                    .status
                    .as_deref()
                    .is_none_or(|status| inv.status.as_str() == status)
            })
            .filter(|inv| query.city.as_deref().is_none_or(|city| inv.city == city))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = query.sort_by.key(a).cmp(&query.sort_by.key(b));
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        rows.into_iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect()
    }

    /// Looks up a single invoice by its exact invoice number.
    pub fn get_by_number(&self, invoice_number: &str) -> Result<Invoice> {
        self.table
            .invoices()
            .iter()
            .find(|inv| inv.invoice_number.as_str() == invoice_number)
            .cloned()
            .ok_or_else(|| QueryError::InvoiceNotFound(invoice_number.to_string()))
    }

    /// All invoices belonging to a customer, in table order.
    pub fn by_customer(&self, customer_id: &CustomerId) -> Vec<Invoice> {
        self.filtered(|inv| &inv.customer_id == customer_id)
    }

    /// Unpaid invoices whose due date has passed, relative to the current
    /// date at call time.
    pub fn overdue(&self) -> Vec<Invoice> {
        self.overdue_as_of(Local::now().date_naive())
    }

    /// Unpaid invoices strictly past due relative to `today`.
    pub fn overdue_as_of(&self, today: NaiveDate) -> Vec<Invoice> {
        self.filtered(|inv| inv.status == InvoiceStatus::Unpaid && inv.due_date < today)
    }

    /// All invoices with the given status string, in table order.
    ///
    /// Unknown statuses match nothing rather than erroring.
    pub fn by_status(&self, status: &str) -> Vec<Invoice> {
        self.filtered(|inv| inv.status.as_str() == status)
    }

    /// All invoices for a city, in table order.
    pub fn by_city(&self, city: &str) -> Vec<Invoice> {
        self.filtered(|inv| inv.city == city)
    }

    fn filtered(&self, predicate: impl Fn(&Invoice) -> bool) -> Vec<Invoice> {
        self.table
            .invoices()
            .iter()
            .filter(|inv| predicate(inv))
            .cloned()
            .collect()
    }
}
