//! The immutable in-memory invoice table.

use crate::record::Invoice;

/// The enriched dataset, built once at load time.
///
/// Rows stay in source-file order, which is the order invoice numbers were
/// assigned in. The table exposes no mutation: queries share it behind an
/// `Arc` and read concurrently without locking.
#[derive(Debug, Clone, Default)]
pub struct InvoiceTable {
    invoices: Vec<Invoice>,
}

impl InvoiceTable {
    /// Wraps enriched rows in a table, preserving their order.
    pub fn new(invoices: Vec<Invoice>) -> Self {
        Self { invoices }
    }

    /// Returns all invoices in original row order.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Returns the number of rows in the table.
    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    /// Returns true if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}
