//! Status generation seam.
//!
//! The synthetic `status` field is nondeterministic by default. Drawing it
//! through a trait lets tests and reproducible runs swap the random source
//! for a fixed sequence without touching the loader.

use common::InvoiceStatus;
use rand::Rng;

/// Source of synthetic payment statuses, consulted once per row in load
/// order.
pub trait StatusGenerator: Send {
    /// Returns the status for the next row.
    fn next_status(&mut self) -> InvoiceStatus;
}

/// Uniform random choice over paid/unpaid. The default generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomStatus;

impl StatusGenerator for RandomStatus {
    fn next_status(&mut self) -> InvoiceStatus {
        if rand::rng().random_bool(0.5) {
            InvoiceStatus::Paid
        } else {
            InvoiceStatus::Unpaid
        }
    }
}

/// Cycles through a fixed sequence of statuses.
///
/// Deterministic counterpart to [`RandomStatus`] for tests and local
/// fixtures.
#[derive(Debug, Clone)]
pub struct SequenceStatus {
    statuses: Vec<InvoiceStatus>,
    next: usize,
}

impl SequenceStatus {
    /// Creates a generator cycling through `statuses`.
    ///
    /// An empty sequence behaves as all-unpaid.
    pub fn new(statuses: Vec<InvoiceStatus>) -> Self {
        let statuses = if statuses.is_empty() {
            vec![InvoiceStatus::Unpaid]
        } else {
            statuses
        };
        Self { statuses, next: 0 }
    }

    /// Every row gets the same status.
    pub fn always(status: InvoiceStatus) -> Self {
        Self::new(vec![status])
    }
}

impl StatusGenerator for SequenceStatus {
    fn next_status(&mut self) -> InvoiceStatus {
        let status = self.statuses[self.next % self.statuses.len()];
        self.next += 1;
        status
    }
}
