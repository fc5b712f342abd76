//! Aggregate analytics over the invoice table.

use std::collections::HashMap;

use common::{CustomerId, Money, ProductId};
use serde::Serialize;

use crate::engine::InvoiceQueries;

/// Default number of entries for the top-N reports.
pub const DEFAULT_TOP_N: usize = 5;

/// Per-customer spending summary reported by
/// [`InvoiceQueries::top_customers`].
///
/// Name and email are taken from the customer's first-encountered row;
/// they are assumed constant per customer id but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSummary {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub total_spent: Money,
}

/// Per-product quantity total reported by
/// [`InvoiceQueries::top_products`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSales {
    pub product_id: ProductId,
    pub total_qty: u64,
}

impl InvoiceQueries {
    /// Exact sum of `amount` over every invoice in the table.
    pub fn total_revenue(&self) -> Money {
        self.table()
            .invoices()
            .iter()
            .fold(Money::zero(), |acc, inv| acc + inv.amount)
    }

    /// The `n` customers with the largest total spend, descending.
    ///
    /// Groups are accumulated in first-seen order and the sort is stable,
    /// so equal sums tie-break by first appearance in the table.
    pub fn top_customers(&self, n: usize) -> Vec<CustomerSummary> {
        let mut groups: Vec<CustomerSummary> = Vec::new();
        let mut index: HashMap<&CustomerId, usize> = HashMap::new();

        for invoice in self.table().invoices() {
            match index.get(&invoice.customer_id) {
                Some(&i) => groups[i].total_spent += invoice.amount,
                None => {
                    index.insert(&invoice.customer_id, groups.len());
                    groups.push(CustomerSummary {
                        customer_id: invoice.customer_id.clone(),
                        name: invoice.name.clone(),
                        email: invoice.email.clone(),
                        total_spent: invoice.amount,
                    });
                }
            }
        }

        groups.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
        groups.truncate(n);
        groups
    }

    /// The `n` products with the largest summed quantity, descending.
    ///
    /// Same tie-break policy as [`InvoiceQueries::top_customers`].
    pub fn top_products(&self, n: usize) -> Vec<ProductSales> {
        let mut groups: Vec<ProductSales> = Vec::new();
        let mut index: HashMap<&ProductId, usize> = HashMap::new();

        for invoice in self.table().invoices() {
            match index.get(&invoice.product_id) {
                Some(&i) => groups[i].total_qty += u64::from(invoice.qty),
                None => {
                    index.insert(&invoice.product_id, groups.len());
                    groups.push(ProductSales {
                        product_id: invoice.product_id.clone(),
                        total_qty: u64::from(invoice.qty),
                    });
                }
            }
        }

        groups.sort_by(|a, b| b.total_qty.cmp(&a.total_qty));
        groups.truncate(n);
        groups
    }
}
