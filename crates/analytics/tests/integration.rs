//! Integration tests driving the query engine through a table produced by
//! the real loader.

use std::io::Write;
use std::sync::Arc;

use analytics::{InvoiceQueries, ListQuery, QueryError, SortField, SortOrder};
use chrono::NaiveDate;
use common::{CustomerId, InvoiceStatus, Money};
use dataset::{SequenceStatus, load_csv_with};
use tempfile::NamedTempFile;

const HEADER: &str =
    "first_name,last_name,email,product_id,qty,amount,invoice_date,address,city,stock_code,job";

/// Five invoices, deliberately out of date order, with one repeated email
/// and one repeated amount. Statuses alternate paid/unpaid from row one.
fn fixture() -> InvoiceQueries {
    let rows = [
        "Ada,Lovelace,ada@example.com,1001,2,19.99,15/03/2024,1 Main St,New York,7001,Engineer",
        "Grace,Hopper,grace@example.com,1002,1,250.00,10/03/2024,2 Oak Ave,Boston,7002,Admiral",
        "Ada,Lovelace,ada@example.com,1001,5,30.01,12/03/2024,1 Main St,New York,7001,Engineer",
        "Alan,Turing,alan@example.com,1003,7,19.99,11/03/2024,3 Elm Rd,Chicago,7003,Mathematician",
        "Katherine,Johnson,katherine@example.com,1002,4,100.00,14/03/2024,4 Pine Ct,New York,7004,Physicist",
    ];

    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();

    let mut statuses = SequenceStatus::new(vec![InvoiceStatus::Paid, InvoiceStatus::Unpaid]);
    let table = load_csv_with(file.path(), &mut statuses).expect("load fixture");
    InvoiceQueries::new(Arc::new(table))
}

fn numbers(invoices: &[dataset::Invoice]) -> Vec<&str> {
    invoices.iter().map(|inv| inv.invoice_number.as_str()).collect()
}

#[test]
fn default_list_sorts_by_invoice_date_ascending() {
    let queries = fixture();
    let listed = queries.list(&ListQuery::default());

    assert_eq!(
        numbers(&listed),
        ["INV-00002", "INV-00004", "INV-00003", "INV-00005", "INV-00001"]
    );
}

#[test]
fn status_filter_returns_only_matching_rows() {
    let queries = fixture();
    let listed = queries.list(&ListQuery {
        status: Some("paid".to_string()),
        ..ListQuery::default()
    });

    assert!(!listed.is_empty());
    assert!(listed.iter().all(|inv| inv.status == InvoiceStatus::Paid));
}

#[test]
fn city_filter_returns_only_matching_rows() {
    let queries = fixture();
    let listed = queries.list(&ListQuery {
        city: Some("New York".to_string()),
        ..ListQuery::default()
    });

    assert_eq!(numbers(&listed), ["INV-00003", "INV-00005", "INV-00001"]);
    assert!(listed.iter().all(|inv| inv.city == "New York"));
}

#[test]
fn filters_are_and_combined() {
    let queries = fixture();
    let listed = queries.list(&ListQuery {
        status: Some("unpaid".to_string()),
        city: Some("New York".to_string()),
        ..ListQuery::default()
    });

    // Every New York row in the fixture is paid.
    assert!(listed.is_empty());
}

#[test]
fn unknown_filter_values_yield_empty_results() {
    let queries = fixture();
    let listed = queries.list(&ListQuery {
        status: Some("overdue".to_string()),
        ..ListQuery::default()
    });
    assert!(listed.is_empty());

    assert!(queries.by_status("void").is_empty());
    assert!(queries.by_city("Atlantis").is_empty());
}

#[test]
fn sort_by_amount_descending_is_non_increasing_with_stable_ties() {
    let queries = fixture();
    let listed = queries.list(&ListQuery {
        sort_by: SortField::resolve("amount"),
        order: SortOrder::from_param("desc"),
        ..ListQuery::default()
    });

    let amounts: Vec<i64> = listed.iter().map(|inv| inv.amount.cents()).collect();
    assert!(amounts.windows(2).all(|pair| pair[0] >= pair[1]));
    // Rows 1 and 4 share an amount; the earlier table row comes first.
    assert_eq!(
        numbers(&listed),
        ["INV-00002", "INV-00005", "INV-00003", "INV-00001", "INV-00004"]
    );
}

#[test]
fn unknown_sort_field_falls_back_to_date_order() {
    let queries = fixture();
    let by_unknown = queries.list(&ListQuery {
        sort_by: SortField::resolve("not_a_column"),
        ..ListQuery::default()
    });
    let by_date = queries.list(&ListQuery::default());

    assert_eq!(numbers(&by_unknown), numbers(&by_date));
}

#[test]
fn pagination_slices_the_sorted_sequence() {
    let queries = fixture();
    let page = queries.list(&ListQuery {
        limit: 2,
        offset: 2,
        ..ListQuery::default()
    });

    assert_eq!(numbers(&page), ["INV-00003", "INV-00005"]);
}

#[test]
fn pagination_beyond_bounds_is_empty_not_an_error() {
    let queries = fixture();
    let page = queries.list(&ListQuery {
        limit: 10,
        offset: 99,
        ..ListQuery::default()
    });

    assert!(page.is_empty());
}

#[test]
fn get_by_number_returns_the_first_loaded_row() {
    let queries = fixture();
    let invoice = queries.get_by_number("INV-00001").unwrap();

    assert_eq!(invoice.first_name, "Ada");
    assert_eq!(invoice.invoice_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
}

#[test]
fn get_by_number_reports_a_typed_miss() {
    let queries = fixture();
    let err = queries.get_by_number("NONEXISTENT").unwrap_err();

    assert!(matches!(err, QueryError::InvoiceNotFound(ref number) if number == "NONEXISTENT"));
}

#[test]
fn by_customer_groups_rows_sharing_an_email() {
    let queries = fixture();
    let ada = CustomerId::from_email("ada@example.com");
    let invoices = queries.by_customer(&ada);

    assert_eq!(numbers(&invoices), ["INV-00001", "INV-00003"]);
    assert!(invoices.iter().all(|inv| inv.customer_id == ada));

    let stranger = CustomerId::from_email("nobody@example.com");
    assert!(queries.by_customer(&stranger).is_empty());
}

#[test]
fn overdue_requires_unpaid_and_strictly_past_due() {
    let queries = fixture();

    // INV-00002 (unpaid) is due 2024-04-09, INV-00004 (unpaid) 2024-04-10.
    let on_the_boundary = queries.overdue_as_of(NaiveDate::from_ymd_opt(2024, 4, 10).unwrap());
    assert_eq!(numbers(&on_the_boundary), ["INV-00002"]);

    let well_past = queries.overdue_as_of(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    assert_eq!(numbers(&well_past), ["INV-00002", "INV-00004"]);
    assert!(
        well_past
            .iter()
            .all(|inv| inv.status == InvoiceStatus::Unpaid)
    );

    let before_everything = queries.overdue_as_of(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert!(before_everything.is_empty());
}

#[test]
fn total_revenue_is_the_exact_sum_of_amounts() {
    let queries = fixture();

    // 19.99 + 250.00 + 30.01 + 19.99 + 100.00
    assert_eq!(queries.total_revenue(), Money::from_cents(41_999));
}

#[test]
fn top_customers_ranks_by_total_spend() {
    let queries = fixture();
    let top = queries.top_customers(5);

    assert_eq!(top.len(), 4);
    assert_eq!(top[0].email, "grace@example.com");
    assert_eq!(top[0].total_spent, Money::from_cents(25_000));
    assert_eq!(top[1].email, "katherine@example.com");
    assert_eq!(top[2].email, "ada@example.com");
    assert_eq!(top[2].total_spent, Money::from_cents(5_000));
    assert_eq!(top[2].name, "Ada Lovelace");
    assert_eq!(top[3].total_spent, Money::from_cents(1_999));

    let spends: Vec<i64> = top.iter().map(|c| c.total_spent.cents()).collect();
    assert!(spends.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn top_customers_truncates_to_n() {
    let queries = fixture();
    let top = queries.top_customers(2);

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].email, "grace@example.com");
    assert_eq!(top[1].email, "katherine@example.com");
}

#[test]
fn top_products_sums_quantities_with_first_seen_tie_break() {
    let queries = fixture();
    let top = queries.top_products(3);

    // Products 1001 and 1003 both total 7; 1001 appears first in the table.
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].product_id.as_str(), "1001");
    assert_eq!(top[0].total_qty, 7);
    assert_eq!(top[1].product_id.as_str(), "1003");
    assert_eq!(top[1].total_qty, 7);
    assert_eq!(top[2].product_id.as_str(), "1002");
    assert_eq!(top[2].total_qty, 5);
}

#[test]
fn top_products_truncates_to_n() {
    let queries = fixture();
    assert_eq!(queries.top_products(1).len(), 1);
    assert_eq!(queries.top_products(0).len(), 0);
}

#[test]
fn queries_do_not_mutate_the_table() {
    let queries = fixture();
    let before = numbers(queries.table().invoices())
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let _ = queries.list(&ListQuery {
        sort_by: SortField::resolve("amount"),
        order: SortOrder::Desc,
        ..ListQuery::default()
    });
    let _ = queries.top_customers(5);

    assert_eq!(numbers(queries.table().invoices()), before);
}
