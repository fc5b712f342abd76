//! Invoice listing, lookup, and grouped retrieval endpoints.

use std::sync::Arc;

use analytics::{DEFAULT_LIMIT, InvoiceQueries, ListQuery, SortField, SortOrder};
use axum::Json;
use axum::extract::{Path, Query, State};
use dataset::Invoice;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub queries: InvoiceQueries,
}

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct ListInvoicesParams {
    pub status: Option<String>,
    pub city: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ListInvoicesParams {
    fn into_query(self) -> ListQuery {
        ListQuery {
            status: self.status,
            city: self.city,
            sort_by: self
                .sort_by
                .as_deref()
                .map(SortField::resolve)
                .unwrap_or_default(),
            order: self
                .order
                .as_deref()
                .map(SortOrder::from_param)
                .unwrap_or_default(),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            offset: self.offset.unwrap_or(0),
        }
    }
}

// -- Response types --

/// Wire form of an enriched invoice. Dates render `YYYY-MM-DD`; money
/// renders as integer cents.
#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice_number: String,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub email: String,
    pub customer_id: String,
    pub product_id: String,
    pub qty: u32,
    pub amount_cents: i64,
    pub invoice_date: String,
    pub due_date: String,
    pub status: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub stock_code: String,
    pub job: String,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            invoice_number: invoice.invoice_number.to_string(),
            first_name: invoice.first_name,
            last_name: invoice.last_name,
            name: invoice.name,
            email: invoice.email,
            customer_id: invoice.customer_id.to_string(),
            product_id: invoice.product_id.to_string(),
            qty: invoice.qty,
            amount_cents: invoice.amount.cents(),
            invoice_date: invoice.invoice_date.format("%Y-%m-%d").to_string(),
            due_date: invoice.due_date.format("%Y-%m-%d").to_string(),
            status: invoice.status.to_string(),
            address: invoice.address,
            city: invoice.city,
            country: invoice.country,
            stock_code: invoice.stock_code,
            job: invoice.job,
        }
    }
}

pub(crate) fn to_responses(invoices: Vec<Invoice>) -> Vec<InvoiceResponse> {
    invoices.into_iter().map(InvoiceResponse::from).collect()
}

// -- Handlers --

/// GET /invoices — filtered, sorted, paginated listing.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListInvoicesParams>,
) -> Json<Vec<InvoiceResponse>> {
    let query = params.into_query();
    Json(to_responses(state.queries.list(&query)))
}

/// GET /invoices/overdue — unpaid invoices past their due date.
#[tracing::instrument(skip(state))]
pub async fn overdue(State(state): State<Arc<AppState>>) -> Json<Vec<InvoiceResponse>> {
    Json(to_responses(state.queries.overdue()))
}

/// GET /invoices/{invoice_number} — single invoice lookup.
#[tracing::instrument(skip(state))]
pub async fn get_by_number(
    State(state): State<Arc<AppState>>,
    Path(invoice_number): Path<String>,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let invoice = state.queries.get_by_number(&invoice_number)?;
    Ok(Json(invoice.into()))
}

/// GET /invoices/status/{status} — all invoices with the given status.
#[tracing::instrument(skip(state))]
pub async fn by_status(
    State(state): State<Arc<AppState>>,
    Path(status): Path<String>,
) -> Json<Vec<InvoiceResponse>> {
    Json(to_responses(state.queries.by_status(&status)))
}

/// GET /invoices/city/{city} — all invoices for a city.
#[tracing::instrument(skip(state))]
pub async fn by_city(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Json<Vec<InvoiceResponse>> {
    Json(to_responses(state.queries.by_city(&city)))
}
