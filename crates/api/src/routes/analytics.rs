//! Aggregate analytics endpoints.

use std::sync::Arc;

use analytics::DEFAULT_TOP_N;
use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::routes::invoices::AppState;

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct TopCustomersParams {
    pub num_customers: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TopProductsParams {
    pub num_products: Option<usize>,
}

// -- Response types --

#[derive(Serialize)]
pub struct TotalRevenueResponse {
    pub total_revenue_cents: i64,
}

#[derive(Serialize)]
pub struct CustomerResponse {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub total_spent_cents: i64,
}

// -- Handlers --

/// GET /analytics/total-revenue — exact sum over the whole table.
#[tracing::instrument(skip(state))]
pub async fn total_revenue(State(state): State<Arc<AppState>>) -> Json<TotalRevenueResponse> {
    Json(TotalRevenueResponse {
        total_revenue_cents: state.queries.total_revenue().cents(),
    })
}

/// GET /analytics/top-customers — customers ranked by total spend.
#[tracing::instrument(skip(state))]
pub async fn top_customers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopCustomersParams>,
) -> Json<Vec<CustomerResponse>> {
    let n = params.num_customers.unwrap_or(DEFAULT_TOP_N);
    let customers = state
        .queries
        .top_customers(n)
        .into_iter()
        .map(|summary| CustomerResponse {
            customer_id: summary.customer_id.to_string(),
            name: summary.name,
            email: summary.email,
            total_spent_cents: summary.total_spent.cents(),
        })
        .collect();
    Json(customers)
}

/// GET /analytics/top-products — product id → total quantity mapping.
#[tracing::instrument(skip(state))]
pub async fn top_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopProductsParams>,
) -> Json<Value> {
    let n = params.num_products.unwrap_or(DEFAULT_TOP_N);
    let mut top_products = Map::new();
    for sale in state.queries.top_products(n) {
        top_products.insert(sale.product_id.to_string(), Value::from(sale.total_qty));
    }
    Json(serde_json::json!({ "top_products": top_products }))
}
