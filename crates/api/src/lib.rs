//! HTTP API server with observability for the invoice billing system.
//!
//! Thin transport over the `dataset` and `analytics` crates: route
//! registration, request/response DTOs, error → status mapping, and
//! observability middleware. All derivation and query behavior lives in
//! the core crates; handlers only call into them and serialize the
//! results.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use analytics::InvoiceQueries;
use axum::Router;
use axum::routing::get;
use dataset::InvoiceTable;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::invoices::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::health::index))
        .route("/health", get(routes::health::check))
        .route("/invoices", get(routes::invoices::list))
        .route("/invoices/overdue", get(routes::invoices::overdue))
        .route("/invoices/status/{status}", get(routes::invoices::by_status))
        .route("/invoices/city/{city}", get(routes::invoices::by_city))
        .route("/invoices/{invoice_number}", get(routes::invoices::get_by_number))
        .route(
            "/customers/{customer_id}/invoices",
            get(routes::customers::invoices),
        )
        .route(
            "/analytics/total-revenue",
            get(routes::analytics::total_revenue),
        )
        .route(
            "/analytics/top-customers",
            get(routes::analytics::top_customers),
        )
        .route(
            "/analytics/top-products",
            get(routes::analytics::top_products),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::track_request_timing))
}

/// Builds the shared application state over a loaded table.
pub fn create_state(table: Arc<InvoiceTable>) -> Arc<AppState> {
    Arc::new(AppState {
        queries: InvoiceQueries::new(table),
    })
}
