//! Customer-scoped invoice retrieval.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::CustomerId;

use crate::routes::invoices::{AppState, InvoiceResponse, to_responses};

/// GET /customers/{customer_id}/invoices — all invoices for a customer.
///
/// An unknown customer id yields an empty list, not a 404: the id space
/// is derived and there is no customer registry to miss against.
#[tracing::instrument(skip(state))]
pub async fn invoices(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> Json<Vec<InvoiceResponse>> {
    let customer_id = CustomerId::from_raw(customer_id);
    Json(to_responses(state.queries.by_customer(&customer_id)))
}
