//! Service banner and health check endpoints.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET / — service banner.
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Invoice & Billing API" }))
}

/// GET /health — returns service health status.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
