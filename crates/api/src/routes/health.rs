use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the auth session has processed its first provider notification.
    pub auth_ready: bool,
}

/// GET /health -- returns service and auth session readiness.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let auth_ready = !state.auth.is_loading();
    let status = if auth_ready { "ok" } else { "starting" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        auth_ready,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
