//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match state.ctx.ping().await {
        Ok(()) => (StatusCode::OK, "up"),
        Err(e) => {
            tracing::warn!("health check: database unreachable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "down")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: if status.is_success() { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
