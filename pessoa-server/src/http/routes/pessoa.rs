//! Pessoa collection endpoint
//!
//! `GET /api/pessoa` returns every row of the backing table as a JSON array.
//! The resource segment is matched case-insensitively.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Pessoa;

/// Resource segment served under `/api`.
pub const RESOURCE: &str = "pessoa";

/// GET /api/{resource} - list all records
async fn list_pessoas(
    State(state): State<Arc<AppState>>,
    Path(resource): Path<String>,
) -> Result<Json<Vec<Pessoa>>, ApiError> {
    if !resource.eq_ignore_ascii_case(RESOURCE) {
        return Err(ApiError::NotFound {
            resource: "resource",
            id: resource,
        });
    }

    let rows = state.ctx.all().await?;
    Ok(Json(rows))
}

/// Pessoa routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/{resource}", get(list_pessoas))
}
