//! Liveness probe for the dashboard.
//!
//! `GET /health` answers without rendering a page, so it stays cheap for
//! load balancers. It reports `ok` when PostgreSQL answers `SELECT 1` and
//! `degraded` when it does not; the HTTP status is 200 either way.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    /// `inventory-api` package version.
    pub version: &'static str,
    /// Whether the item and warehouse store is reachable.
    pub db_healthy: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = inventory_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
