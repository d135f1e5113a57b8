//! Route definitions for the landing page and overview.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// ```text
/// GET /            -> index
/// GET /dashboard/  -> overview
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/dashboard/", get(dashboard::overview))
}
