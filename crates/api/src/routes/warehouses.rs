//! Route definitions for warehouses.

use axum::routing::get;
use axum::Router;

use crate::handlers::warehouses;
use crate::state::AppState;

/// ```text
/// GET       /dashboard/warehouses/      -> list
/// GET/POST  /dashboard/warehouses/add/  -> add_page / add
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard/warehouses/", get(warehouses::list))
        .route(
            "/dashboard/warehouses/add/",
            get(warehouses::add_page).post(warehouses::add),
        )
}
