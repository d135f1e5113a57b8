//! Route definitions for items.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// ```text
/// GET       /dashboard/items/                    -> list
/// GET/POST  /dashboard/items/add/                -> add_page / add
/// GET       /dashboard/items/{item_id}/          -> detail
/// GET/POST  /dashboard/items/{item_id}/edit/     -> edit_page / edit
/// GET/POST  /dashboard/items/{item_id}/delete/   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard/items/", get(items::list))
        .route(
            "/dashboard/items/add/",
            get(items::add_page).post(items::add),
        )
        .route("/dashboard/items/{item_id}/", get(items::detail))
        .route(
            "/dashboard/items/{item_id}/edit/",
            get(items::edit_page).post(items::edit),
        )
        .route(
            "/dashboard/items/{item_id}/delete/",
            get(items::delete).post(items::delete),
        )
}
