pub mod dashboard;
pub mod health;
pub mod items;
pub mod warehouses;

use axum::Router;

use crate::state::AppState;

/// Build the dashboard route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                         landing page
/// /dashboard/                               overview
///
/// /dashboard/items/                         paginated list (?page=)
/// /dashboard/items/add/                     add form (GET) / create (POST)
/// /dashboard/items/{item_id}/               detail
/// /dashboard/items/{item_id}/edit/          edit form (GET) / update (POST), ?redirect_url=
/// /dashboard/items/{item_id}/delete/        delete (GET or POST), ?redirect_url=
///
/// /dashboard/warehouses/                    list
/// /dashboard/warehouses/add/                add form (GET) / create (POST)
/// ```
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .merge(dashboard::router())
        .merge(items::router())
        .merge(warehouses::router())
}
