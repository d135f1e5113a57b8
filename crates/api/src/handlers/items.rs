//! Handlers for the `/dashboard/items` pages.
//!
//! Every path ends in either a rendered page or a `303` redirect carrying an
//! explicit notice. Expected failures (invalid form, unknown warehouse,
//! duplicate `(code, warehouse)`) never surface as errors; only unexpected
//! datastore or template failures become an [`AppError`](crate::error::AppError).

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use inventory_core::item_form::{validate_item_form, ItemForm, ValidatedItem};
use inventory_core::lookup::Lookup;
use inventory_core::notice::{self, Notice};
use inventory_core::pagination::PageWindow;
use inventory_core::redirect::{
    encode_query_value, is_local_path, safe_redirect_target, with_redirect_url,
};
use inventory_core::types::DbId;
use inventory_db::models::item::ItemFields;
use inventory_db::repositories::{ItemRepo, WarehouseRepo};
use inventory_db::DbPool;

use crate::error::AppResult;
use crate::flash::{FlashRedirect, IncomingFlash};
use crate::query::{PageParams, RedirectParams};
use crate::state::AppState;
use crate::views::{
    self, ItemAddPage, ItemDetailPage, ItemEditPage, ItemListPage, Layout, WarehouseOption,
    SECTION_ITEMS,
};

pub const ITEM_LIST_PATH: &str = "/dashboard/items/";
pub const ITEM_ADD_PATH: &str = "/dashboard/items/add/";

fn edit_path(item_id: DbId) -> String {
    format!("/dashboard/items/{item_id}/edit/")
}

/// Caller-supplied `redirect_url`, kept only when it is a local path.
fn local_redirect_url(params: &RedirectParams) -> Option<&str> {
    params
        .redirect_url
        .as_deref()
        .map(str::trim)
        .filter(|target| is_local_path(target))
}

/// Outcome of checking a form's optional warehouse reference.
enum WarehouseCheck {
    Resolved,
    Missing(DbId),
}

/// Confirm that the validated form's warehouse, if any, exists.
async fn check_warehouse(pool: &DbPool, item: &ValidatedItem) -> AppResult<WarehouseCheck> {
    match item.warehouse_id {
        None => Ok(WarehouseCheck::Resolved),
        Some(id) => match WarehouseRepo::find_by_id(pool, id).await? {
            Some(_) => Ok(WarehouseCheck::Resolved),
            None => Ok(WarehouseCheck::Missing(id)),
        },
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// GET /dashboard/items/?page=N
///
/// Newest items first, `MAX_PAGE_SIZE` per page. Out-of-range page numbers
/// resolve to the nearest valid page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    flash: IncomingFlash,
) -> AppResult<Response> {
    let total = ItemRepo::count(&state.pool).await?;
    let window = PageWindow::resolve(params.page.as_deref(), total, state.config.max_page_size);
    let items = ItemRepo::list_page(&state.pool, window.limit(), window.offset()).await?;

    let return_to = encode_query_value(&format!("{ITEM_LIST_PATH}?page={}", window.number));
    let page = ItemListPage {
        layout: Layout::new(SECTION_ITEMS, flash),
        items,
        window,
        return_to,
    };
    views::render(&page, &page.layout)
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

/// GET /dashboard/items/add/
pub async fn add_page(State(state): State<AppState>, flash: IncomingFlash) -> AppResult<Response> {
    let warehouses = WarehouseRepo::list_operational(&state.pool).await?;
    let page = ItemAddPage {
        layout: Layout::new(SECTION_ITEMS, flash),
        warehouses,
    };
    views::render(&page, &page.layout)
}

/// POST /dashboard/items/add/
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> AppResult<FlashRedirect> {
    let validated = match validate_item_form(&form) {
        Ok(validated) => validated,
        Err(err) => {
            tracing::warn!(error = %err, "Rejected item form");
            return Ok(FlashRedirect::to(ITEM_ADD_PATH)
                .with_notice(Notice::error(notice::MSG_INVALID_FORM)));
        }
    };

    if let WarehouseCheck::Missing(warehouse_id) = check_warehouse(&state.pool, &validated).await? {
        tracing::warn!(%warehouse_id, "Item form references unknown warehouse");
        return Ok(FlashRedirect::to(ITEM_ADD_PATH)
            .with_notice(Notice::error(notice::MSG_WAREHOUSE_NOT_FOUND)));
    }

    match ItemRepo::create(&state.pool, &ItemFields::from(validated)).await {
        Ok(item) => {
            tracing::info!(item_id = %item.id, code = %item.code, "Item created");
            Ok(FlashRedirect::to(ITEM_LIST_PATH)
                .with_notice(Notice::success(notice::MSG_ITEM_ADDED)))
        }
        Err(err) if inventory_db::is_unique_violation(&err) => {
            tracing::info!(error = %err, "Duplicate item rejected");
            Ok(FlashRedirect::to(ITEM_LIST_PATH)
                .with_notice(Notice::warning(notice::MSG_ITEM_EXISTS)))
        }
        Err(err) => Err(err.into()),
    }
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// GET /dashboard/items/{item_id}/
///
/// An unknown item redirects to the list with an error notice.
pub async fn detail(
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    flash: IncomingFlash,
) -> AppResult<Response> {
    match ItemRepo::lookup_with_warehouse(&state.pool, item_id).await? {
        Lookup::Found(row) => {
            let page = ItemDetailPage {
                layout: Layout::new(SECTION_ITEMS, flash),
                row,
            };
            views::render(&page, &page.layout)
        }
        Lookup::NotFound => {
            tracing::debug!(%item_id, "Item detail requested for unknown item");
            Ok(FlashRedirect::to(ITEM_LIST_PATH)
                .with_notice(Notice::error(notice::MSG_ITEM_NOT_FOUND))
                .into_response())
        }
    }
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// GET /dashboard/items/{item_id}/edit/?redirect_url=
///
/// An unknown item redirects to the list without a notice.
pub async fn edit_page(
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Query(params): Query<RedirectParams>,
    flash: IncomingFlash,
) -> AppResult<Response> {
    let Lookup::Found(item) = ItemRepo::lookup(&state.pool, item_id).await? else {
        return Ok(FlashRedirect::to(ITEM_LIST_PATH).into_response());
    };

    let warehouses = WarehouseRepo::list_operational(&state.pool).await?;
    let warehouses = WarehouseOption::list(warehouses, item.warehouse_id);
    let none_selected = !warehouses.iter().any(|option| option.selected);
    let redirect_target = safe_redirect_target(params.redirect_url.as_deref(), ITEM_LIST_PATH);
    let form_action = with_redirect_url(&edit_path(item.id), local_redirect_url(&params));

    let page = ItemEditPage {
        layout: Layout::new(SECTION_ITEMS, flash),
        item,
        warehouses,
        none_selected,
        redirect_target,
        form_action,
    };
    views::render(&page, &page.layout)
}

/// POST /dashboard/items/{item_id}/edit/?redirect_url=
///
/// All references are resolved before the single `UPDATE`, so a rejected
/// submission leaves the item untouched.
pub async fn edit(
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Query(params): Query<RedirectParams>,
    Form(form): Form<ItemForm>,
) -> AppResult<FlashRedirect> {
    let Lookup::Found(item) = ItemRepo::lookup(&state.pool, item_id).await? else {
        return Ok(FlashRedirect::to(ITEM_LIST_PATH));
    };

    let back = with_redirect_url(&edit_path(item.id), local_redirect_url(&params));

    let validated = match validate_item_form(&form) {
        Ok(validated) => validated,
        Err(err) => {
            tracing::warn!(%item_id, error = %err, "Rejected item edit form");
            return Ok(FlashRedirect::to(back).with_notice(Notice::error(notice::MSG_INVALID_FORM)));
        }
    };

    if let WarehouseCheck::Missing(warehouse_id) = check_warehouse(&state.pool, &validated).await? {
        tracing::warn!(%item_id, %warehouse_id, "Item edit references unknown warehouse");
        return Ok(
            FlashRedirect::to(back).with_notice(Notice::error(notice::MSG_WAREHOUSE_NOT_FOUND))
        );
    }

    match ItemRepo::update(&state.pool, item.id, &ItemFields::from(validated)).await {
        Ok(Some(updated)) => {
            tracing::info!(item_id = %updated.id, code = %updated.code, "Item updated");
            let target = safe_redirect_target(params.redirect_url.as_deref(), ITEM_LIST_PATH);
            Ok(FlashRedirect::to(target)
                .with_notice(Notice::success(notice::item_edited_message(&updated.code))))
        }
        // Deleted between lookup and update.
        Ok(None) => Ok(FlashRedirect::to(ITEM_LIST_PATH)),
        Err(err) if inventory_db::is_unique_violation(&err) => {
            tracing::info!(%item_id, error = %err, "Item edit would duplicate code and warehouse");
            Ok(FlashRedirect::to(back).with_notice(Notice::warning(notice::MSG_ITEM_EXISTS)))
        }
        Err(err) => Err(err.into()),
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// GET|POST /dashboard/items/{item_id}/delete/?redirect_url=
///
/// Deleting an unknown item is a silent no-op redirect to the list. Other
/// datastore failures propagate.
pub async fn delete(
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Query(params): Query<RedirectParams>,
) -> AppResult<FlashRedirect> {
    let Lookup::Found(item) = ItemRepo::lookup(&state.pool, item_id).await? else {
        return Ok(FlashRedirect::to(ITEM_LIST_PATH));
    };

    if !ItemRepo::delete(&state.pool, item.id).await? {
        return Ok(FlashRedirect::to(ITEM_LIST_PATH));
    }

    tracing::info!(item_id = %item.id, code = %item.code, "Item deleted");
    let target = safe_redirect_target(params.redirect_url.as_deref(), ITEM_LIST_PATH);
    Ok(FlashRedirect::to(target).with_notice(Notice::success(notice::MSG_ITEM_DELETED)))
}
