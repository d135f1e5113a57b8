//! Handlers for the `/dashboard/warehouses` pages.

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use inventory_core::notice::{self, Notice};
use inventory_core::warehouse_form::{validate_warehouse_form, WarehouseForm};
use inventory_db::models::warehouse::CreateWarehouse;
use inventory_db::repositories::WarehouseRepo;

use crate::error::AppResult;
use crate::flash::{FlashRedirect, IncomingFlash};
use crate::state::AppState;
use crate::views::{self, Layout, WarehouseAddPage, WarehouseListPage, SECTION_WAREHOUSES};

pub const WAREHOUSE_LIST_PATH: &str = "/dashboard/warehouses/";
pub const WAREHOUSE_ADD_PATH: &str = "/dashboard/warehouses/add/";

/// GET /dashboard/warehouses/
///
/// All warehouses, operational or not, with their item counts.
pub async fn list(State(state): State<AppState>, flash: IncomingFlash) -> AppResult<Response> {
    let warehouses = WarehouseRepo::list_with_item_counts(&state.pool).await?;
    let page = WarehouseListPage {
        layout: Layout::new(SECTION_WAREHOUSES, flash),
        warehouses,
    };
    views::render(&page, &page.layout)
}

/// GET /dashboard/warehouses/add/
pub async fn add_page(flash: IncomingFlash) -> AppResult<Response> {
    let page = WarehouseAddPage {
        layout: Layout::new(SECTION_WAREHOUSES, flash),
    };
    views::render(&page, &page.layout)
}

/// POST /dashboard/warehouses/add/
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<WarehouseForm>,
) -> AppResult<FlashRedirect> {
    let validated = match validate_warehouse_form(&form) {
        Ok(validated) => validated,
        Err(err) => {
            tracing::warn!(error = %err, "Rejected warehouse form");
            return Ok(FlashRedirect::to(WAREHOUSE_ADD_PATH)
                .with_notice(Notice::error(notice::MSG_INVALID_FORM)));
        }
    };

    let warehouse = WarehouseRepo::create(&state.pool, &CreateWarehouse::from(validated)).await?;
    tracing::info!(
        warehouse_id = %warehouse.id,
        name = %warehouse.name,
        is_operational = warehouse.is_operational,
        "Warehouse created"
    );

    Ok(FlashRedirect::to(WAREHOUSE_LIST_PATH)
        .with_notice(Notice::success(notice::MSG_WAREHOUSE_ADDED)))
}
