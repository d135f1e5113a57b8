//! Landing page and dashboard overview.

use axum::extract::State;
use axum::response::Response;
use inventory_db::repositories::{ItemRepo, WarehouseRepo};

use crate::error::AppResult;
use crate::flash::IncomingFlash;
use crate::state::AppState;
use crate::views::{self, IndexPage, Layout, OverviewPage, SECTION_HOME, SECTION_OVERVIEW};

/// Number of items shown under "Recently added" on the overview.
const RECENT_ITEMS: i64 = 5;

/// GET /
pub async fn index(flash: IncomingFlash) -> AppResult<Response> {
    let page = IndexPage {
        layout: Layout::new(SECTION_HOME, flash),
    };
    views::render(&page, &page.layout)
}

/// GET /dashboard/
pub async fn overview(State(state): State<AppState>, flash: IncomingFlash) -> AppResult<Response> {
    let item_count = ItemRepo::count(&state.pool).await?;
    let total_quantity = ItemRepo::total_quantity(&state.pool).await?;
    let (warehouse_count, operational_count) = WarehouseRepo::counts(&state.pool).await?;
    let recent = ItemRepo::recent(&state.pool, RECENT_ITEMS).await?;

    let page = OverviewPage {
        layout: Layout::new(SECTION_OVERVIEW, flash),
        item_count,
        total_quantity,
        warehouse_count,
        operational_count,
        recent,
    };
    views::render(&page, &page.layout)
}
