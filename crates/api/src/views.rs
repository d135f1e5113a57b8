//! Page templates and the page rendering step.
//!
//! Each page struct is an askama template under `templates/`. All of them
//! extend `base.html`, which reads the shared [`Layout`] for navigation and
//! the flash notice banner.

use askama::Template;
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Response};
use inventory_core::notice::Notice;
use inventory_core::pagination::PageWindow;
use inventory_core::types::DbId;
use inventory_db::models::item::{Item, ItemWithWarehouse};
use inventory_db::models::warehouse::{Warehouse, WarehouseSummary};

use crate::error::AppResult;
use crate::flash::{self, IncomingFlash};

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const SECTION_HOME: &str = "home";
pub const SECTION_OVERVIEW: &str = "overview";
pub const SECTION_ITEMS: &str = "items";
pub const SECTION_WAREHOUSES: &str = "warehouses";

/// Data every page shares with `base.html`.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Navigation entry to highlight.
    pub section: &'static str,
    /// Notice left by the previous response, shown once.
    pub notice: Option<Notice>,
}

impl Layout {
    pub fn new(section: &'static str, flash: IncomingFlash) -> Self {
        Self {
            section,
            notice: flash.0,
        }
    }
}

/// Render `page` to HTML. When the layout displayed a flash notice the
/// response also expires the flash cookie so the notice shows only once.
pub fn render<T: Template>(page: &T, layout: &Layout) -> AppResult<Response> {
    let body = page.render()?;
    let mut response = Html(body).into_response();
    if layout.notice.is_some() {
        response
            .headers_mut()
            .append(SET_COOKIE, flash::clear_cookie_value());
    }
    Ok(response)
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub layout: Layout,
}

#[derive(Template)]
#[template(path = "dashboard/overview.html")]
pub struct OverviewPage {
    pub layout: Layout,
    pub item_count: i64,
    pub total_quantity: i64,
    pub warehouse_count: i64,
    pub operational_count: i64,
    pub recent: Vec<ItemWithWarehouse>,
}

#[derive(Template)]
#[template(path = "items/list.html")]
pub struct ItemListPage {
    pub layout: Layout,
    pub items: Vec<ItemWithWarehouse>,
    pub window: PageWindow,
    /// Percent-encoded URL of this page, passed as `redirect_url` to row actions.
    pub return_to: String,
}

#[derive(Template)]
#[template(path = "items/detail.html")]
pub struct ItemDetailPage {
    pub layout: Layout,
    pub row: ItemWithWarehouse,
}

#[derive(Template)]
#[template(path = "items/add.html")]
pub struct ItemAddPage {
    pub layout: Layout,
    pub warehouses: Vec<Warehouse>,
}

/// One `<option>` of the warehouse select on the edit page.
#[derive(Debug, Clone)]
pub struct WarehouseOption {
    pub id: DbId,
    pub name: String,
    pub selected: bool,
}

impl WarehouseOption {
    /// Build the options for `warehouses`, pre-selecting `current`.
    pub fn list(warehouses: Vec<Warehouse>, current: Option<DbId>) -> Vec<Self> {
        warehouses
            .into_iter()
            .map(|w| Self {
                selected: current == Some(w.id),
                id: w.id,
                name: w.name,
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "items/edit.html")]
pub struct ItemEditPage {
    pub layout: Layout,
    pub item: Item,
    pub warehouses: Vec<WarehouseOption>,
    /// True when the item's current warehouse is not among the options.
    pub none_selected: bool,
    /// Where a successful submit will go.
    pub redirect_target: String,
    /// Form `action`, carrying `redirect_url` through the POST.
    pub form_action: String,
}

#[derive(Template)]
#[template(path = "warehouses/list.html")]
pub struct WarehouseListPage {
    pub layout: Layout,
    pub warehouses: Vec<WarehouseSummary>,
}

#[derive(Template)]
#[template(path = "warehouses/add.html")]
pub struct WarehouseAddPage {
    pub layout: Layout,
}

/// Standalone error page; does not extend the layout.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub status: u16,
    pub reason: &'a str,
    pub message: &'a str,
}
