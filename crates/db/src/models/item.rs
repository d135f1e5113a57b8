//! Item entity model and DTOs.

use inventory_core::item_form::ValidatedItem;
use inventory_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An item row from the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub quantity: i32,
    pub warehouse_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An item joined with the name of its warehouse, if any.
#[derive(Debug, Clone, FromRow)]
pub struct ItemWithWarehouse {
    #[sqlx(flatten)]
    pub item: Item,
    pub warehouse_name: Option<String>,
}

/// Item fields written by both insert and update.
///
/// `warehouse_id` must already be resolved against `warehouses`.
#[derive(Debug, Clone)]
pub struct ItemFields {
    pub code: String,
    pub name: String,
    pub quantity: i32,
    pub warehouse_id: Option<DbId>,
}

/// DTO for creating a new item.
pub type CreateItem = ItemFields;

/// DTO for a full in-place update of an item.
pub type UpdateItem = ItemFields;

impl From<ValidatedItem> for ItemFields {
    fn from(value: ValidatedItem) -> Self {
        Self {
            code: value.code,
            name: value.name,
            quantity: value.quantity,
            warehouse_id: value.warehouse_id,
        }
    }
}
