//! Warehouse entity model and DTOs.

use inventory_core::types::{DbId, Timestamp};
use inventory_core::warehouse_form::ValidatedWarehouse;
use sqlx::FromRow;

/// A warehouse row from the `warehouses` table.
#[derive(Debug, Clone, FromRow)]
pub struct Warehouse {
    pub id: DbId,
    pub name: String,
    pub is_operational: bool,
    pub created_at: Timestamp,
}

/// A warehouse together with the number of items stored in it.
#[derive(Debug, Clone, FromRow)]
pub struct WarehouseSummary {
    #[sqlx(flatten)]
    pub warehouse: Warehouse,
    pub item_count: i64,
}

/// DTO for creating a new warehouse.
#[derive(Debug, Clone)]
pub struct CreateWarehouse {
    pub name: String,
    pub is_operational: bool,
}

impl From<ValidatedWarehouse> for CreateWarehouse {
    fn from(value: ValidatedWarehouse) -> Self {
        Self {
            name: value.name,
            is_operational: value.is_operational,
        }
    }
}
