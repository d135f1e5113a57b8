//! Repository for the `warehouses` table.

use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::warehouse::{CreateWarehouse, Warehouse, WarehouseSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, is_operational, created_at";

/// Provides create/read operations for warehouses.
pub struct WarehouseRepo;

impl WarehouseRepo {
    /// Insert a new warehouse, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateWarehouse) -> Result<Warehouse, sqlx::Error> {
        let query = format!(
            "INSERT INTO warehouses (name, is_operational)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Warehouse>(&query)
            .bind(&input.name)
            .bind(input.is_operational)
            .fetch_one(pool)
            .await
    }

    /// Find a warehouse by ID, regardless of its operational status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Warehouse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM warehouses WHERE id = $1");
        sqlx::query_as::<_, Warehouse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List operational warehouses, the only ones offered in item forms.
    ///
    /// Ordered by name.
    pub async fn list_operational(pool: &PgPool) -> Result<Vec<Warehouse>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM warehouses WHERE is_operational = true ORDER BY name, id"
        );
        sqlx::query_as::<_, Warehouse>(&query).fetch_all(pool).await
    }

    /// List every warehouse with its item count, ordered by name.
    pub async fn list_with_item_counts(
        pool: &PgPool,
    ) -> Result<Vec<WarehouseSummary>, sqlx::Error> {
        sqlx::query_as::<_, WarehouseSummary>(
            "SELECT w.id, w.name, w.is_operational, w.created_at,
                    COUNT(i.id) AS item_count
             FROM warehouses w
             LEFT JOIN items i ON i.warehouse_id = w.id
             GROUP BY w.id
             ORDER BY w.name, w.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Count warehouses, returning `(total, operational)`.
    pub async fn counts(pool: &PgPool) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE is_operational) FROM warehouses",
        )
        .fetch_one(pool)
        .await
    }
}
