//! Repository for the `items` table.

use inventory_core::lookup::Lookup;
use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{CreateItem, Item, ItemWithWarehouse, UpdateItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, name, quantity, warehouse_id, created_at, updated_at";

/// Item columns qualified with the `i` alias, plus the joined warehouse name.
const JOINED_COLUMNS: &str = "i.id, i.code, i.name, i.quantity, i.warehouse_id, \
     i.created_at, i.updated_at, w.name AS warehouse_name";

/// Newest first; `id` makes the order total when timestamps collide.
const LIST_ORDER: &str = "ORDER BY i.created_at DESC, i.id DESC";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    ///
    /// Fails with a `uq_items_*` unique violation when another item already
    /// has the same code in the same warehouse (or with no warehouse).
    pub async fn create(pool: &PgPool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (code, name, quantity, warehouse_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.warehouse_id)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve an item by ID into a [`Lookup`].
    pub async fn lookup(pool: &PgPool, id: DbId) -> Result<Lookup<Item>, sqlx::Error> {
        Self::find_by_id(pool, id).await.map(Lookup::from)
    }

    /// Resolve an item by ID together with its warehouse name.
    pub async fn lookup_with_warehouse(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Lookup<ItemWithWarehouse>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM items i
             LEFT JOIN warehouses w ON w.id = i.warehouse_id
             WHERE i.id = $1"
        );
        sqlx::query_as::<_, ItemWithWarehouse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map(Lookup::from)
    }

    /// Count all items.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Sum of `quantity` across all items.
    pub async fn total_quantity(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COALESCE(SUM(quantity), 0)::BIGINT FROM items")
                .fetch_one(pool)
                .await?;
        Ok(total)
    }

    /// List one page of items, most recently created first.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ItemWithWarehouse>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM items i
             LEFT JOIN warehouses w ON w.id = i.warehouse_id
             {LIST_ORDER}
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ItemWithWarehouse>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recently created items.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<ItemWithWarehouse>, sqlx::Error> {
        Self::list_page(pool, limit, 0).await
    }

    /// Overwrite all editable fields of an item in a single statement.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                code = $2,
                name = $3,
                quantity = $4,
                warehouse_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.warehouse_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
