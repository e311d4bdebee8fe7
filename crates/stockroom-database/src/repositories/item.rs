//! Item repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use stockroom_core::error::{AppError, ErrorKind};
use stockroom_core::result::AppResult;
use stockroom_entity::item::{CreateItem, Item, ItemWithCategory, StockLevel, UpdateItem};

/// Repository for item CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find an item by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find item by id", e)
            })
    }

    /// List all items in insertion order.
    pub async fn find_all(&self) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    /// List all items joined with their resolved category name.
    ///
    /// The LEFT JOIN resolves a dangling or missing category reference
    /// to a NULL name rather than dropping the row.
    pub async fn find_all_with_category(&self) -> AppResult<Vec<ItemWithCategory>> {
        sqlx::query_as::<_, ItemWithCategory>(
            "SELECT i.id, i.name, c.name AS category_name, i.quantity, i.price, \
                    i.min_stock, i.supplier, i.date_added \
             FROM items i LEFT JOIN categories c ON i.category_id = c.id \
             ORDER BY i.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list items with categories", e)
        })
    }

    /// List items at or below their low-stock threshold, in insertion order.
    pub async fn find_low_stock(&self) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE quantity <= min_stock ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list low-stock items", e)
            })
    }

    /// List the `limit` highest stock levels, ties broken by insertion order.
    pub async fn top_stock(&self, limit: i64) -> AppResult<Vec<StockLevel>> {
        sqlx::query_as::<_, StockLevel>(
            "SELECT name, quantity FROM items ORDER BY quantity DESC, id ASC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to query stock levels", e)
        })
    }

    /// Sum of `quantity * price` over all items. Zero for an empty table.
    pub async fn total_valuation(&self) -> AppResult<f64> {
        sqlx::query_scalar("SELECT COALESCE(SUM(quantity * price), 0.0) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to compute total valuation", e)
            })
    }

    /// Create a new item. `date_added` is captured here and never updated.
    ///
    /// The category reference is not checked for existence; a dangling
    /// reference is tolerated and resolves to NULL in the join view.
    pub async fn create(&self, data: &CreateItem) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, category_id, quantity, price, min_stock, supplier, date_added) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(data.category_id)
        .bind(data.quantity)
        .bind(data.price)
        .bind(data.min_stock)
        .bind(&data.supplier)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create item", e))
    }

    /// Replace an item's fields. `id` and `date_added` are never touched.
    ///
    /// Returns `None` when no row matched the id.
    pub async fn update(&self, data: &UpdateItem) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET name = ?, category_id = ?, quantity = ?, price = ?, \
                              min_stock = ?, supplier = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(&data.name)
        .bind(data.category_id)
        .bind(data.quantity)
        .bind(data.price)
        .bind(data.min_stock)
        .bind(&data.supplier)
        .bind(data.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item", e))
    }

    /// Delete an item by ID. Returns `true` if a row was deleted.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total items.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count items", e))?;
        Ok(count as u64)
    }

    /// Count items at or below their low-stock threshold.
    pub async fn count_low_stock(&self) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE quantity <= min_stock")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count low-stock items", e)
                })?;
        Ok(count as u64)
    }
}
