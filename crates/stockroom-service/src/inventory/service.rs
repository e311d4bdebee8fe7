//! Inventory CRUD operations and derived views.
//!
//! All write validation lives here, before any repository call, so a
//! rejected write leaves the store untouched and every caller shares the
//! same rule set. Derived views re-query the store on every call; reads
//! are never stale.

use std::sync::Arc;

use tracing::info;

use stockroom_core::error::AppError;
use stockroom_core::result::AppResult;
use stockroom_database::repositories::category::CategoryRepository;
use stockroom_database::repositories::item::ItemRepository;
use stockroom_entity::category::{Category, CreateCategory};
use stockroom_entity::item::{CreateItem, Item, ItemWithCategory, StockLevel, UpdateItem};

/// The inventory domain core.
#[derive(Debug, Clone)]
pub struct InventoryService {
    /// Item repository.
    item_repo: Arc<ItemRepository>,
    /// Category repository.
    category_repo: Arc<CategoryRepository>,
}

/// Dashboard stat counts, computed fresh from store state on every call.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardCounts {
    /// Total number of items.
    pub total_items: u64,
    /// Number of items at or below their low-stock threshold.
    pub low_stock_count: u64,
    /// Total number of categories.
    pub total_categories: u64,
}

impl InventoryService {
    /// Creates a new inventory service.
    pub fn new(item_repo: Arc<ItemRepository>, category_repo: Arc<CategoryRepository>) -> Self {
        Self {
            item_repo,
            category_repo,
        }
    }

    // --- Categories ---

    /// Adds a new category after validating its name.
    pub async fn add_category(&self, data: CreateCategory) -> AppResult<Category> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Category name cannot be empty"));
        }
        if self.category_repo.find_by_name(&data.name).await?.is_some() {
            return Err(AppError::validation(format!(
                "Category '{}' already exists",
                data.name
            )));
        }

        let category = self.category_repo.create(&data).await?;
        info!(category_id = category.id, name = %category.name, "Category added");
        Ok(category)
    }

    /// Gets a category by ID.
    pub async fn get_category(&self, id: i64) -> AppResult<Category> {
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    /// Lists all categories in insertion order.
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.category_repo.find_all().await
    }

    // --- Items ---

    /// Adds a new item after validating its fields.
    ///
    /// The category reference is deliberately not checked for existence;
    /// a dangling reference resolves to a NULL category name in the join
    /// view instead of failing.
    pub async fn add_item(&self, data: CreateItem) -> AppResult<Item> {
        validate_item_fields(&data.name, data.quantity, data.price, data.min_stock)?;

        let item = self.item_repo.create(&data).await?;
        info!(item_id = item.id, name = %item.name, "Item added");
        Ok(item)
    }

    /// Gets an item by ID.
    pub async fn get_item(&self, id: i64) -> AppResult<Item> {
        self.item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))
    }

    /// Replaces an item's fields. `date_added` is never overwritten.
    pub async fn update_item(&self, data: UpdateItem) -> AppResult<Item> {
        validate_item_fields(&data.name, data.quantity, data.price, data.min_stock)?;

        let updated = self
            .item_repo
            .update(&data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {} not found", data.id)))?;
        info!(item_id = updated.id, "Item updated");
        Ok(updated)
    }

    /// Deletes an item by ID.
    ///
    /// Deleting an absent item fails with a not-found error: the store's
    /// "0 rows affected" is surfaced, never swallowed.
    pub async fn delete_item(&self, id: i64) -> AppResult<()> {
        let deleted = self.item_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Item {id} not found")));
        }
        info!(item_id = id, "Item deleted");
        Ok(())
    }

    /// Lists all items in insertion order.
    pub async fn list_items(&self) -> AppResult<Vec<Item>> {
        self.item_repo.find_all().await
    }

    /// Lists all items with their resolved category name.
    pub async fn list_items_with_category(&self) -> AppResult<Vec<ItemWithCategory>> {
        self.item_repo.find_all_with_category().await
    }

    // --- Derived views ---

    /// Items at or below their low-stock threshold, in listing order.
    pub async fn low_stock_items(&self) -> AppResult<Vec<Item>> {
        self.item_repo.find_low_stock().await
    }

    /// Sum of `quantity * price` over all items. Zero for an empty inventory.
    pub async fn total_valuation(&self) -> AppResult<f64> {
        self.item_repo.total_valuation().await
    }

    /// The `n` highest stock levels, sorted by quantity descending with
    /// ties broken by insertion order. `n <= 0` yields an empty sequence.
    pub async fn top_stock_levels(&self, n: i64) -> AppResult<Vec<StockLevel>> {
        if n <= 0 {
            return Ok(Vec::new());
        }
        self.item_repo.top_stock(n).await
    }

    /// Three independent counts computed from current store state.
    pub async fn dashboard_counts(&self) -> AppResult<DashboardCounts> {
        Ok(DashboardCounts {
            total_items: self.item_repo.count().await?,
            low_stock_count: self.item_repo.count_low_stock().await?,
            total_categories: self.category_repo.count().await?,
        })
    }
}

/// Validate item write input. Rejects rather than clamps violated invariants.
fn validate_item_fields(name: &str, quantity: i64, price: f64, min_stock: i64) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Item name cannot be empty"));
    }
    if quantity < 0 {
        return Err(AppError::validation("Quantity cannot be negative"));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::validation("Price must be a non-negative number"));
    }
    if min_stock < 0 {
        return Err(AppError::validation("Minimum stock cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields_pass() {
        assert!(validate_item_fields("Widget", 0, 0.0, 0).is_ok());
        assert!(validate_item_fields("Widget", 10, 2.5, 3).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = validate_item_fields("", 1, 1.0, 1).unwrap_err();
        assert!(err.is_validation());
        assert!(validate_item_fields("   ", 1, 1.0, 1).is_err());
    }

    #[test]
    fn test_negative_numbers_rejected() {
        assert!(validate_item_fields("Widget", -1, 1.0, 0).is_err());
        assert!(validate_item_fields("Widget", 1, -0.01, 0).is_err());
        assert!(validate_item_fields("Widget", 1, 1.0, -5).is_err());
    }

    #[test]
    fn test_non_finite_price_rejected() {
        assert!(validate_item_fields("Widget", 1, f64::NAN, 0).is_err());
        assert!(validate_item_fields("Widget", 1, f64::INFINITY, 0).is_err());
    }
}
