//! Item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stocked inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier, assigned by the store on creation.
    pub id: i64,
    /// Item name. Duplicates are permitted.
    pub name: String,
    /// Weak reference to a category. May point to a since-removed record.
    pub category_id: Option<i64>,
    /// Current stock count. Always non-negative.
    pub quantity: i64,
    /// Unit price. Always non-negative.
    pub price: f64,
    /// Threshold at or below which the item counts as low stock.
    pub min_stock: i64,
    /// Free-text supplier name.
    pub supplier: String,
    /// When the item was created. Immutable thereafter.
    pub date_added: DateTime<Utc>,
}

impl Item {
    /// Check whether this item is at or below its low-stock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    /// Stock value of this item: `quantity * price`.
    pub fn valuation(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Data required to create a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    /// Item name.
    pub name: String,
    /// Category reference (optional; existence is not enforced).
    pub category_id: Option<i64>,
    /// Initial stock count.
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
    /// Low-stock threshold.
    pub min_stock: i64,
    /// Supplier name.
    pub supplier: String,
}

/// Data for replacing an existing item's fields.
///
/// Everything except `id` and `date_added` is replaceable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItem {
    /// The item ID to update.
    pub id: i64,
    /// New item name.
    pub name: String,
    /// New category reference.
    pub category_id: Option<i64>,
    /// New stock count.
    pub quantity: i64,
    /// New unit price.
    pub price: f64,
    /// New low-stock threshold.
    pub min_stock: i64,
    /// New supplier name.
    pub supplier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, price: f64, min_stock: i64) -> Item {
        Item {
            id: 1,
            name: "Widget".to_string(),
            category_id: None,
            quantity,
            price,
            min_stock,
            supplier: String::new(),
            date_added: Utc::now(),
        }
    }

    #[test]
    fn test_low_stock_boundary_is_inclusive() {
        assert!(item(5, 1.0, 5).is_low_stock());
        assert!(item(4, 1.0, 5).is_low_stock());
        assert!(!item(6, 1.0, 5).is_low_stock());
    }

    #[test]
    fn test_valuation() {
        assert_eq!(item(3, 10.0, 0).valuation(), 30.0);
        assert_eq!(item(0, 99.0, 0).valuation(), 0.0);
    }
}
