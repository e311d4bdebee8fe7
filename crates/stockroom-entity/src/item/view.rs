//! Query views over items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An item joined with its resolved category name.
///
/// `category_name` is `None` when the item is uncategorized or when its
/// category reference dangles (the category was removed). A dangling
/// reference is never an error.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ItemWithCategory {
    /// Item identifier.
    pub id: i64,
    /// Item name.
    pub name: String,
    /// Resolved category name, if the reference resolves.
    pub category_name: Option<String>,
    /// Current stock count.
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
    /// Low-stock threshold.
    pub min_stock: i64,
    /// Supplier name.
    pub supplier: String,
    /// When the item was created.
    pub date_added: DateTime<Utc>,
}

/// A `(name, quantity)` pair for stock-level charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StockLevel {
    /// Item name.
    pub name: String,
    /// Current stock count.
    pub quantity: i64,
}
