//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named grouping for inventory items.
///
/// Categories are append-only: items hold a weak reference to them and
/// deletion is never exposed, so a category is effectively immutable once
/// referenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier, assigned by the store on creation.
    pub id: i64,
    /// Category name, unique across all categories.
    pub name: String,
    /// Free-text description, may be empty.
    pub description: String,
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Category name.
    pub name: String,
    /// Free-text description.
    pub description: String,
}
