//! Shared test helpers for service integration tests.

use std::sync::Arc;

use stockroom_core::config::DatabaseConfig;
use stockroom_database::connection::DatabasePool;
use stockroom_database::migration::run_migrations;
use stockroom_database::repositories::category::CategoryRepository;
use stockroom_database::repositories::item::ItemRepository;
use stockroom_entity::item::CreateItem;
use stockroom_service::InventoryService;

/// Build an inventory service over a fresh in-memory database.
///
/// The pool is capped at one connection so every query sees the same
/// in-memory database.
pub async fn test_service() -> InventoryService {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..DatabaseConfig::default()
    };

    let pool = DatabasePool::connect(&config)
        .await
        .expect("Failed to open in-memory database")
        .into_pool();

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    InventoryService::new(
        Arc::new(ItemRepository::new(pool.clone())),
        Arc::new(CategoryRepository::new(pool)),
    )
}

/// Convenience builder for item write input.
pub fn create_item(name: &str, quantity: i64, price: f64, min_stock: i64) -> CreateItem {
    CreateItem {
        name: name.to_string(),
        category_id: None,
        quantity,
        price,
        min_stock,
        supplier: "Acme Supply".to_string(),
    }
}
