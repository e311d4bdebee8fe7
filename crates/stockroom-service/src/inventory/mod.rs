//! Inventory domain core.

pub mod service;

pub use service::{DashboardCounts, InventoryService};
