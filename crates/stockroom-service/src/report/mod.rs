//! Reporting projections.
//!
//! Pure, stateless transforms over [`InventoryService`](crate::InventoryService)
//! query results. Nothing here touches the store.

pub mod chart;
pub mod text;

pub use chart::{ChartPoint, Severity, stock_chart_series};
pub use text::{full_inventory_report, low_stock_report};
