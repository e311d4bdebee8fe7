//! # stockroom-service
//!
//! Business logic layer for Stockroom. [`InventoryService`] is the domain
//! core every caller (CLI, API, tests) goes through instead of talking to
//! the repositories directly: it validates all writes against one rule set
//! and computes the derived views (low stock, valuation, top stock levels,
//! dashboard counts). The `report` module holds pure projections that turn
//! service query results into report text and chart-ready series.
//!
//! Services follow constructor injection — repositories are provided at
//! construction time via `Arc` references.

pub mod inventory;
pub mod report;

pub use inventory::{DashboardCounts, InventoryService};
pub use report::{ChartPoint, Severity, full_inventory_report, low_stock_report, stock_chart_series};
