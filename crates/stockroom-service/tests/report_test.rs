//! Integration tests for report projections over live service output.

mod common;

use common::{create_item, test_service};
use stockroom_service::report::{
    Severity, full_inventory_report, low_stock_report, stock_chart_series,
};

#[tokio::test]
async fn low_stock_report_lists_only_low_items() {
    let service = test_service().await;

    service.add_item(create_item("Bolts", 3, 0.25, 10)).await.unwrap();
    service.add_item(create_item("Nuts", 50, 0.1, 10)).await.unwrap();

    let low = service.low_stock_items().await.unwrap();
    let report = low_stock_report(&low);

    assert!(report.contains("Bolts: 3 (Min: 10)"));
    assert!(!report.contains("Nuts"));
}

#[tokio::test]
async fn inventory_report_on_empty_store_has_zero_total() {
    let service = test_service().await;

    let items = service.list_items().await.unwrap();
    let report = full_inventory_report(&items);

    assert!(report.starts_with("INVENTORY REPORT\n"));
    assert!(report.ends_with("Total Value: $0"));
}

#[tokio::test]
async fn chart_series_follows_top_stock_order() {
    let service = test_service().await;

    service.add_item(create_item("Critical", 4, 1.0, 0)).await.unwrap();
    service.add_item(create_item("Warning", 15, 1.0, 0)).await.unwrap();
    service.add_item(create_item("Normal", 60, 1.0, 0)).await.unwrap();

    let levels = service.top_stock_levels(10).await.unwrap();
    let series = stock_chart_series(&levels);

    assert_eq!(series.len(), 3);
    assert_eq!(series[0].label, "Normal");
    assert_eq!(series[0].severity, Severity::Normal);
    assert_eq!(series[1].label, "Warning");
    assert_eq!(series[1].severity, Severity::Warning);
    assert_eq!(series[2].label, "Critical");
    assert_eq!(series[2].severity, Severity::Critical);
}
