//! Text report projections.

use std::fmt::Write;

use stockroom_entity::item::Item;

/// Width of the `=` separator line under report headers.
const SEPARATOR_WIDTH: usize = 30;

/// Render the low-stock report: one line per item, in input order.
pub fn low_stock_report(items: &[Item]) -> String {
    let mut report = format!("LOW STOCK REPORT\n{}\n", "=".repeat(SEPARATOR_WIDTH));
    for item in items {
        let _ = writeln!(
            report,
            "{}: {} (Min: {})",
            item.name, item.quantity, item.min_stock
        );
    }
    report
}

/// Render the full inventory report with a total-valuation trailer.
///
/// An empty inventory produces the header and a `$0` total, no item lines.
pub fn full_inventory_report(items: &[Item]) -> String {
    let mut report = format!("INVENTORY REPORT\n{}\n", "=".repeat(SEPARATOR_WIDTH));
    let mut total = 0.0;
    for item in items {
        let valuation = item.valuation();
        total += valuation;
        let _ = writeln!(
            report,
            "{}: {} @ ${} = ${}",
            item.name, item.quantity, item.price, valuation
        );
    }
    let _ = write!(report, "\nTotal Value: ${total}");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(name: &str, quantity: i64, price: f64, min_stock: i64) -> Item {
        Item {
            id: 0,
            name: name.to_string(),
            category_id: None,
            quantity,
            price,
            min_stock,
            supplier: String::new(),
            date_added: Utc::now(),
        }
    }

    #[test]
    fn test_low_stock_report_lines() {
        let items = vec![item("Bolts", 3, 0.1, 10), item("Nuts", 0, 0.05, 5)];
        let report = low_stock_report(&items);
        assert!(report.starts_with("LOW STOCK REPORT\n=============================="));
        assert!(report.contains("Bolts: 3 (Min: 10)"));
        assert!(report.contains("Nuts: 0 (Min: 5)"));
    }

    #[test]
    fn test_low_stock_report_preserves_order() {
        let items = vec![item("B", 1, 1.0, 2), item("A", 1, 1.0, 2)];
        let report = low_stock_report(&items);
        let b_pos = report.find("B: 1").unwrap();
        let a_pos = report.find("A: 1").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn test_inventory_report_totals() {
        let items = vec![item("Bolts", 2, 5.0, 0), item("Nuts", 3, 10.0, 0)];
        let report = full_inventory_report(&items);
        assert!(report.contains("Bolts: 2 @ $5 = $10"));
        assert!(report.contains("Nuts: 3 @ $10 = $30"));
        assert!(report.ends_with("Total Value: $40"));
    }

    #[test]
    fn test_inventory_report_empty() {
        let report = full_inventory_report(&[]);
        assert!(report.starts_with("INVENTORY REPORT\n"));
        assert!(report.ends_with("Total Value: $0"));
        // Header, separator, blank line, trailer: no item lines.
        assert_eq!(report.lines().count(), 4);
    }
}
