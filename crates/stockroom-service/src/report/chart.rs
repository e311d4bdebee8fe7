//! Chart-ready series projection.

use std::fmt;

use serde::{Deserialize, Serialize};

use stockroom_entity::item::StockLevel;

/// Quantity below which a bar renders as critical.
const CRITICAL_BELOW: i64 = 10;
/// Quantity below which a bar renders as a warning.
const WARNING_BELOW: i64 = 20;

/// Severity tier for a stock-level bar.
///
/// Thresholds are fixed application-wide constants, not derived from an
/// item's `min_stock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Quantity below 10.
    Critical,
    /// Quantity below 20.
    Warning,
    /// Quantity 20 or above.
    Normal,
}

impl Severity {
    /// Classify a quantity into its severity tier.
    pub fn for_quantity(quantity: i64) -> Self {
        if quantity < CRITICAL_BELOW {
            Self::Critical
        } else if quantity < WARNING_BELOW {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    /// Return the tier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One bar of the stock-level chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Bar label (item name).
    pub label: String,
    /// Bar value (quantity).
    pub value: i64,
    /// Severity tier of the bar.
    pub severity: Severity,
}

/// Turn stock levels into chart-ready points, preserving input order.
pub fn stock_chart_series(levels: &[StockLevel]) -> Vec<ChartPoint> {
    levels
        .iter()
        .map(|level| ChartPoint {
            label: level.name.clone(),
            value: level.quantity,
            severity: Severity::for_quantity(level.quantity),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::for_quantity(0), Severity::Critical);
        assert_eq!(Severity::for_quantity(9), Severity::Critical);
        assert_eq!(Severity::for_quantity(10), Severity::Warning);
        assert_eq!(Severity::for_quantity(19), Severity::Warning);
        assert_eq!(Severity::for_quantity(20), Severity::Normal);
        assert_eq!(Severity::for_quantity(500), Severity::Normal);
    }

    #[test]
    fn test_series_preserves_order_and_labels() {
        let levels = vec![
            StockLevel {
                name: "Bolts".to_string(),
                quantity: 25,
            },
            StockLevel {
                name: "Nuts".to_string(),
                quantity: 5,
            },
        ];
        let series = stock_chart_series(&levels);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Bolts");
        assert_eq!(series[0].severity, Severity::Normal);
        assert_eq!(series[1].label, "Nuts");
        assert_eq!(series[1].severity, Severity::Critical);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
