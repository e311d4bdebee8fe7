//! Dashboard CLI command: stat counts plus a textual stock-level chart.

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use stockroom_core::error::AppError;
use stockroom_service::report::{ChartPoint, Severity, stock_chart_series};

/// Number of items shown in the stock-level chart.
const CHART_TOP_N: i64 = 10;
/// Maximum width of a chart bar in characters.
const BAR_WIDTH: usize = 40;

/// Arguments for the dashboard command
#[derive(Debug, Args)]
pub struct DashboardArgs {}

/// Combined dashboard payload for JSON output
#[derive(Debug, Serialize)]
struct Dashboard {
    /// Stat counts
    counts: stockroom_service::DashboardCounts,
    /// Total inventory valuation
    total_valuation: f64,
    /// Top stock levels with severity tiers
    stock_levels: Vec<ChartPoint>,
}

/// Execute the dashboard command
pub async fn execute(
    _args: &DashboardArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::create_service(config_path).await?;

    let counts = service.dashboard_counts().await?;
    let total_valuation = service.total_valuation().await?;
    let levels = service.top_stock_levels(CHART_TOP_N).await?;
    let series = stock_chart_series(&levels);

    match format {
        OutputFormat::Json => {
            let dashboard = Dashboard {
                counts,
                total_valuation,
                stock_levels: series,
            };
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        }
        OutputFormat::Table => {
            println!("DASHBOARD");
            output::print_kv("Total items", &counts.total_items.to_string());
            output::print_kv("Low stock", &counts.low_stock_count.to_string());
            output::print_kv("Categories", &counts.total_categories.to_string());
            output::print_kv("Total value", &format!("${total_valuation}"));

            if !series.is_empty() {
                println!("\nStock levels:");
                print_chart(&series);
            }
        }
    }

    Ok(())
}

/// Render chart points as horizontal bars scaled to the largest value.
fn print_chart(series: &[ChartPoint]) {
    let max = series.iter().map(|p| p.value).max().unwrap_or(0).max(1);
    let label_width = series.iter().map(|p| p.label.len()).max().unwrap_or(0);

    for point in series {
        let len = ((point.value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
        let marker = match point.severity {
            Severity::Critical => "!",
            Severity::Warning => "~",
            Severity::Normal => " ",
        };
        println!(
            "  {:<label_width$} {} {:<BAR_WIDTH$} {}",
            point.label,
            marker,
            "#".repeat(len),
            point.value,
        );
    }
}
