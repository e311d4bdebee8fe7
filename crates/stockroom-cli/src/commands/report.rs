//! Text report CLI commands.

use clap::{Args, Subcommand};

use stockroom_core::error::AppError;
use stockroom_service::report::{full_inventory_report, low_stock_report};

/// Arguments for report commands
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report subcommand
    #[command(subcommand)]
    pub command: ReportCommand,
}

/// Report subcommands
#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Items at or below their low-stock threshold
    LowStock,
    /// Full inventory with total valuation
    Inventory,
}

/// Execute report commands
pub async fn execute(args: &ReportArgs, config_path: &str) -> Result<(), AppError> {
    let service = super::create_service(config_path).await?;

    match &args.command {
        ReportCommand::LowStock => {
            let items = service.low_stock_items().await?;
            println!("{}", low_stock_report(&items));
        }
        ReportCommand::Inventory => {
            let items = service.list_items().await?;
            println!("{}", full_inventory_report(&items));
        }
    }

    Ok(())
}
