//! CLI command definitions and dispatch.

pub mod category;
pub mod dashboard;
pub mod item;
pub mod migrate;
pub mod report;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use stockroom_core::error::AppError;
use stockroom_database::repositories::category::CategoryRepository;
use stockroom_database::repositories::item::ItemRepository;
use stockroom_service::InventoryService;

/// Stockroom — single-user inventory tracker
#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Item management
    Item(item::ItemArgs),
    /// Category management
    Category(category::CategoryArgs),
    /// Text reports
    Report(report::ReportArgs),
    /// Stat counts and stock-level chart
    Dashboard(dashboard::DashboardArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Item(args) => item::execute(args, &self.config, self.format).await,
            Commands::Category(args) => category::execute(args, &self.config, self.format).await,
            Commands::Report(args) => report::execute(args, &self.config).await,
            Commands::Dashboard(args) => dashboard::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub async fn load_config(config_path: &str) -> Result<stockroom_core::config::AppConfig, AppError> {
    stockroom_core::config::AppConfig::load(config_path)
}

/// Helper: build the inventory service from config
pub async fn create_service(config_path: &str) -> Result<InventoryService, AppError> {
    let config = load_config(config_path).await?;
    let pool = stockroom_database::connection::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    Ok(InventoryService::new(
        Arc::new(ItemRepository::new(pool.clone())),
        Arc::new(CategoryRepository::new(pool)),
    ))
}
