//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use stockroom_core::error::AppError;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path).await?;
    let pool = stockroom_database::connection::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            stockroom_database::migration::run_migrations(&pool).await?;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
