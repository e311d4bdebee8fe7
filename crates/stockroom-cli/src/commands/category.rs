//! Category management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use stockroom_core::error::AppError;
use stockroom_entity::category::CreateCategory;

/// Arguments for category commands
#[derive(Debug, Args)]
pub struct CategoryArgs {
    /// Category subcommand
    #[command(subcommand)]
    pub command: CategoryCommand,
}

/// Category subcommands
#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List all categories
    List,
    /// Show a single category
    Show {
        /// Category ID
        id: i64,
    },
}

/// Category display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    /// Category ID
    id: i64,
    /// Category name
    name: String,
    /// Description
    description: String,
}

/// Execute category commands
pub async fn execute(
    args: &CategoryArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::create_service(config_path).await?;

    match &args.command {
        CategoryCommand::Add { name, description } => {
            let category = service
                .add_category(CreateCategory {
                    name: name.clone(),
                    description: description.clone(),
                })
                .await?;
            output::print_success(&format!("Category '{}' added (id {})", category.name, category.id));
        }
        CategoryCommand::List => {
            let categories = service.list_categories().await?;
            let rows: Vec<CategoryRow> = categories
                .into_iter()
                .map(|c| CategoryRow {
                    id: c.id,
                    name: c.name,
                    description: c.description,
                })
                .collect();
            output::print_list(&rows, format);
        }
        CategoryCommand::Show { id } => {
            let category = service.get_category(*id).await?;
            output::print_item(&category, format);
        }
    }

    Ok(())
}
