//! Item management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use stockroom_core::error::AppError;
use stockroom_entity::item::{CreateItem, UpdateItem};

/// Arguments for item commands
#[derive(Debug, Args)]
pub struct ItemArgs {
    /// Item subcommand
    #[command(subcommand)]
    pub command: ItemCommand,
}

/// Item subcommands
#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    /// Add a new item
    Add {
        /// Item name
        name: String,
        /// Category ID (optional)
        #[arg(short, long)]
        category: Option<i64>,
        /// Stock count
        #[arg(short, long, default_value_t = 0)]
        quantity: i64,
        /// Unit price
        #[arg(short, long, default_value_t = 0.0)]
        price: f64,
        /// Low-stock threshold
        #[arg(short, long, default_value_t = 0)]
        min_stock: i64,
        /// Supplier name
        #[arg(short, long, default_value = "")]
        supplier: String,
    },
    /// Replace an item's fields
    Update {
        /// Item ID
        id: i64,
        /// Item name
        name: String,
        /// Category ID (optional)
        #[arg(short, long)]
        category: Option<i64>,
        /// Stock count
        #[arg(short, long, default_value_t = 0)]
        quantity: i64,
        /// Unit price
        #[arg(short, long, default_value_t = 0.0)]
        price: f64,
        /// Low-stock threshold
        #[arg(short, long, default_value_t = 0)]
        min_stock: i64,
        /// Supplier name
        #[arg(short, long, default_value = "")]
        supplier: String,
    },
    /// Delete an item
    Delete {
        /// Item ID
        id: i64,
    },
    /// List all items with their category name
    List,
}

/// Item display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ItemRow {
    /// Item ID
    id: i64,
    /// Item name
    name: String,
    /// Category name (blank when the reference dangles)
    category: String,
    /// Stock count
    quantity: i64,
    /// Unit price
    price: f64,
    /// Low-stock threshold
    min_stock: i64,
    /// Supplier
    supplier: String,
    /// Added at
    date_added: String,
}

/// Execute item commands
pub async fn execute(
    args: &ItemArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::create_service(config_path).await?;

    match &args.command {
        ItemCommand::Add {
            name,
            category,
            quantity,
            price,
            min_stock,
            supplier,
        } => {
            let item = service
                .add_item(CreateItem {
                    name: name.clone(),
                    category_id: *category,
                    quantity: *quantity,
                    price: *price,
                    min_stock: *min_stock,
                    supplier: supplier.clone(),
                })
                .await?;
            output::print_success(&format!("Item '{}' added (id {})", item.name, item.id));
        }
        ItemCommand::Update {
            id,
            name,
            category,
            quantity,
            price,
            min_stock,
            supplier,
        } => {
            let item = service
                .update_item(UpdateItem {
                    id: *id,
                    name: name.clone(),
                    category_id: *category,
                    quantity: *quantity,
                    price: *price,
                    min_stock: *min_stock,
                    supplier: supplier.clone(),
                })
                .await?;
            output::print_success(&format!("Item '{}' updated", item.name));
        }
        ItemCommand::Delete { id } => {
            service.delete_item(*id).await?;
            output::print_success(&format!("Item {} deleted", id));
        }
        ItemCommand::List => {
            let items = service.list_items_with_category().await?;
            let rows: Vec<ItemRow> = items
                .into_iter()
                .map(|i| ItemRow {
                    id: i.id,
                    name: i.name,
                    category: i.category_name.unwrap_or_default(),
                    quantity: i.quantity,
                    price: i.price,
                    min_stock: i.min_stock,
                    supplier: i.supplier,
                    date_added: i.date_added.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
