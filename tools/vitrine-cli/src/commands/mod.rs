//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod order;
pub mod routes;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only list products with stock left.
    #[arg(short, long)]
    pub available: bool,

    /// Only list products in this category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: u32,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Items as `ID:SIZE[:QTY]`, e.g. `1:M:2 4:P`.
    #[arg(required = true, value_name = "ITEM")]
    pub items: Vec<String>,

    /// Open the checkout link in the browser.
    #[arg(long)]
    pub open: bool,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the routes command.
#[derive(Args)]
pub struct RoutesArgs {
    /// Resolve a path instead of listing the table.
    #[arg(short, long, value_name = "PATH")]
    pub resolve: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Store name.
        #[arg(short, long)]
        name: Option<String>,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
