//! CLI command implementations.

pub mod config;
pub mod generate;
pub mod query;
pub mod render;
pub mod show;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Output file (default: generator.output from config).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// RNG seed for a reproducible catalog.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Overwrite an existing file without asking.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the query command.
#[derive(Args)]
pub struct QueryArgs {
    /// Search text matched against name, part number and models.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Page number; out-of-range pages are clamped.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Products per page (default: listing.page_size from config).
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Catalog file or URL (default: catalog.source from config).
    #[arg(long)]
    pub source: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID (e.g. KWSK-000001).
    pub id: String,

    /// Catalog file or URL (default: catalog.source from config).
    #[arg(long)]
    pub source: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(subcommand)]
    pub page: RenderPage,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Catalog file or URL (default: catalog.source from config).
    #[arg(long, global = true)]
    pub source: Option<String>,
}

#[derive(Subcommand)]
pub enum RenderPage {
    /// Home page with featured products.
    Home,
    /// Product list page.
    List {
        /// Search text.
        #[arg(short, long, default_value = "")]
        search: String,
        /// Page number.
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },
    /// Product detail page.
    Detail {
        /// Product ID.
        id: String,
    },
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
    /// Get a configuration value.
    Get {
        /// Config key (e.g., listing.page_size).
        key: String,
    },
    /// Set a configuration value.
    Set {
        /// Config key.
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate configuration.
    Validate,
}
