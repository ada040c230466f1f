//! Parts CLI - Command line tool for the excavator parts catalog.
//!
//! Commands:
//! - `parts generate` - Generate a sample catalog document
//! - `parts query` - Search and page through the catalog
//! - `parts show` - Show one product and its related products
//! - `parts render` - Render the home, list or detail page as HTML
//! - `parts config` - Manage configuration

mod commands;
mod config;
mod context;
mod generator;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, GenerateArgs, QueryArgs, RenderArgs, ShowArgs};

/// Parts CLI - Browse and render the excavator parts catalog
#[derive(Parser)]
#[command(name = "parts")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sample catalog document
    Generate(GenerateArgs),

    /// Search and page through the catalog
    Query(QueryArgs),

    /// Show a product with its related products
    Show(ShowArgs),

    /// Render a page as HTML
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &ctx).await,
        Commands::Query(args) => commands::query::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Library diagnostics go to stderr; `RUST_LOG` overrides the default level.
fn initialize_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}
