use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands {
    pub mod admin;
    pub mod cart;
    pub mod catalog;
}
mod config {
    pub mod app_config;
    pub mod backend_config;
    pub mod storage_config;
}
mod setup {
    pub mod dependency_injection;
}

use commands::admin::AdminCommand;
use commands::cart::CartCommand;
use commands::catalog::CatalogCommand;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Storefront CLI Entry Point
///
/// Initializes logging and configuration, wires dependencies, and
/// dispatches to the catalog, cart, and back-office commands.
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront catalog, cart, and back-office client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse the product catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),
    /// Manage the local shopping cart
    #[command(subcommand)]
    Cart(CartCommand),
    /// Back-office operations against the remote backend
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Dispatch
    let cli = Cli::parse();
    match cli.command {
        Command::Catalog(command) => commands::catalog::run(command, &container),
        Command::Cart(command) => commands::cart::run(command, &container),
        Command::Admin(command) => commands::admin::run(command, &container).await,
    }
}
