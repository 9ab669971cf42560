use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod commands;
mod config;
mod error_mapper;
mod navigator;
mod setup;

use cli::Cli;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Catalog CLI Entry Point
///
/// Initializes logging and configuration, wires dependencies, and runs one command.
/// - config/: Environment configuration (service, session file, listing)
/// - setup/: Dependency injection
/// - commands/: Command handlers and terminal rendering
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run command
    if let Err(e) = commands::run(cli.command, &container).await {
        tracing::debug!("command failed: {:?}", e);
        eprintln!("{}", error_mapper::describe(&e));
        std::process::exit(1);
    }

    Ok(())
}
