//! Bookshop Server
//!
//! Main entry point: loads configuration, connects to PostgreSQL and serves
//! the filtered list API.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use bookshop_core::config::AppConfig;
use bookshop_core::error::AppError;
use bookshop_database::DatabasePool;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "bookshop-server", version, about = "Bookshop catalogue API server")]
struct Args {
    /// Directory holding `default.toml` and the environment overlays.
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Environment overlay to apply (`<config-dir>/<env>.toml`).
    #[arg(long, env = "BOOKSHOP_ENV", default_value = "development")]
    env: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match AppConfig::load(&args.config_dir, &args.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(config_dir = %args.config_dir, env = %args.env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Bookshop v{}", env!("CARGO_PKG_VERSION"));

    let database = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    bookshop_database::migration::run_migrations(database.pool()).await?;
    tracing::info!("Database migrations complete");

    let result = bookshop_api::run_server(config, database.pool().clone()).await;
    database.close().await;
    result
}
