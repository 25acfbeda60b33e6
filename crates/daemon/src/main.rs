//! FAQ API - Main Entry Point
//!
//! Composition root: configuration, logging, database, dependency wiring,
//! HTTP server.

mod config;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use faq_api_http::{start_server, HttpConfig};
use faq_core::application::FaqService;
use faq_core::port::SystemTimeProvider;
use faq_infra_sqlite::{create_pool, run_migrations, SqliteFaqRepository};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = Config::from_env();

    // 2. Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("faq=info"))
        .expect("Failed to create env filter");

    match config.log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("FAQ API v{} starting...", VERSION);
    info!(db_path = %config.db_path, "Initializing database...");

    // 3. Initialize database
    if let Some(parent) = std::path::Path::new(&config.db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let pool = create_pool(&config.db_path)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 4. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let repo = Arc::new(SqliteFaqRepository::new(pool, time_provider));
    let service = Arc::new(FaqService::new(repo));

    // 5. Serve HTTP until shutdown signal
    let http_config = HttpConfig {
        bind_address: config.bind_address.clone(),
        port: config.port,
    };

    info!("Starting HTTP server...");
    start_server(http_config, service).await?;

    info!("Shutdown complete.");

    Ok(())
}
