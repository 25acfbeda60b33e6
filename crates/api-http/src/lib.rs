//! FAQ API - HTTP Adapter
//!
//! Translates one wire request into exactly one service call and maps the
//! outcome back to an HTTP/JSON response. Domain rules live in `faq-core`;
//! this crate only decodes, dispatches and encodes.

pub mod error;
pub mod handlers;

use faq_core::application::FaqService;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub port: u16,
}

impl HttpConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// HTTP server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server and serve until ctrl-c.
pub async fn start_server(config: HttpConfig, service: Arc<FaqService>) -> Result<(), ServerError> {
    let state = AppState { service };
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("FAQ API listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received. Exiting gracefully...");
}
