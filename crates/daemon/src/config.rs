//! Process configuration from environment variables

const DEFAULT_DB_PATH: &str = "~/.faq-api/faq.db";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Daemon configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database path (FAQ_DB_PATH, tilde-expanded)
    pub db_path: String,

    /// HTTP bind address (FAQ_HTTP_ADDR)
    pub bind_address: String,

    /// HTTP port (FAQ_HTTP_PORT)
    pub port: u16,

    /// Log format: "pretty" or "json" (FAQ_LOG_FORMAT)
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        let db_path = std::env::var("FAQ_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        let db_path = shellexpand::tilde(&db_path).into_owned();

        let bind_address =
            std::env::var("FAQ_HTTP_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        let port: u16 = std::env::var("FAQ_HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);

        let log_format =
            std::env::var("FAQ_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

        Self {
            db_path,
            bind_address,
            port,
            log_format,
        }
    }
}
