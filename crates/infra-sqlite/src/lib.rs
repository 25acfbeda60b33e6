// FAQ Infrastructure - SQLite Adapter
// Implements: FaqRepository

mod connection;
mod faq_repository;
mod migration;

pub use connection::create_pool;
pub use faq_repository::SqliteFaqRepository;
pub use migration::run_migrations;

// Note: sqlx::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
