// Port Layer - Interfaces for external dependencies

pub mod faq_repository;
pub mod time_provider;

// Re-exports
pub use faq_repository::FaqRepository;
pub use time_provider::{SystemTimeProvider, TimeProvider};
