//! # Infrastructure Layer
//!
//! Concrete collaborators for the LinkUp core:
//! - **Config**: layered loading of [`AppConfig`](lu_shared::AppConfig)
//! - **Logging**: `tracing-subscriber` setup driven by [`LoggingConfig`](lu_shared::LoggingConfig)
//! - **Storage**: in-memory and JSON-file key/value stores for the invite list
//! - **Notify**: console delivery of OTP codes for development builds
//! - **Navigation**: a logging navigator that records route history

// Re-export core types for convenience
pub use lu_core::errors::*;

/// Configuration loading
pub mod config;

/// Tracing subscriber setup
pub mod logging;

/// Navigation adapter
pub mod navigation;

/// OTP delivery adapters
pub mod notify;

/// Key/value storage implementations
pub mod storage;

pub use self::config::load_config;
pub use logging::init_tracing;
pub use navigation::LoggingNavigator;
pub use notify::ConsoleNotifier;
pub use storage::{InMemoryStore, JsonFileStore, Store};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<::config::ConfigError> for InfrastructureError {
    fn from(error: ::config::ConfigError) -> Self {
        InfrastructureError::Config(error.to_string())
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Serialization(e) => DomainError::Serialization(e),
            InfrastructureError::Config(message) => DomainError::Configuration { message },
            other => DomainError::Storage {
                message: other.to_string(),
            },
        }
    }
}
