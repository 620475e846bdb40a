//! Shared utilities and common types for the LinkUp mobile core
//!
//! This crate provides common functionality used across all workspace crates:
//! - Configuration types (OTP flow presets, environment, logging, storage)
//! - Field validation (email, password, phone)
//! - Common type definitions

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    routes, AppConfig, ContactChannel, Environment, FlowConfig, LogFormat, LoggingConfig,
    OtpConfig, OtpMessages, SendCountPolicy, StorageConfig,
};
pub use types::OtpLength;
pub use utils::{phone, validation};
