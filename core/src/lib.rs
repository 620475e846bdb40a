//! # LinkUp Core
//!
//! Core business logic for the LinkUp mobile app: the OTP verification flow
//! shared by every verification screen, email/password sign-in and password
//! reset, and the contact-picker-to-invite pipeline.
//!
//! OTP flows are single-threaded. Their countdown and cool-down timers are
//! spawned with `tokio::task::spawn_local`, so flows must be driven from
//! inside a `tokio::task::LocalSet`.

pub mod domain;
pub mod services;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use errors::*;
