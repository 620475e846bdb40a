//! OTP delivery adapters
//!
//! Real delivery (SMS gateway, email provider) lives in the host app. The
//! console notifier stands in for it during development.

pub mod console;

pub use console::ConsoleNotifier;
