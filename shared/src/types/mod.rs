//! Type definitions shared between crates
//!
//! - `otp` - OTP code width

pub mod otp;

pub use otp::OtpLength;
