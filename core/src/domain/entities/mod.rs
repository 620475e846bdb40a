//! Domain entities representing core business objects.

pub mod contact;
pub mod digit_input;
pub mod otp_status;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use contact::Contact;
pub use digit_input::DigitInput;
pub use otp_status::{OtpStatus, StatusMessage, Tone};
