//! Collaborator traits for the OTP flow

use lu_shared::types::OtpLength;

/// Delivery side channel for issued codes
///
/// Called exactly once per issuance with a human message and the code. The
/// bundled implementation logs to the console; a production build would hand
/// the code to an SMS or email gateway here.
pub trait OtpNotifier {
    fn notify(&self, message: &str, code: &str);
}

/// Source of fresh codes
pub trait CodeGenerator {
    fn generate(&self, length: OtpLength) -> String;
}
