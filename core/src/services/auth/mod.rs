//! Authentication forms module
//!
//! Credential shape checks for the email sign-in and password reset screens.
//! Nothing here talks to a backend; a valid form hands off to the next screen:
//! - Sign-in continues to the login email OTP screen with the email forwarded
//! - Password reset returns to sign-in

mod password_reset;
mod sign_in;

#[cfg(test)]
mod tests;

pub use password_reset::PasswordResetService;
pub use sign_in::SignInService;
