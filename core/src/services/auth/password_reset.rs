//! Password reset form

use std::rc::Rc;
use tracing::{info, warn};

use lu_shared::routes;
use lu_shared::utils::validation::{mask_email, ValidationErrors};

use crate::errors::DomainResult;
use crate::services::navigation::Navigator;

use super::sign_in::{check_email, check_password};

/// Validates a new password and returns the user to sign-in
pub struct PasswordResetService<R: Navigator> {
    navigator: Rc<R>,
}

impl<R: Navigator> PasswordResetService<R> {
    pub fn new(navigator: Rc<R>) -> Self {
        Self { navigator }
    }

    /// Submit the reset form
    ///
    /// `email` is the address forwarded by the forgot-password OTP screen.
    pub fn reset(&self, email: &str, new_password: &str, confirm_password: &str) -> DomainResult<()> {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, email.trim());
        check_password(&mut errors, "new_password", new_password);
        if confirm_password.is_empty() {
            errors.add_error("confirm_password", "Please confirm your password", "REQUIRED");
        } else if confirm_password != new_password {
            errors.add_error("confirm_password", "Passwords do not match", "MISMATCH");
        }

        if let Err(errors) = errors.into_result() {
            warn!(
                email = %mask_email(email),
                event = "password_reset_rejected",
                errors = %errors,
                "Password reset form rejected"
            );
            return Err(errors.into());
        }

        info!(
            email = %mask_email(email),
            event = "password_reset",
            "Password reset accepted"
        );
        self.navigator.navigate(routes::SIGN_IN, None);
        Ok(())
    }
}
