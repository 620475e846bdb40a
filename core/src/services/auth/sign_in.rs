//! Email and password sign-in

use std::rc::Rc;
use tracing::{info, warn};

use lu_shared::routes;
use lu_shared::utils::validation::{mask_email, validators, ValidationErrors};

use crate::errors::DomainResult;
use crate::services::navigation::{single_param, Navigator};

/// Validates the sign-in form and continues to the login OTP screen
pub struct SignInService<R: Navigator> {
    navigator: Rc<R>,
}

impl<R: Navigator> SignInService<R> {
    pub fn new(navigator: Rc<R>) -> Self {
        Self { navigator }
    }

    /// Submit the sign-in form
    ///
    /// On success navigates to the login email OTP route with `{ email }`.
    /// Every invalid field is reported at once through
    /// [`DomainError::InvalidFields`](crate::errors::DomainError::InvalidFields).
    pub fn sign_in(&self, email: &str, password: &str) -> DomainResult<()> {
        let email = email.trim();

        if let Err(errors) = validate_credentials(email, password) {
            warn!(
                email = %mask_email(email),
                event = "sign_in_rejected",
                errors = %errors,
                "Sign-in form rejected"
            );
            return Err(errors.into());
        }

        info!(
            email = %mask_email(email),
            event = "sign_in_submitted",
            "Sign-in form accepted, continuing to email OTP"
        );
        self.navigator
            .navigate(routes::LOGIN_EMAIL_OTP, Some(&single_param("email", email)));
        Ok(())
    }
}

/// Shape checks shared by the sign-in form
pub(super) fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_email(&mut errors, email);
    check_password(&mut errors, "password", password);
    errors.into_result()
}

pub(super) fn check_email(errors: &mut ValidationErrors, email: &str) {
    if !validators::not_empty(email) {
        errors.add_error("email", "Email is required", "REQUIRED");
    } else if !validators::is_valid_email(email) {
        errors.add_error("email", "Please enter a valid email address", "INVALID_EMAIL");
    }
}

pub(super) fn check_password(errors: &mut ValidationErrors, field: &str, password: &str) {
    if password.is_empty() {
        errors.add_error(field, "Password is required", "REQUIRED");
    } else if !validators::is_valid_password(password) {
        errors.add_error(
            field,
            "Password must be at least 8 characters and contain a letter and a digit",
            "WEAK_PASSWORD",
        );
    }
}
