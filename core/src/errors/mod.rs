//! Domain-specific error types.
//!
//! Expected OTP conditions (incomplete, invalid, expired, blocked) are not
//! errors; they are reported through `OtpStatus` and `SendOutcome`. The
//! variants here cover genuine failures of collaborators and bad input.

use lu_shared::validation::ValidationErrors;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid fields: {0}")]
    InvalidFields(ValidationErrors),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::InvalidFields(errors)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
