//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `otp` - Per-screen OTP flow parameters
//! - `storage` - Key/value storage for the invited-contact list
//! - `routes` - Navigation route names

pub mod environment;
pub mod otp;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::{ContactChannel, FlowConfig, OtpConfig, OtpMessages, SendCountPolicy};
pub use storage::{StorageConfig, INVITED_CONTACTS_KEY};

/// Navigation route names the core hands to the navigator
pub mod routes {
    pub const SIGN_IN: &str = "SignIn";
    pub const HOME: &str = "Home";
    pub const LOGIN_EMAIL_OTP: &str = "LoginEmailOtp";
    pub const FORGOT_PASSWORD_OTP: &str = "ForgotPasswordOtp";
    pub const RESET_PASSWORD: &str = "ResetPassword";
    pub const CONTACT_HOME: &str = "ContactHome";
    pub const INVITE_MOBILE_OTP: &str = "InviteMobileOtp";
    pub const INVITE_EMAIL_OTP: &str = "InviteEmailOtp";
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// OTP flow presets
    #[serde(default)]
    pub otp: OtpConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            otp: OtpConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self::default()
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            otp: OtpConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Build the preset configuration for the environment named in ENV variables
    pub fn from_env() -> Self {
        match Environment::from_env() {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => Self {
                environment: Environment::Staging,
                logging: LoggingConfig::for_environment(Environment::Staging),
                ..Self::development()
            },
        }
    }

    /// Validate every section that has invariants
    pub fn validate(&self) -> Result<(), String> {
        self.otp.validate()?;
        self.storage.validate()
    }
}
