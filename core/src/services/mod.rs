//! Business services containing domain logic and use cases.

pub mod auth;
pub mod invite;
pub mod navigation;
pub mod otp;

// Re-export commonly used types
pub use auth::{PasswordResetService, SignInService};
pub use invite::{filter_contacts, ContactSelection, InviteService, KeyValueStore};
pub use navigation::{single_param, NavParams, Navigator};
pub use otp::{
    CodeGenerator, FlowControls, OtpFlow, OtpNotifier, OtpSession, RandomCodeGenerator,
    SendOutcome,
};
