//! OTP verification module
//!
//! One parameterized flow covers every verification screen:
//! - Code generation (4 or 6 digits)
//! - Per-second countdown with explicit arm/cancel
//! - Send counting with an optional cap and cool-down block
//! - Submit evaluation (incomplete, expired, matched, invalid)
//! - Digit entry with focus handling and status clearing
//!
//! Timers run as `spawn_local` tasks owned by the session, so flows live on
//! a single thread inside a `tokio::task::LocalSet`.

mod flow;
mod generator;
mod ledger;
mod notice;
mod scheduled;
mod session;
mod timer;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use flow::OtpFlow;
pub use generator::{generate, RandomCodeGenerator};
pub use ledger::{format_retry_message, AttemptLedger, SendPermit};
pub use notice::TransientNotice;
pub use session::OtpSession;
pub use timer::CountdownTimer;
pub use traits::{CodeGenerator, OtpNotifier};
pub use types::{FlowControls, SendOutcome};
