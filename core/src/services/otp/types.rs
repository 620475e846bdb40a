//! Result types for the OTP flow

use tokio::time::Instant;

/// Result of a send or resend request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// A new code was issued
    Sent {
        /// Counted sends after this one
        send_count: u32,
    },
    /// The current code is still counting down
    NotReady { remaining_seconds: u32 },
    /// The send cap was reached and the cool-down is running
    Blocked { retry_after: Instant, message: String },
    /// The email address or mobile number is malformed
    InvalidContact { message: String },
    /// The flow already matched
    Consumed,
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent { .. })
    }
}

/// Which controls the screen should offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowControls {
    /// Initial "Send" button
    pub can_send: bool,
    /// "Resend" link, offered once the countdown is over
    pub can_resend: bool,
    /// "Verify" button
    pub can_submit: bool,
}
