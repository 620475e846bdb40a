//! Verification status of an OTP session and the message shown for it.

use serde::{Deserialize, Serialize};

/// Where an OTP session is in its lifecycle
///
/// `Matched`, `Invalid`, `Expired` and `Incomplete` are submit outcomes.
/// `Blocked` is entered when a send is refused because the resend cap was
/// reached and lasts until the cool-down elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpStatus {
    /// No code has been issued yet
    Idle,
    /// A code is issued and awaiting input
    Sent,
    Matched,
    Invalid,
    Expired,
    Incomplete,
    Blocked,
}

impl OtpStatus {
    /// Whether the status is the result of a submit
    pub fn is_outcome(self) -> bool {
        matches!(
            self,
            OtpStatus::Matched | OtpStatus::Invalid | OtpStatus::Expired | OtpStatus::Incomplete
        )
    }

    /// Whether editing a digit clears this status
    ///
    /// Expiry is only resolved by a resend, so `Expired` survives edits.
    pub fn clears_on_edit(self) -> bool {
        matches!(self, OtpStatus::Invalid | OtpStatus::Incomplete)
    }

    /// Tone used when displaying this status
    pub fn tone(self) -> Tone {
        match self {
            OtpStatus::Matched => Tone::Success,
            OtpStatus::Invalid | OtpStatus::Expired | OtpStatus::Incomplete | OtpStatus::Blocked => {
                Tone::Error
            }
            OtpStatus::Idle | OtpStatus::Sent => Tone::Info,
        }
    }
}

/// Colour/tone flag for status text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Error,
    Info,
}

/// Status text displayed under the code input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}
