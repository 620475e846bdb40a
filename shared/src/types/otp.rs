//! OTP code width

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in a one-time code
///
/// Only 4- and 6-digit codes exist. The width is fixed when a session is
/// created and determines both the generated range and the number of input
/// slots shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OtpLength {
    Four,
    Six,
}

impl OtpLength {
    /// Number of digits as a slot count
    pub fn digits(self) -> usize {
        match self {
            OtpLength::Four => 4,
            OtpLength::Six => 6,
        }
    }

    /// Smallest code of this width without a leading zero
    pub fn min_value(self) -> u32 {
        match self {
            OtpLength::Four => 1_000,
            OtpLength::Six => 100_000,
        }
    }

    /// Largest code of this width
    pub fn max_value(self) -> u32 {
        match self {
            OtpLength::Four => 9_999,
            OtpLength::Six => 999_999,
        }
    }
}

impl TryFrom<u8> for OtpLength {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(OtpLength::Four),
            6 => Ok(OtpLength::Six),
            other => Err(format!("Unsupported OTP length: {} (expected 4 or 6)", other)),
        }
    }
}

impl From<OtpLength> for u8 {
    fn from(length: OtpLength) -> Self {
        length.digits() as u8
    }
}

impl fmt::Display for OtpLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits())
    }
}
