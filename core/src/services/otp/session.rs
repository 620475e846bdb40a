//! OTP session entity: the code, its countdown, its ledger and the typed digits

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use lu_shared::types::OtpLength;
use tokio::time::Instant;

use crate::domain::entities::{DigitInput, OtpStatus};

use super::ledger::AttemptLedger;
use super::timer::CountdownTimer;

/// State of one verification flow instance
///
/// The session exclusively owns its countdown timer and attempt ledger, so
/// dropping it cancels every timer and pending release it scheduled.
#[derive(Debug)]
pub struct OtpSession {
    digit_count: OtpLength,
    ttl_seconds: u32,
    code: Option<String>,
    issued_at: Option<DateTime<Utc>>,
    digits: DigitInput,
    status: OtpStatus,
    timer: CountdownTimer,
    ledger: AttemptLedger,
}

impl OtpSession {
    /// Create an idle session
    pub fn new(digit_count: OtpLength, ttl_seconds: u32, ledger: AttemptLedger) -> Self {
        Self {
            digit_count,
            ttl_seconds,
            code: None,
            issued_at: None,
            digits: DigitInput::new(digit_count),
            status: OtpStatus::Idle,
            timer: CountdownTimer::new(),
            ledger,
        }
    }

    /// Install a freshly generated code
    ///
    /// Clears the typed digits, resets the status to `Sent` and re-arms the
    /// countdown at the full TTL.
    pub fn issue(&mut self, code: String) {
        debug_assert_eq!(code.len(), self.digit_count.digits());
        self.code = Some(code);
        self.issued_at = Some(Utc::now());
        self.digits.clear();
        self.status = OtpStatus::Sent;
        self.timer.arm(self.ttl_seconds);
    }

    /// Evaluate the typed digits against the current code
    ///
    /// Checked in order: incomplete input, then expiry, then equality.
    pub fn evaluate(&self) -> OtpStatus {
        let entered = self.digits.value();
        if entered.len() != self.digit_count.digits() {
            return OtpStatus::Incomplete;
        }
        if self.timer.is_elapsed() {
            return OtpStatus::Expired;
        }
        match &self.code {
            Some(code) if codes_match(code, &entered) => OtpStatus::Matched,
            _ => OtpStatus::Invalid,
        }
    }

    /// Enter the blocked state, discarding the stale code and input
    pub fn block(&mut self) {
        self.timer.cancel();
        self.code = None;
        self.issued_at = None;
        self.digits.clear();
        self.status = OtpStatus::Blocked;
    }

    /// Mark the session as matched and stop its countdown
    pub fn consume(&mut self) {
        self.timer.cancel();
        self.status = OtpStatus::Matched;
    }

    /// Current status
    ///
    /// A blocked session reads as `Idle` again once its cool-down elapsed.
    pub fn status(&self) -> OtpStatus {
        if self.status == OtpStatus::Blocked && !self.ledger.is_blocked() {
            OtpStatus::Idle
        } else {
            self.status
        }
    }

    /// Whether the session was blocked and its cool-down has since elapsed
    pub fn cool_down_over(&self) -> bool {
        self.status == OtpStatus::Blocked && !self.ledger.is_blocked()
    }

    pub fn set_status(&mut self, status: OtpStatus) {
        self.status = status;
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.issued_at
    }

    pub fn digit_count(&self) -> OtpLength {
        self.digit_count
    }

    pub fn ttl_seconds(&self) -> u32 {
        self.ttl_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.timer.remaining_seconds()
    }

    pub fn send_count(&self) -> u32 {
        self.ledger.send_count()
    }

    pub fn max_sends(&self) -> Option<u32> {
        self.ledger.max_sends()
    }

    pub fn blocked_until(&self) -> Option<Instant> {
        self.ledger.blocked_until()
    }

    pub fn digits(&self) -> &DigitInput {
        &self.digits
    }

    pub fn digits_mut(&mut self) -> &mut DigitInput {
        &mut self.digits
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn ledger(&self) -> &AttemptLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut AttemptLedger {
        &mut self.ledger
    }
}

/// Exact string comparison of two codes in constant time
fn codes_match(expected: &str, entered: &str) -> bool {
    expected.len() == entered.len() && constant_time_eq(expected.as_bytes(), entered.as_bytes())
}
