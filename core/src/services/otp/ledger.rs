//! Attempt ledger: send counting and cool-down blocking for one flow instance

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, warn};

use super::scheduled::ScheduledTask;

const MILLIS_PER_HOUR: u128 = 3_600_000;
const MILLIS_PER_MINUTE: u128 = 60_000;

/// Answer of [`AttemptLedger::can_send`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendPermit {
    Allowed,
    Blocked {
        /// When sends become possible again
        retry_after: Instant,
        /// Remaining cool-down formatted for display
        message: String,
    },
}

impl SendPermit {
    pub fn is_allowed(&self) -> bool {
        matches!(self, SendPermit::Allowed)
    }
}

#[derive(Debug, Default)]
struct LedgerState {
    send_count: u32,
    blocked_until: Option<Instant>,
}

impl LedgerState {
    fn release(&mut self) {
        self.send_count = 0;
        self.blocked_until = None;
    }
}

/// Tracks how many codes a flow has issued and blocks it once a cap is hit
///
/// Without a cap the ledger only counts. With a cap, the send that brings
/// the count to `max_sends` starts a cool-down of `block_duration`; a
/// single-shot release task then resets the count. The release task is
/// owned by the ledger, is aborted when the ledger is dropped, and only holds
/// a weak reference to the ledger state.
#[derive(Debug)]
pub struct AttemptLedger {
    max_sends: Option<u32>,
    block_duration: Duration,
    state: Rc<RefCell<LedgerState>>,
    release: Option<ScheduledTask>,
}

impl AttemptLedger {
    /// Create a ledger with an optional send cap
    pub fn new(max_sends: Option<u32>, block_duration: Duration) -> Self {
        Self {
            max_sends,
            block_duration,
            state: Rc::new(RefCell::new(LedgerState::default())),
            release: None,
        }
    }

    /// Create a ledger that counts sends without ever blocking
    pub fn unlimited() -> Self {
        Self::new(None, Duration::ZERO)
    }

    /// Check whether another code may be sent now
    pub fn can_send(&self) -> SendPermit {
        self.release_if_elapsed();

        match self.state.borrow().blocked_until {
            Some(retry_after) => SendPermit::Blocked {
                retry_after,
                message: format_retry_message(retry_after.saturating_duration_since(Instant::now())),
            },
            None => SendPermit::Allowed,
        }
    }

    /// Count one send and start the cool-down if the cap is reached
    ///
    /// Returns the new count. Callers check [`can_send`](Self::can_send)
    /// first; while blocked the count is left unchanged.
    ///
    /// Must be called inside a `tokio::task::LocalSet` when a cap is set.
    pub fn record_send(&mut self) -> u32 {
        self.release_if_elapsed();

        let (send_count, blocked_until) = {
            let mut state = self.state.borrow_mut();
            if state.blocked_until.is_some() {
                return state.send_count;
            }

            state.send_count += 1;
            if self.max_sends.is_some_and(|max| state.send_count >= max) {
                state.blocked_until = Some(Instant::now() + self.block_duration);
            }
            (state.send_count, state.blocked_until)
        };

        if let Some(until) = blocked_until {
            warn!(
                send_count,
                max_sends = ?self.max_sends,
                block_seconds = self.block_duration.as_secs(),
                event = "otp_send_cap_reached",
                "OTP send cap reached, blocking further sends"
            );
            self.schedule_release(until);
        }

        send_count
    }

    /// Number of counted sends since the last release
    pub fn send_count(&self) -> u32 {
        self.release_if_elapsed();
        self.state.borrow().send_count
    }

    /// Configured cap, if any
    pub fn max_sends(&self) -> Option<u32> {
        self.max_sends
    }

    /// Sends left before the cap, `None` when uncapped
    pub fn remaining_sends(&self) -> Option<u32> {
        self.max_sends
            .map(|max| max.saturating_sub(self.send_count()))
    }

    /// End of the current cool-down, if blocked
    pub fn blocked_until(&self) -> Option<Instant> {
        self.release_if_elapsed();
        self.state.borrow().blocked_until
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked_until().is_some()
    }

    /// Whether a release callback is still scheduled
    pub fn release_pending(&self) -> bool {
        self.release.as_ref().is_some_and(ScheduledTask::is_active)
    }

    fn schedule_release(&mut self, until: Instant) {
        let state = Rc::downgrade(&self.state);
        // Replacing the handle aborts any previous release.
        self.release = Some(ScheduledTask::spawn(release_at(until, state)));
    }

    // Covers reads that land between the deadline and the release task running.
    fn release_if_elapsed(&self) {
        let mut state = self.state.borrow_mut();
        if state.blocked_until.is_some_and(|until| until <= Instant::now()) {
            state.release();
        }
    }
}

async fn release_at(until: Instant, state: Weak<RefCell<LedgerState>>) {
    tokio::time::sleep_until(until).await;

    if let Some(state) = state.upgrade() {
        state.borrow_mut().release();
        info!(event = "otp_block_released", "OTP send cool-down elapsed");
    }
}

/// Format the remaining cool-down as whole hours and minutes
pub fn format_retry_message(remaining: Duration) -> String {
    let millis = remaining.as_millis();
    let hours = millis / MILLIS_PER_HOUR;
    let minutes = (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    format!(
        "Maximum OTP attempts reached. Please try again after {} hour(s) {} minute(s)",
        hours, minutes
    )
}
