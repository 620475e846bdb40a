//! Countdown timer bound to one OTP issuance

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tokio::time::{interval_at, Instant};

use super::scheduled::ScheduledTask;

const TICK: Duration = Duration::from_secs(1);

/// One-second countdown driven by the local event loop
///
/// Each call to [`arm`](Self::arm) cancels the running countdown and starts a
/// new one with its own counter, so at most one decrement stream ever exists
/// for a timer. The tick task only holds a weak reference to the counter; if
/// the counter has been replaced or the timer dropped, the task exits.
///
/// Reaching zero stops the ticking. Zero is just a value here, the
/// verification flow decides what it means.
#[derive(Debug)]
pub struct CountdownTimer {
    remaining: Rc<Cell<u32>>,
    ttl_seconds: u32,
    task: Option<ScheduledTask>,
    arm_count: u64,
}

impl CountdownTimer {
    /// Create an unarmed timer reading zero
    pub fn new() -> Self {
        Self {
            remaining: Rc::new(Cell::new(0)),
            ttl_seconds: 0,
            task: None,
            arm_count: 0,
        }
    }

    /// Start counting down from `ttl_seconds`, replacing any running countdown
    ///
    /// Must be called inside a `tokio::task::LocalSet`.
    pub fn arm(&mut self, ttl_seconds: u32) {
        self.cancel();

        let remaining = Rc::new(Cell::new(ttl_seconds));
        let counter = Rc::downgrade(&remaining);
        self.remaining = remaining;
        self.ttl_seconds = ttl_seconds;
        self.arm_count += 1;

        if ttl_seconds > 0 {
            self.task = Some(ScheduledTask::spawn(count_down(counter)));
        }

        tracing::trace!(ttl_seconds, arm_count = self.arm_count, "Countdown armed");
    }

    /// Stop ticking, keeping the current reading
    pub fn cancel(&mut self) {
        self.task = None;
    }

    /// Seconds left in the current countdown
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining.get()
    }

    /// The value the countdown was last armed with
    pub fn ttl_seconds(&self) -> u32 {
        self.ttl_seconds
    }

    /// Whether a countdown is still ticking
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(ScheduledTask::is_active)
    }

    /// Whether an armed countdown has reached zero
    pub fn is_elapsed(&self) -> bool {
        self.remaining.get() == 0
    }

    /// Number of times the timer has been armed
    pub fn arm_count(&self) -> u64 {
        self.arm_count
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

async fn count_down(counter: Weak<Cell<u32>>) {
    let mut ticker = interval_at(Instant::now() + TICK, TICK);
    loop {
        ticker.tick().await;

        let Some(remaining) = counter.upgrade() else {
            break;
        };
        let next = remaining.get().saturating_sub(1);
        remaining.set(next);
        if next == 0 {
            break;
        }
    }
}
