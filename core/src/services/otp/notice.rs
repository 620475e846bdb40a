//! Self-clearing notification text

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::scheduled::ScheduledTask;

/// A message that disappears on its own after a delay
///
/// Used for the "new code sent" notice after a resend. Showing a new notice
/// replaces the text and restarts the delay.
#[derive(Debug, Default)]
pub struct TransientNotice {
    text: Rc<RefCell<Option<String>>>,
    clear: Option<ScheduledTask>,
}

impl TransientNotice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` and clear it after `visible_for`
    ///
    /// Must be called inside a `tokio::task::LocalSet`.
    pub fn show(&mut self, text: impl Into<String>, visible_for: Duration) {
        *self.text.borrow_mut() = Some(text.into());
        let slot = Rc::downgrade(&self.text);
        self.clear = Some(ScheduledTask::spawn(clear_after(visible_for, slot)));
    }

    /// Remove the notice immediately
    pub fn dismiss(&mut self) {
        self.clear = None;
        self.text.borrow_mut().take();
    }

    /// Text currently shown
    pub fn current(&self) -> Option<String> {
        self.text.borrow().clone()
    }
}

async fn clear_after(delay: Duration, slot: Weak<RefCell<Option<String>>>) {
    tokio::time::sleep(delay).await;
    if let Some(text) = slot.upgrade() {
        text.borrow_mut().take();
    }
}
