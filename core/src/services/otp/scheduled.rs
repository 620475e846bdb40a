//! Owned handle to a task on the local event loop.

use std::future::Future;
use tokio::task::JoinHandle;

/// A `spawn_local` task that is aborted when its owner drops it
///
/// Timers and delayed callbacks are stored as `ScheduledTask`s inside the
/// session that owns them, so tearing the session down cancels them. The
/// task bodies only hold weak references to the state they touch.
#[derive(Debug)]
pub(crate) struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawn `future` on the current `LocalSet`
    ///
    /// # Panics
    ///
    /// Panics when called outside of a `tokio::task::LocalSet`.
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + 'static,
    {
        Self {
            handle: tokio::task::spawn_local(future),
        }
    }

    /// Whether the task is still pending
    pub(crate) fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
