//! Cancellable delayed task
//!
//! A `Debouncer` keeps at most one pending task. Scheduling a new one aborts
//! the previous one, so only the last write within the delay runs.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Single-slot, last-write-wins delayed task runner
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Default)]
pub struct Debouncer {
    slot: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `delay`, cancelling whatever was pending
    pub fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });

        let previous = self.replace(Some(handle));
        if let Some(previous) = previous {
            if !previous.is_finished() {
                tracing::debug!("debounce: superseded pending task");
            }
            previous.abort();
        }
    }

    /// Abort the pending task, if any; returns whether one was pending
    pub fn cancel(&self) -> bool {
        match self.replace(None) {
            Some(handle) => {
                let pending = !handle.is_finished();
                handle.abort();
                pending
            }
            None => false,
        }
    }

    /// Whether a task is scheduled and has not finished yet
    pub fn is_pending(&self) -> bool {
        let slot = self.slot.lock().unwrap_or_else(|p| p.into_inner());
        slot.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn replace(&self, next: Option<JoinHandle<()>>) -> Option<JoinHandle<()>> {
        // A poisoned slot still holds a valid handle; keep using it
        let mut slot = self.slot.lock().unwrap_or_else(|p| p.into_inner());
        std::mem::replace(&mut *slot, next)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
