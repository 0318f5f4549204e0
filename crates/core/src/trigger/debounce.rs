//! Quiet-period debounce backed by tokio timers.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::{debug, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type Action<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Defers `action` until `window` has passed without another [`trigger`].
///
/// Every call to [`trigger`] cancels the pending invocation and schedules a
/// new one with the latest arguments, so only the last call of a burst runs.
/// Dropping the debouncer (or calling [`cancel`]) releases the pending timer.
///
/// [`trigger`]: Debouncer::trigger
/// [`cancel`]: Debouncer::cancel
pub struct Debouncer<A> {
    window: Duration,
    action: Action<A>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A> Debouncer<A>
where
    A: Send + 'static,
{
    pub fn new<F>(window: Duration, action: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            window,
            action: Arc::new(action),
            pending: Mutex::new(None),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedules `action(args)` after the quiet window, replacing any
    /// invocation that has not fired yet.
    ///
    /// Outside a tokio runtime there is no timer to defer to, so the action
    /// runs immediately.
    pub fn trigger(&self, args: A) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("No tokio runtime available; running debounced action immediately");
                drop(pending);
                (self.action)(args);
                return;
            }
        };

        let action = Arc::clone(&self.action);
        let window = self.window;
        *pending = Some(handle.spawn(async move {
            tokio::time::sleep(window).await;
            action(args);
        }));
    }

    /// Drops the pending invocation, if any. Returns `true` when something
    /// was actually cancelled.
    pub fn cancel(&self) -> bool {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        match pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!("Cancelled pending debounced action");
                true
            }
            _ => false,
        }
    }

    /// Whether an invocation is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}
