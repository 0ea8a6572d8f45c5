//! Cancellable repeating-timer machinery.
//!
//! The reveal and upload simulators are the only asynchronous elements of
//! the editor. Both run on a [`TimerDriver`]: a spawned task that sleeps,
//! invokes a tick callback, and repeats until the callback stops it or
//! the owning [`CancellationToken`] is cancelled. Tearing a driver down
//! mid-sequence is a single cancellation that clears the pending timer.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

/// A token for cooperative cancellation of a timer driver.
///
/// Cancellation is idempotent - only the first cancellation reason is kept.
#[derive(Default)]
pub struct CancellationToken {
    /// Whether cancellation has been requested.
    cancelled: AtomicBool,
    /// The reason for cancellation (first one wins).
    reason: RwLock<Option<String>>,
    /// Callbacks to invoke on cancellation.
    callbacks: RwLock<Vec<Box<dyn Fn() + Send + Sync>>>,
}

impl CancellationToken {
    /// Creates a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation with a reason.
    ///
    /// This is idempotent - only the first reason is kept. Callbacks are
    /// invoked immediately; panics in callbacks are logged and suppressed.
    pub fn cancel(&self, reason: impl Into<String>) {
        if self
            .cancelled
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            *self.reason.write() = Some(reason.into());

            let callbacks = self.callbacks.read();
            for callback in callbacks.iter() {
                if let Err(e) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    callback();
                })) {
                    warn!("Cancellation callback panicked: {:?}", e);
                }
            }
        }
    }

    /// Registers a callback to be invoked on cancellation.
    ///
    /// If already cancelled, the callback is invoked immediately.
    pub fn on_cancel<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        if self.is_cancelled() {
            if let Err(e) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                callback();
            })) {
                warn!("Cancellation callback panicked: {:?}", e);
            }
        } else {
            self.callbacks.write().push(Box::new(callback));
        }
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns the cancellation reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.reason.read().clone()
    }
}

impl std::fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .field("reason", &self.reason())
            .finish()
    }
}

/// What a tick callback wants the driver to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Sleep the regular interval, then tick again.
    Continue,
    /// Sleep the given duration, then tick again.
    ContinueAfter(Duration),
    /// Stop the driver; the sequence is finished.
    Stop,
}

/// A spawned repeating-timer task with scoped cancellation.
///
/// The driver sleeps `interval`, invokes the callback, and repeats until
/// the callback returns [`TickOutcome::Stop`] or the driver is cancelled.
/// Dropping the driver cancels it, so a torn-down view cannot leak
/// callbacks into a disposed state.
pub struct TimerDriver {
    token: Arc<CancellationToken>,
    handle: JoinHandle<()>,
}

impl TimerDriver {
    /// Spawns a driver ticking at the given interval.
    #[must_use]
    pub fn spawn<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> TickOutcome + Send + 'static,
    {
        let token = Arc::new(CancellationToken::new());
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            let mut delay = interval;
            loop {
                tokio::time::sleep(delay).await;
                if task_token.is_cancelled() {
                    break;
                }
                match on_tick() {
                    TickOutcome::Continue => delay = interval,
                    TickOutcome::ContinueAfter(next) => delay = next,
                    TickOutcome::Stop => break,
                }
            }
        });

        Self { token, handle }
    }

    /// Returns the driver's cancellation token.
    #[must_use]
    pub fn cancel_token(&self) -> &Arc<CancellationToken> {
        &self.token
    }

    /// Cancels the driver, clearing any pending timer.
    pub fn cancel(&self, reason: impl Into<String>) {
        self.token.cancel(reason);
        self.handle.abort();
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns whether the driver task has finished (stopped, cancelled,
    /// or aborted).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        self.token.cancel("driver dropped");
        self.handle.abort();
    }
}

impl std::fmt::Debug for TimerDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerDriver")
            .field("cancelled", &self.is_cancelled())
            .field("finished", &self.is_finished())
            .finish()
    }
}
