//! Debounced input controller.
//!
//! A change is delivered only after `delay` has passed without a newer
//! change. Empty values never reach the callback, and cancelling before the
//! delay elapses suppresses delivery entirely.
//!
//! [`DebounceState`] is the clock-driven core; [`Debouncer`] schedules it on
//! the tokio runtime.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::trace;

/// Quiet period used by the portal's inputs.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Deterministic debounce bookkeeping driven by explicit timestamps.
///
/// A change applied at the same instant as a due deadline supersedes it when
/// it is applied before [`DebounceState::poll`].
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use portal::client::DebounceState;
/// use tokio::time::Instant;
///
/// let t0 = Instant::now();
/// let mut state = DebounceState::new(Duration::from_millis(500));
/// state.change("te", t0);
/// state.change("test", t0 + Duration::from_millis(200));
/// assert_eq!(state.poll(t0 + Duration::from_millis(500)), None);
/// assert_eq!(state.poll(t0 + Duration::from_millis(700)), Some("test".to_owned()));
/// ```
#[derive(Debug, Clone)]
pub struct DebounceState {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl DebounceState {
    /// Create an idle state with the given quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a change at `now`, replacing any pending value.
    ///
    /// An empty value clears the pending one.
    pub fn change(&mut self, value: impl Into<String>, now: Instant) {
        let value = value.into();
        self.pending = if value.is_empty() {
            None
        } else {
            Some((value, now + self.delay))
        };
    }

    /// Deliver the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// When the pending value becomes due, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Drop the pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

type Callback = Arc<dyn Fn(String) + Send + Sync>;

/// Debouncer backed by a cancellable tokio task.
///
/// Every change aborts the pending task and schedules a new one. Dropping the
/// debouncer cancels whatever is pending.
pub struct Debouncer {
    delay: Duration,
    callback: Callback,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer invoking `callback` after `delay` of quiet.
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Create a debouncer with [`DEFAULT_DEBOUNCE_DELAY`].
    pub fn with_default_delay<F>(callback: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        Self::new(DEFAULT_DEBOUNCE_DELAY, callback)
    }

    /// Record a raw input change.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn change(&mut self, value: impl Into<String>) {
        self.cancel();
        let value = value.into();
        if value.is_empty() {
            return;
        }

        let generation = Arc::clone(&self.generation);
        let expected = generation.load(Ordering::Acquire);
        let callback = Arc::clone(&self.callback);
        let deadline = Instant::now() + self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            if generation.load(Ordering::Acquire) == expected {
                callback(value);
            }
        }));
    }

    /// Suppress the pending delivery, if any.
    pub fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        if let Some(handle) = self.pending.take() {
            trace!("cancelling pending debounce");
            handle.abort();
        }
    }

    /// Whether a delivery is scheduled and has not run yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
