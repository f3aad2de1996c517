//! Single in-flight submission guard.
//!
//! A form holds one [`SubmissionGuard`] and asks it for a
//! [`PendingSubmission`] before calling a server action. While that token is
//! alive further attempts are refused, which keeps one network call in flight
//! per form.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

/// Shared pending flag for one form.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    pending: Arc<AtomicBool>,
}

impl SubmissionGuard {
    /// Create an idle guard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the form for one submission, or `None` while another is pending.
    #[must_use]
    pub fn try_begin(&self) -> Option<PendingSubmission> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PendingSubmission {
                pending: Arc::clone(&self.pending),
            })
    }

    /// Whether a submission is in flight; forms render as disabled meanwhile.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Run `submit` unless another submission is in flight.
    ///
    /// Returns `None` without polling `submit`'s future when the form is busy.
    pub async fn run<F, Fut>(&self, submit: F) -> Option<Fut::Output>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        let Some(_pending) = self.try_begin() else {
            debug!("submission ignored: another one is pending");
            return None;
        };
        Some(submit().await)
    }
}

/// Proof that a submission is in flight. Dropping it re-enables the form.
#[derive(Debug)]
#[must_use = "the form is released as soon as the token is dropped"]
pub struct PendingSubmission {
    pending: Arc<AtomicBool>,
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        self.pending.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::SignupCommand;
    use crate::domain::{ActionResult, RedirectTarget};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use tokio::sync::Notify;

    #[test]
    fn second_begin_is_refused_until_release() {
        let guard = SubmissionGuard::new();

        let first = guard.try_begin().expect("idle guard");
        assert!(guard.is_pending());
        assert!(guard.try_begin().is_none());

        drop(first);
        assert!(!guard.is_pending());
        assert!(guard.try_begin().is_some());
    }

    #[test]
    fn clones_share_the_pending_flag() {
        let guard = SubmissionGuard::new();
        let clone = guard.clone();

        let _pending = guard.try_begin().expect("idle guard");

        assert!(clone.try_begin().is_none());
    }

    struct GatedSignup {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl SignupCommand for GatedSignup {
        async fn submit_signup(&self, _input: &Value) -> ActionResult<RedirectTarget> {
            self.gate.notified().await;
            ActionResult::success("User created successfully", RedirectTarget::dashboard())
        }
    }

    #[tokio::test]
    async fn concurrent_submissions_reach_the_action_once() {
        let guard = SubmissionGuard::new();
        let gate = Arc::new(Notify::new());
        let action = GatedSignup {
            gate: Arc::clone(&gate),
        };
        let input = json!({});

        let first = guard.run(|| action.submit_signup(&input));
        let second = async {
            tokio::task::yield_now().await;
            let refused = guard.run(|| action.submit_signup(&input)).await;
            gate.notify_one();
            refused
        };
        let (first, second) = tokio::join!(first, second);

        assert!(first.is_some_and(|result| result.is_success()));
        assert!(second.is_none());
        assert!(!guard.is_pending());
    }
}
