//! Request-scoped cancellation and deadline handling.
//!
//! A [`RequestContext`] travels from the transport adapter down to the
//! repository. The repository consults it before touching the store so that
//! a disconnected client or an expired deadline stops work that nobody is
//! waiting for anymore.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use thiserror::Error;

/// Reasons a context refuses further work.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("request was cancelled")]
    Cancelled,

    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation flag plus an optional deadline shared by clones.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Context expiring `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Marks this context and all of its clones as cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Time left until the deadline, `None` when there is no deadline.
    ///
    /// Returns [`Duration::ZERO`] once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Fails when the context has been cancelled or its deadline passed.
    pub fn check(&self) -> Result<(), ContextError> {
        if self.is_cancelled() {
            return Err(ContextError::Cancelled);
        }
        match self.remaining() {
            Some(remaining) if remaining.is_zero() => Err(ContextError::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Returns a guard that cancels the context when dropped.
    ///
    /// Transport adapters hold the guard inside the request future, so the
    /// context is cancelled when the future is dropped on client disconnect.
    pub fn cancel_on_drop(&self) -> CancelOnDrop {
        CancelOnDrop(self.clone())
    }
}

/// Guard returned by [`RequestContext::cancel_on_drop`].
#[derive(Debug)]
pub struct CancelOnDrop(RequestContext);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}
