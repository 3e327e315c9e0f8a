//! Cancellation Signals
//!
//! [`Signal`] is the handle threaded through the `_ctx` combinator variants.
//! It carries a shared cancel flag and an optional deadline, and is sampled
//! exactly once at combinator entry; nothing here blocks or polls. Clones
//! share the cancel flag, so cancelling any clone cancels all of them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{FxError, FxResult};

/// A cloneable cancellation/deadline handle.
#[derive(Debug, Clone, Default)]
pub struct Signal {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Signal {
    /// A signal that never cancels on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// A signal that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// A signal that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Cancels this signal and every clone sharing its flag.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        log::debug!("signal cancelled");
    }

    /// True if [`cancel`](Signal::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// The deadline this signal expires at, if one was set.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Samples the signal state: `None` while live, otherwise the error the
    /// `_ctx` combinators short-circuit with. Explicit cancellation wins over
    /// an expired deadline when both apply.
    pub fn err(&self) -> Option<FxError> {
        if self.is_cancelled() {
            return Some(FxError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(FxError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Like [`err`](Signal::err), but in `Result` form for `?` chaining.
    pub fn check(&self) -> FxResult<()> {
        match self.err() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
