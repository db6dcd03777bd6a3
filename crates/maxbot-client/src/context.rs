//! Per-call deadline and cancellation.
//!
//! Every API method takes a [`Context`]. A context optionally carries a
//! deadline and a [`CancellationToken`]; the dispatch pipeline bounds the
//! network exchange by both. A call cut short by either resolves to
//! [`Error::Timeout`].

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

/// Cause attached to a timeout error when the call was cancelled explicitly.
#[derive(Debug, Clone, Copy, Error)]
#[error("request cancelled")]
pub struct Cancelled;

/// Deadline and cancellation carried through a single API call.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use maxbot_client::Context;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let ctx = Context::with_timeout(Duration::from_secs(60)).with_cancellation(token.clone());
/// assert!(ctx.deadline().is_some());
/// token.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancellation: Option<CancellationToken>,
}

impl Context {
    /// A context with no deadline and no cancellation.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now.
    ///
    /// Timeouts too large to represent are clamped to a deadline decades away.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(deadline_after(timeout))
    }

    /// A context with an absolute deadline.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancellation: None,
        }
    }

    /// Attach a cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline. Zero once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// The cancellation token, if any.
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// Whether the attached token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Copy of this context with a deadline `timeout` from now, unless it
    /// already has one. A zero `timeout` leaves the context unbounded.
    pub(crate) fn or_timeout(&self, timeout: Duration) -> Self {
        if self.deadline.is_some() || timeout.is_zero() {
            return self.clone();
        }
        Self {
            deadline: Some(deadline_after(timeout)),
            cancellation: self.cancellation.clone(),
        }
    }

    /// Drive `fut` to completion within this context's bounds.
    ///
    /// Cancellation is checked first, so an already-cancelled context never
    /// polls `fut`.
    pub(crate) async fn run<T, F>(&self, op: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, fut)
                    .await
                    .map_err(|elapsed| Error::timeout(op, elapsed))?,
                None => fut.await,
            }
        };

        match &self.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(Error::timeout(op, Cancelled)),
                    result = bounded => result,
                }
            }
            None => bounded.await,
        }
    }
}

/// Upper bound for derived deadlines.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// `now + timeout`, with `timeout` capped at [`FAR_FUTURE`].
fn deadline_after(timeout: Duration) -> Instant {
    Instant::now() + timeout.min(FAR_FUTURE)
}
