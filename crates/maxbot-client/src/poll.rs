//! Long-poll deadline coordination.
//!
//! `GET /updates` holds the connection open for up to the requested
//! server-side timeout. The client-side bound must outlast it, so every poll
//! call is checked against the caller's deadline before any I/O happens.

use std::time::Duration;

use crate::context::Context;
use crate::error::{Error, Result};

/// Server-side long-poll timeout used when the caller asks for none.
pub const DEFAULT_POLL_TIMEOUT_SECS: u32 = 30;

/// Slack added on top of the server-side timeout.
pub const POLL_SAFETY_BUFFER: Duration = Duration::from_secs(5);

/// Time budget for one long-poll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollWindow {
    server_timeout_secs: u32,
}

impl PollWindow {
    /// Window for a requested server timeout in seconds. Values `<= 0` fall
    /// back to [`DEFAULT_POLL_TIMEOUT_SECS`].
    pub fn new(requested_secs: i64) -> Self {
        let server_timeout_secs = if requested_secs <= 0 {
            DEFAULT_POLL_TIMEOUT_SECS
        } else {
            u32::try_from(requested_secs).unwrap_or(u32::MAX)
        };
        Self {
            server_timeout_secs,
        }
    }

    /// Timeout sent to the server, in seconds.
    pub fn server_timeout_secs(&self) -> u32 {
        self.server_timeout_secs
    }

    /// Minimum time the caller must allow for the request.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.server_timeout_secs)) + POLL_SAFETY_BUFFER
    }

    /// Check `ctx` against this window and return the context to dispatch with.
    ///
    /// A deadline closer than [`PollWindow::duration`] is rejected with
    /// [`Error::PollWindowTooShort`]. A context without a deadline gets one
    /// exactly `duration()` away; its cancellation token is kept.
    pub fn admit(&self, ctx: &Context) -> Result<Context> {
        let required = self.duration();

        match ctx.remaining() {
            Some(remaining) if remaining < required => {
                tracing::warn!(
                    ?required,
                    ?remaining,
                    "rejecting long poll: caller deadline is shorter than the poll window"
                );
                Err(Error::PollWindowTooShort {
                    required,
                    remaining,
                })
            }
            Some(_) => Ok(ctx.clone()),
            None => {
                let bounded = Context::with_timeout(required);
                Ok(match ctx.cancellation() {
                    Some(token) => bounded.with_cancellation(token.clone()),
                    None => bounded,
                })
            }
        }
    }
}
