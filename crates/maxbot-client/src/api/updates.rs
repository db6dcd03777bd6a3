//! Updates API (long polling).

use crate::client::{ApiRequest, MaxClient, Query};
use crate::context::Context;
use crate::error::Result;
use crate::poll::PollWindow;
use crate::update::{UpdateBatch, UpdateList, UpdateType};

/// Options for [`UpdatesApi::get`].
#[derive(Debug, Clone, Default)]
pub struct GetUpdatesOpts {
    /// Maximum number of updates. `0` uses the server default (100).
    pub limit: u32,
    /// Server-side long-poll timeout in seconds. `<= 0` uses 30.
    pub timeout: i64,
    /// Cursor from the previous poll. `0` returns uncommitted updates.
    pub marker: i64,
    /// Only deliver these update types. Empty means all.
    pub types: Vec<UpdateType>,
}

/// Updates API client.
pub struct UpdatesApi {
    client: MaxClient,
}

impl UpdatesApi {
    pub(crate) fn new(client: MaxClient) -> Self {
        Self { client }
    }

    /// Long-poll for updates.
    ///
    /// If `ctx` has a deadline it must leave room for the server-side timeout
    /// plus a safety buffer, otherwise the call fails with
    /// [`Error::PollWindowTooShort`](crate::Error::PollWindowTooShort) without
    /// contacting the server. Without a deadline, one is derived from the
    /// poll window.
    pub async fn get(&self, ctx: &Context, opts: &GetUpdatesOpts) -> Result<UpdateList> {
        let window = PollWindow::new(opts.timeout);

        let mut query = Query::new();
        query
            .push_if(opts.limit > 0, "limit", opts.limit)
            .push("timeout", window.server_timeout_secs())
            .push_if(opts.marker > 0, "marker", opts.marker)
            .push_list("types", opts.types.iter().map(UpdateType::as_str));

        let ctx = window.admit(ctx)?;
        self.client
            .execute(&ctx, ApiRequest::get("get_updates", &["updates"]).query(query))
            .await
    }

    /// Long-poll and decode the result, skipping unknown update types.
    pub async fn next_batch(&self, ctx: &Context, opts: &GetUpdatesOpts) -> Result<UpdateBatch> {
        let list = self.get(ctx, opts).await?;
        Ok(UpdateBatch {
            updates: list.decode()?,
            marker: list.marker,
        })
    }
}
