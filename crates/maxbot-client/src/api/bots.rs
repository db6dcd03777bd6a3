//! Bot profile API.

use crate::client::{ApiRequest, MaxClient};
use crate::context::Context;
use crate::error::Result;
use crate::types::{BotInfo, BotPatch};

/// Bot profile API client.
pub struct BotsApi {
    client: MaxClient,
}

impl BotsApi {
    pub(crate) fn new(client: MaxClient) -> Self {
        Self { client }
    }

    /// Get the bot's own profile.
    pub async fn me(&self, ctx: &Context) -> Result<BotInfo> {
        self.client
            .execute(ctx, ApiRequest::get("get_bot", &["me"]))
            .await
    }

    /// Update the bot's profile. Unset fields are left unchanged.
    pub async fn edit(&self, ctx: &Context, patch: &BotPatch) -> Result<BotInfo> {
        self.client
            .execute(ctx, ApiRequest::patch("edit_bot", &["me"]).json(patch))
            .await
    }
}
