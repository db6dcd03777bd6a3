//! Webhook subscriptions API.

use crate::client::{ApiRequest, MaxClient, Query};
use crate::context::Context;
use crate::error::Result;
use crate::types::{SimpleQueryResult, Subscription, SubscriptionRequestBody, SubscriptionsResult};

/// Webhook subscriptions API client.
///
/// Only manages subscriptions; receiving webhook calls is up to the
/// application's own HTTP server.
pub struct SubscriptionsApi {
    client: MaxClient,
}

impl SubscriptionsApi {
    pub(crate) fn new(client: MaxClient) -> Self {
        Self { client }
    }

    /// List active subscriptions.
    pub async fn list(&self, ctx: &Context) -> Result<Vec<Subscription>> {
        let result: SubscriptionsResult = self
            .client
            .execute(ctx, ApiRequest::get("get_subscriptions", &["subscriptions"]))
            .await?;
        Ok(result.subscriptions)
    }

    /// Subscribe a webhook URL.
    pub async fn subscribe(
        &self,
        ctx: &Context,
        body: &SubscriptionRequestBody,
    ) -> Result<SimpleQueryResult> {
        self.client
            .execute(
                ctx,
                ApiRequest::post("subscribe", &["subscriptions"]).json(body),
            )
            .await
    }

    /// Remove the subscription for `url`.
    pub async fn unsubscribe(&self, ctx: &Context, url: &str) -> Result<SimpleQueryResult> {
        let mut query = Query::new();
        query.push("url", url);
        self.client
            .execute(
                ctx,
                ApiRequest::delete("unsubscribe", &["subscriptions"]).query(query),
            )
            .await
    }
}
