//! Messages API.

use crate::client::{ApiRequest, MaxClient, Query};
use crate::context::Context;
use crate::error::Result;
use crate::types::{
    CallbackAnswer, Message, MessageList, NewMessageBody, SendMessageResult, SimpleQueryResult,
};

/// Query parameters for listing messages.
///
/// Either `chat_id` or `message_ids` must be set.
#[derive(Debug, Clone, Default)]
pub struct ListMessagesQuery {
    /// Chat to read from.
    pub chat_id: Option<i64>,
    /// Specific message IDs.
    pub message_ids: Vec<String>,
    /// Start of the time range (Unix milliseconds).
    pub from: Option<i64>,
    /// End of the time range (Unix milliseconds).
    pub to: Option<i64>,
    /// Maximum number of messages (server default 50).
    pub count: Option<u32>,
}

/// Messages API client.
pub struct MessagesApi {
    client: MaxClient,
}

impl MessagesApi {
    pub(crate) fn new(client: MaxClient) -> Self {
        Self { client }
    }

    /// Send a message to a chat.
    pub async fn send(&self, ctx: &Context, chat_id: i64, body: &NewMessageBody) -> Result<Message> {
        let mut query = Query::new();
        query
            .push("chat_id", chat_id)
            .push_if(body.disable_link_preview, "disable_link_preview", true);
        self.post_message(ctx, "send_message", query, body).await
    }

    /// Send a message to a user's dialog with the bot.
    pub async fn send_to_user(
        &self,
        ctx: &Context,
        user_id: i64,
        body: &NewMessageBody,
    ) -> Result<Message> {
        let mut query = Query::new();
        query
            .push("user_id", user_id)
            .push_if(body.disable_link_preview, "disable_link_preview", true);
        self.post_message(ctx, "send_message_to_user", query, body)
            .await
    }

    async fn post_message(
        &self,
        ctx: &Context,
        op: &'static str,
        query: Query,
        body: &NewMessageBody,
    ) -> Result<Message> {
        let result: SendMessageResult = self
            .client
            .execute(ctx, ApiRequest::post(op, &["messages"]).query(query).json(body))
            .await?;
        Ok(result.message)
    }

    /// Edit a message. Unset fields keep their current value.
    pub async fn edit(
        &self,
        ctx: &Context,
        message_id: &str,
        body: &NewMessageBody,
    ) -> Result<SimpleQueryResult> {
        let mut query = Query::new();
        query.push("message_id", message_id);
        self.client
            .execute(
                ctx,
                ApiRequest::put("edit_message", &["messages"])
                    .query(query)
                    .json(body),
            )
            .await
    }

    /// Delete a message.
    pub async fn delete(&self, ctx: &Context, message_id: &str) -> Result<SimpleQueryResult> {
        let mut query = Query::new();
        query.push("message_id", message_id);
        self.client
            .execute(
                ctx,
                ApiRequest::delete("delete_message", &["messages"]).query(query),
            )
            .await
    }

    /// List messages.
    pub async fn list(&self, ctx: &Context, query: &ListMessagesQuery) -> Result<MessageList> {
        let mut q = Query::new();
        if let Some(chat_id) = query.chat_id {
            q.push("chat_id", chat_id);
        }
        if let Some(count) = query.count {
            q.push("count", count);
        }
        q.push_list("message_ids", &query.message_ids);
        if let Some(from) = query.from {
            q.push("from", from);
        }
        if let Some(to) = query.to {
            q.push("to", to);
        }
        self.client
            .execute(ctx, ApiRequest::get("get_messages", &["messages"]).query(q))
            .await
    }

    /// Get a message by ID.
    pub async fn get(&self, ctx: &Context, message_id: &str) -> Result<Message> {
        self.client
            .execute(
                ctx,
                ApiRequest::get("get_message", &["messages", message_id]),
            )
            .await
    }

    /// Answer a button press.
    pub async fn answer_callback(
        &self,
        ctx: &Context,
        callback_id: &str,
        answer: &CallbackAnswer,
    ) -> Result<SimpleQueryResult> {
        let mut query = Query::new();
        query.push("callback_id", callback_id);
        self.client
            .execute(
                ctx,
                ApiRequest::post("answer_callback", &["answers"])
                    .query(query)
                    .json(answer),
            )
            .await
    }
}
