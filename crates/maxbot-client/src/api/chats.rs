//! Chats API.

use crate::client::{ApiRequest, MaxClient, Query};
use crate::context::Context;
use crate::error::Result;
use crate::types::{
    ActionRequestBody, Chat, ChatAdminsList, ChatList, ChatMember, ChatMembersList, ChatPatch,
    Message, PinMessageBody, PinnedMessage, SenderAction, SimpleQueryResult, UserIdsList,
};

/// Query parameters for listing chats.
#[derive(Debug, Clone, Default)]
pub struct ListChatsQuery {
    /// Page size (server default 50).
    pub count: Option<u32>,
    /// Cursor from a previous page.
    pub marker: Option<i64>,
}

/// Query parameters for listing chat members.
#[derive(Debug, Clone, Default)]
pub struct ListMembersQuery {
    /// Page size (server default 20).
    pub count: Option<u32>,
    /// Cursor from a previous page.
    pub marker: Option<i64>,
    /// Fetch only these users. Paging is ignored when set.
    pub user_ids: Vec<i64>,
}

/// Chats API client.
pub struct ChatsApi {
    client: MaxClient,
}

impl ChatsApi {
    pub(crate) fn new(client: MaxClient) -> Self {
        Self { client }
    }

    /// Get a chat by ID.
    pub async fn get(&self, ctx: &Context, chat_id: i64) -> Result<Chat> {
        let id = chat_id.to_string();
        self.client
            .execute(ctx, ApiRequest::get("get_chat", &["chats", &id]))
            .await
    }

    /// Get a public chat by its link or username.
    pub async fn get_by_link(&self, ctx: &Context, link: &str) -> Result<Chat> {
        self.client
            .execute(ctx, ApiRequest::get("get_chat_by_link", &["chats", link]))
            .await
    }

    /// List chats the bot participates in.
    pub async fn list(&self, ctx: &Context, query: &ListChatsQuery) -> Result<ChatList> {
        let mut q = Query::new();
        if let Some(count) = query.count {
            q.push("count", count);
        }
        if let Some(marker) = query.marker {
            q.push("marker", marker);
        }
        self.client
            .execute(ctx, ApiRequest::get("get_chats", &["chats"]).query(q))
            .await
    }

    /// Edit chat info. Unset fields are left unchanged.
    pub async fn edit(&self, ctx: &Context, chat_id: i64, patch: &ChatPatch) -> Result<Chat> {
        let id = chat_id.to_string();
        self.client
            .execute(ctx, ApiRequest::patch("edit_chat", &["chats", &id]).json(patch))
            .await
    }

    /// Delete a chat for all participants.
    pub async fn delete(&self, ctx: &Context, chat_id: i64) -> Result<SimpleQueryResult> {
        let id = chat_id.to_string();
        self.client
            .execute(ctx, ApiRequest::delete("delete_chat", &["chats", &id]))
            .await
    }

    /// List chat members.
    pub async fn members(
        &self,
        ctx: &Context,
        chat_id: i64,
        query: &ListMembersQuery,
    ) -> Result<ChatMembersList> {
        let id = chat_id.to_string();
        let mut q = Query::new();
        if let Some(count) = query.count {
            q.push("count", count);
        }
        if let Some(marker) = query.marker {
            q.push("marker", marker);
        }
        q.push_list("user_ids", &query.user_ids);
        self.client
            .execute(
                ctx,
                ApiRequest::get("get_members", &["chats", &id, "members"]).query(q),
            )
            .await
    }

    /// Add users to a chat.
    pub async fn add_members(
        &self,
        ctx: &Context,
        chat_id: i64,
        user_ids: &[i64],
    ) -> Result<SimpleQueryResult> {
        let id = chat_id.to_string();
        let body = UserIdsList {
            user_ids: user_ids.to_vec(),
        };
        self.client
            .execute(
                ctx,
                ApiRequest::post("add_members", &["chats", &id, "members"]).json(&body),
            )
            .await
    }

    /// Remove a user from a chat, optionally blocking them.
    pub async fn remove_member(
        &self,
        ctx: &Context,
        chat_id: i64,
        user_id: i64,
        block: bool,
    ) -> Result<SimpleQueryResult> {
        let id = chat_id.to_string();
        let mut q = Query::new();
        q.push("user_id", user_id).push_if(block, "block", true);
        self.client
            .execute(
                ctx,
                ApiRequest::delete("remove_member", &["chats", &id, "members"]).query(q),
            )
            .await
    }

    /// List chat administrators.
    pub async fn admins(&self, ctx: &Context, chat_id: i64) -> Result<ChatAdminsList> {
        let id = chat_id.to_string();
        self.client
            .execute(
                ctx,
                ApiRequest::get("get_admins", &["chats", &id, "members", "admins"]),
            )
            .await
    }

    /// Grant administrator rights.
    pub async fn set_admins(
        &self,
        ctx: &Context,
        chat_id: i64,
        admins: &ChatAdminsList,
    ) -> Result<SimpleQueryResult> {
        let id = chat_id.to_string();
        self.client
            .execute(
                ctx,
                ApiRequest::post("set_admins", &["chats", &id, "members", "admins"]).json(admins),
            )
            .await
    }

    /// Revoke administrator rights.
    pub async fn remove_admin(
        &self,
        ctx: &Context,
        chat_id: i64,
        user_id: i64,
    ) -> Result<SimpleQueryResult> {
        let id = chat_id.to_string();
        let user = user_id.to_string();
        self.client
            .execute(
                ctx,
                ApiRequest::delete("remove_admin", &["chats", &id, "members", "admins", &user]),
            )
            .await
    }

    /// The bot's own membership in a chat.
    pub async fn membership(&self, ctx: &Context, chat_id: i64) -> Result<ChatMember> {
        let id = chat_id.to_string();
        self.client
            .execute(
                ctx,
                ApiRequest::get("get_membership", &["chats", &id, "members", "me"]),
            )
            .await
    }

    /// Leave a chat.
    pub async fn leave(&self, ctx: &Context, chat_id: i64) -> Result<SimpleQueryResult> {
        let id = chat_id.to_string();
        self.client
            .execute(
                ctx,
                ApiRequest::delete("leave_chat", &["chats", &id, "members", "me"]),
            )
            .await
    }

    /// Show an action such as "typing" to chat members.
    pub async fn send_action(
        &self,
        ctx: &Context,
        chat_id: i64,
        action: SenderAction,
    ) -> Result<SimpleQueryResult> {
        let id = chat_id.to_string();
        let body = ActionRequestBody { action };
        self.client
            .execute(
                ctx,
                ApiRequest::post("send_action", &["chats", &id, "actions"]).json(&body),
            )
            .await
    }

    /// Pin a message.
    pub async fn pin(
        &self,
        ctx: &Context,
        chat_id: i64,
        body: &PinMessageBody,
    ) -> Result<SimpleQueryResult> {
        let id = chat_id.to_string();
        self.client
            .execute(
                ctx,
                ApiRequest::put("pin_message", &["chats", &id, "pin"]).json(body),
            )
            .await
    }

    /// Unpin the pinned message.
    pub async fn unpin(&self, ctx: &Context, chat_id: i64) -> Result<SimpleQueryResult> {
        let id = chat_id.to_string();
        self.client
            .execute(
                ctx,
                ApiRequest::delete("unpin_message", &["chats", &id, "pin"]),
            )
            .await
    }

    /// The pinned message, if any.
    pub async fn pinned(&self, ctx: &Context, chat_id: i64) -> Result<Option<Message>> {
        let id = chat_id.to_string();
        let result: PinnedMessage = self
            .client
            .execute(
                ctx,
                ApiRequest::get("get_pinned_message", &["chats", &id, "pin"]),
            )
            .await?;
        Ok(result.message)
    }
}
