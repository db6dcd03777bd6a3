//! Update events delivered by long polling or webhooks.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{Error, Result};
use crate::payload::{self, Decoder, Variant, variant};
use crate::types::{Callback, Chat, Message, User, null_as_empty};

/// Type of an update event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    MessageCreated,
    MessageCallback,
    MessageEdited,
    MessageRemoved,
    BotStarted,
    BotStopped,
    BotAdded,
    BotRemoved,
    UserAdded,
    UserRemoved,
    ChatTitleChanged,
    MessageChatCreated,
    DialogMuted,
    DialogUnmuted,
    DialogCleared,
    DialogRemoved,
    #[serde(other)]
    Unknown,
}

impl UpdateType {
    /// Wire name, as used in the `types` filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateType::MessageCreated => "message_created",
            UpdateType::MessageCallback => "message_callback",
            UpdateType::MessageEdited => "message_edited",
            UpdateType::MessageRemoved => "message_removed",
            UpdateType::BotStarted => "bot_started",
            UpdateType::BotStopped => "bot_stopped",
            UpdateType::BotAdded => "bot_added",
            UpdateType::BotRemoved => "bot_removed",
            UpdateType::UserAdded => "user_added",
            UpdateType::UserRemoved => "user_removed",
            UpdateType::ChatTitleChanged => "chat_title_changed",
            UpdateType::MessageChatCreated => "message_chat_created",
            UpdateType::DialogMuted => "dialog_muted",
            UpdateType::DialogUnmuted => "dialog_unmuted",
            UpdateType::DialogCleared => "dialog_cleared",
            UpdateType::DialogRemoved => "dialog_removed",
            UpdateType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for UpdateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreatedUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub message: Message,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCallbackUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub callback: Callback,
    /// Message carrying the pressed keyboard. Absent if it was deleted.
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEditedUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub message: Message,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRemovedUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub message_id: String,
    pub chat_id: i64,
    pub user_id: i64,
}

/// A user pressed Start in a dialog with the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotStartedUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub chat_id: i64,
    pub user: User,
    /// Deep-link payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_locale: Option<String>,
}

/// A user stopped the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotStoppedUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub chat_id: i64,
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_locale: Option<String>,
}

/// Bot membership change. Shared by `bot_added` and `bot_removed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotMembershipUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub chat_id: i64,
    pub user: User,
    #[serde(default)]
    pub is_channel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAddedUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub chat_id: i64,
    pub user: User,
    /// Who added the user; absent when they joined by link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inviter_id: Option<i64>,
    #[serde(default)]
    pub is_channel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRemovedUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub chat_id: i64,
    pub user: User,
    /// Administrator who removed the user; absent when they left.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<i64>,
    #[serde(default)]
    pub is_channel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTitleChangedUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub chat_id: i64,
    pub user: User,
    pub title: String,
}

/// A chat was created through a `chat` button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageChatCreatedUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub chat: Chat,
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_payload: Option<String>,
}

/// Dialog state change. Shared by the `dialog_*` update types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogUpdate {
    pub update_type: UpdateType,
    /// Event time (Unix milliseconds).
    pub timestamp: i64,
    pub chat_id: i64,
    pub user: User,
    /// Muted until (Unix milliseconds), for `dialog_muted`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted_until: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_locale: Option<String>,
}

/// A typed update event.
#[derive(Debug, Clone)]
pub enum Update {
    MessageCreated(MessageCreatedUpdate),
    MessageCallback(MessageCallbackUpdate),
    MessageEdited(MessageEditedUpdate),
    MessageRemoved(MessageRemovedUpdate),
    BotStarted(BotStartedUpdate),
    BotStopped(BotStoppedUpdate),
    BotAdded(BotMembershipUpdate),
    BotRemoved(BotMembershipUpdate),
    UserAdded(UserAddedUpdate),
    UserRemoved(UserRemovedUpdate),
    ChatTitleChanged(ChatTitleChangedUpdate),
    MessageChatCreated(MessageChatCreatedUpdate),
    DialogMuted(DialogUpdate),
    DialogUnmuted(DialogUpdate),
    DialogCleared(DialogUpdate),
    DialogRemoved(DialogUpdate),
}

impl Update {
    /// The update's type.
    pub fn update_type(&self) -> UpdateType {
        match self {
            Update::MessageCreated(u) => u.update_type,
            Update::MessageCallback(u) => u.update_type,
            Update::MessageEdited(u) => u.update_type,
            Update::MessageRemoved(u) => u.update_type,
            Update::BotStarted(u) => u.update_type,
            Update::BotStopped(u) => u.update_type,
            Update::BotAdded(u) | Update::BotRemoved(u) => u.update_type,
            Update::UserAdded(u) => u.update_type,
            Update::UserRemoved(u) => u.update_type,
            Update::ChatTitleChanged(u) => u.update_type,
            Update::MessageChatCreated(u) => u.update_type,
            Update::DialogMuted(u)
            | Update::DialogUnmuted(u)
            | Update::DialogCleared(u)
            | Update::DialogRemoved(u) => u.update_type,
        }
    }

    /// Event time (Unix milliseconds).
    pub fn timestamp(&self) -> i64 {
        match self {
            Update::MessageCreated(u) => u.timestamp,
            Update::MessageCallback(u) => u.timestamp,
            Update::MessageEdited(u) => u.timestamp,
            Update::MessageRemoved(u) => u.timestamp,
            Update::BotStarted(u) => u.timestamp,
            Update::BotStopped(u) => u.timestamp,
            Update::BotAdded(u) | Update::BotRemoved(u) => u.timestamp,
            Update::UserAdded(u) => u.timestamp,
            Update::UserRemoved(u) => u.timestamp,
            Update::ChatTitleChanged(u) => u.timestamp,
            Update::MessageChatCreated(u) => u.timestamp,
            Update::DialogMuted(u)
            | Update::DialogUnmuted(u)
            | Update::DialogCleared(u)
            | Update::DialogRemoved(u) => u.timestamp,
        }
    }
}

impl Variant for Update {
    const DISCRIMINATOR: &'static str = "update_type";

    fn decoder(tag: &str) -> Option<Decoder<Self>> {
        let decoder: Decoder<Self> = match tag {
            "message_created" => |raw| variant(raw, Update::MessageCreated),
            "message_callback" => |raw| variant(raw, Update::MessageCallback),
            "message_edited" => |raw| variant(raw, Update::MessageEdited),
            "message_removed" => |raw| variant(raw, Update::MessageRemoved),
            "bot_started" => |raw| variant(raw, Update::BotStarted),
            "bot_stopped" => |raw| variant(raw, Update::BotStopped),
            "bot_added" => |raw| variant(raw, Update::BotAdded),
            "bot_removed" => |raw| variant(raw, Update::BotRemoved),
            "user_added" => |raw| variant(raw, Update::UserAdded),
            "user_removed" => |raw| variant(raw, Update::UserRemoved),
            "chat_title_changed" => |raw| variant(raw, Update::ChatTitleChanged),
            "message_chat_created" => |raw| variant(raw, Update::MessageChatCreated),
            "dialog_muted" => |raw| variant(raw, Update::DialogMuted),
            "dialog_unmuted" => |raw| variant(raw, Update::DialogUnmuted),
            "dialog_cleared" => |raw| variant(raw, Update::DialogCleared),
            "dialog_removed" => |raw| variant(raw, Update::DialogRemoved),
            _ => return None,
        };
        Some(decoder)
    }
}

/// One page of the update feed, with updates still in raw form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateList {
    /// Raw update objects; decode with [`UpdateList::decode`].
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updates: Vec<Box<RawValue>>,
    /// Marker to pass on the next poll. `None` when the feed is drained.
    #[serde(default)]
    pub marker: Option<i64>,
}

impl UpdateList {
    /// Decode the updates into typed values, skipping unknown types.
    pub fn decode(&self) -> Result<Vec<Update>> {
        payload::decode_all(&self.updates).map_err(|e| Error::decode("decode_updates", e))
    }
}

/// Decoded updates together with the next marker.
#[derive(Debug, Clone)]
pub struct UpdateBatch {
    pub updates: Vec<Update>,
    pub marker: Option<i64>,
}
