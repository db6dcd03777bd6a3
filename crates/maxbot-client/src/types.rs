//! Request and response types for the Max Bot API.
//!
//! These types mirror the API's JSON contract. Partial-update bodies use
//! [`Optional`] fields; payloads whose shape depends on a discriminator live
//! in [`crate::update`] and [`crate::attachment`].

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use crate::attachment::{Attachment, AttachmentRequest, PhotoAttachmentRequestPayload};
use crate::error::{Error, Result};
use crate::optional::{OptBool, OptInt64, OptString, Optional};
use crate::payload;

/// Decode a list that the server may send as `null`, which reads as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ─────────────────────────────────────────────────────────────────────────────
// Enumerations
// ─────────────────────────────────────────────────────────────────────────────

/// Type of a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    /// One-to-one dialog.
    Dialog,
    /// Group chat.
    Chat,
    /// Channel.
    Channel,
    /// A chat type this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// The bot's status in a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatStatus {
    Active,
    Removed,
    Left,
    Closed,
    Suspended,
    #[serde(other)]
    Unknown,
}

/// Action shown to chat members while the bot works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SenderAction {
    #[serde(rename = "typing_on")]
    TypingOn,
    #[serde(rename = "sending_photo")]
    SendingPhoto,
    #[serde(rename = "sending_video")]
    SendingVideo,
    #[serde(rename = "sending_audio")]
    SendingAudio,
    #[serde(rename = "sending_file")]
    SendingFile,
    #[serde(rename = "mark_seen")]
    MarkSeen,
}

/// Media category of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadType {
    Image,
    Video,
    Audio,
    File,
}

impl UploadType {
    /// Wire name, as used in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadType::Image => "image",
            UploadType::Video => "video",
            UploadType::Audio => "audio",
            UploadType::File => "file",
        }
    }
}

/// Visual intent of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Positive,
    Negative,
    Default,
    #[serde(other)]
    Unknown,
}

/// How a message links to another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLinkType {
    Forward,
    Reply,
    #[serde(other)]
    Unknown,
}

/// Text formatting mode for outgoing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextFormat {
    Markdown,
    Html,
}

/// Permission granted to a chat administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAdminPermission {
    ReadAllMessages,
    AddRemoveMembers,
    AddAdmins,
    ChangeChatInfo,
    PinMessage,
    Write,
    #[serde(other)]
    Unknown,
}

// ─────────────────────────────────────────────────────────────────────────────
// Users and bots
// ─────────────────────────────────────────────────────────────────────────────

/// A Max user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub user_id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Public username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Whether the user is a bot.
    #[serde(default)]
    pub is_bot: bool,
    /// Last activity (Unix milliseconds).
    #[serde(default)]
    pub last_activity_time: i64,
}

/// A user together with avatar and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWithPhoto {
    /// Base user fields.
    #[serde(flatten)]
    pub user: User,
    /// Profile description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Small avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Full-size avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_avatar_url: Option<String>,
}

/// The bot's own profile, returned by `GET /me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotInfo {
    /// Profile fields.
    #[serde(flatten)]
    pub profile: UserWithPhoto,
    /// Commands the bot advertises.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub commands: Vec<BotCommand>,
}

/// A command supported by the bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotCommand {
    /// Command name, without the leading slash.
    pub name: String,
    /// Description shown to users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update of the bot's profile (`PATCH /me`).
///
/// Only set fields are sent; the rest stay unchanged server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotPatch {
    /// Legacy display name; prefer `first_name`.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub name: OptString,
    /// New first name.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub first_name: OptString,
    /// New description. `Some("")` clears it.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub description: OptString,
    /// Replacement command list.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub commands: Optional<Vec<BotCommand>>,
    /// New avatar.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub photo: Optional<PhotoAttachmentRequestPayload>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Chats
// ─────────────────────────────────────────────────────────────────────────────

/// A generic image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL.
    pub url: String,
}

/// A Max chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    /// Chat ID.
    pub chat_id: i64,
    /// Chat type.
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    /// Bot's status in the chat.
    pub status: ChatStatus,
    /// Title (absent for dialogs).
    #[serde(default)]
    pub title: Option<String>,
    /// Chat icon.
    #[serde(default)]
    pub icon: Option<Image>,
    /// Time of the last event (Unix milliseconds).
    #[serde(default)]
    pub last_event_time: i64,
    /// Number of participants.
    #[serde(default)]
    pub participants_count: i64,
    /// Owner user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    /// Participant user IDs mapped to their last activity time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<HashMap<String, i64>>,
    /// Whether the chat is public.
    #[serde(default)]
    pub is_public: bool,
    /// Public link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// The other party of a dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_with_user: Option<UserWithPhoto>,
    /// Number of messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_count: Option<i64>,
    /// ID of the message the chat was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_message_id: Option<String>,
    /// Pinned message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
}

/// A page of chats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatList {
    /// Chats on this page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chats: Vec<Chat>,
    /// Cursor for the next page, `None` on the last page.
    #[serde(default)]
    pub marker: Option<i64>,
}

/// Partial update of a chat (`PATCH /chats/{chatId}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatPatch {
    /// New icon.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub icon: Optional<PhotoAttachmentRequestPayload>,
    /// New title.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub title: OptString,
    /// Message ID to pin.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub pin: OptString,
    /// Whether to notify members about the change.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub notify: OptBool,
}

/// A chat member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMember {
    /// Profile fields.
    #[serde(flatten)]
    pub profile: UserWithPhoto,
    /// Last access time (Unix milliseconds).
    #[serde(default)]
    pub last_access_time: i64,
    /// Whether the member owns the chat.
    #[serde(default)]
    pub is_owner: bool,
    /// Whether the member is an administrator.
    #[serde(default)]
    pub is_admin: bool,
    /// Join time (Unix milliseconds).
    #[serde(default)]
    pub join_time: i64,
    /// Admin permissions.
    #[serde(default)]
    pub permissions: Option<Vec<ChatAdminPermission>>,
    /// Admin alias.
    #[serde(default)]
    pub alias: Option<String>,
}

/// A page of chat members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMembersList {
    /// Members on this page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub members: Vec<ChatMember>,
    /// Cursor for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<i64>,
}

/// An administrator and their permissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAdmin {
    /// User ID.
    pub user_id: i64,
    /// Granted permissions.
    pub permissions: Vec<ChatAdminPermission>,
    /// Display alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// List of chat administrators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAdminsList {
    /// Administrators.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub admins: Vec<ChatAdmin>,
}

/// Body of `POST /chats/{chatId}/members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdsList {
    /// Users to add.
    pub user_ids: Vec<i64>,
}

/// Body of `POST /chats/{chatId}/actions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequestBody {
    /// Action to show.
    pub action: SenderAction,
}

/// Body of `PUT /chats/{chatId}/pin`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinMessageBody {
    /// Message to pin.
    pub message_id: String,
    /// Whether to notify members.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub notify: OptBool,
}

/// Response of `GET /chats/{chatId}/pin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinnedMessage {
    /// The pinned message, if any.
    #[serde(default)]
    pub message: Option<Message>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────────────────────────────────────

/// Who a message was sent to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    /// Chat ID.
    #[serde(default)]
    pub chat_id: Option<i64>,
    /// Chat type.
    pub chat_type: ChatType,
    /// User ID, for dialogs.
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Message statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageStat {
    /// View count.
    pub views: i64,
}

/// A message in a chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Sender; absent for channel posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<User>,
    /// Recipient.
    pub recipient: Recipient,
    /// Creation time (Unix milliseconds).
    pub timestamp: i64,
    /// Forwarded or replied-to message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkedMessage>,
    /// Body.
    pub body: MessageBody,
    /// Statistics (channels only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat: Option<MessageStat>,
    /// Public URL (channels only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body of a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    /// Message ID.
    pub mid: String,
    /// Sequence number within the chat.
    #[serde(default)]
    pub seq: i64,
    /// Text.
    #[serde(default)]
    pub text: Option<String>,
    /// Raw attachments; decode with [`MessageBody::decode_attachments`].
    #[serde(default)]
    pub attachments: Option<Vec<Box<RawValue>>>,
    /// Text markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<Vec<MarkupElement>>,
}

impl MessageBody {
    /// Decode the attachments into typed values, skipping unknown types.
    ///
    /// `None` means the message carried no attachment list at all.
    pub fn decode_attachments(&self) -> Result<Option<Vec<Attachment>>> {
        payload::decode_present(self.attachments.as_deref())
            .map_err(|e| Error::decode("decode_attachments", e))
    }
}

/// A forwarded or replied-to message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedMessage {
    /// Link type.
    #[serde(rename = "type")]
    pub link_type: MessageLinkType,
    /// Original sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<User>,
    /// Original chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    /// Original body.
    pub message: MessageBody,
}

/// A list of messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageList {
    /// Messages.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub messages: Vec<Message>,
}

/// Body for sending or editing a message.
///
/// `text` is tri-state: unset keeps the existing text on edit, while
/// `Optional::some(String::new())` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMessageBody {
    /// Text.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub text: OptString,
    /// Attachments.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub attachments: Optional<Vec<AttachmentRequest>>,
    /// Reply or forward link.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub link: Optional<NewMessageLink>,
    /// Whether to notify chat members.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub notify: OptBool,
    /// Text format.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub format: Optional<TextFormat>,
    /// Suppress link previews. Sent as a query parameter, not in the body.
    #[serde(skip)]
    pub disable_link_preview: bool,
}

impl NewMessageBody {
    /// A body with just text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Optional::some(text.into()),
            ..Default::default()
        }
    }

    /// Attach something.
    pub fn with_attachment(mut self, attachment: AttachmentRequest) -> Self {
        let mut attachments = self.attachments.take().unwrap_or_default();
        attachments.push(attachment);
        self.attachments = Optional::some(attachments);
        self
    }

    /// Reply to a message.
    pub fn reply_to(mut self, mid: impl Into<String>) -> Self {
        self.link = Optional::some(NewMessageLink {
            link_type: MessageLinkType::Reply,
            mid: mid.into(),
        });
        self
    }

    /// Set the text format.
    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = Optional::some(format);
        self
    }
}

/// Link to another message when sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessageLink {
    /// Link type.
    #[serde(rename = "type")]
    pub link_type: MessageLinkType,
    /// Linked message ID.
    pub mid: String,
}

/// Response of `POST /messages`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SendMessageResult {
    pub message: Message,
}

/// A text formatting span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupElement {
    /// Markup type (`strong`, `emphasized`, `link`, `user_mention`, ...).
    #[serde(rename = "type")]
    pub markup_type: String,
    /// Start offset.
    pub from: i64,
    /// Length.
    pub length: i64,
    /// Link target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Mentioned user link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_link: Option<String>,
    /// Mentioned user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyboards and callbacks
// ─────────────────────────────────────────────────────────────────────────────

/// Two-dimensional grid of inline buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyboard {
    /// Rows of buttons.
    pub buttons: Vec<Vec<Button>>,
}

/// An inline keyboard button.
///
/// `button_type` is one of `callback`, `link`, `request_contact`,
/// `request_geo_location`, `chat`, `message`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Button {
    /// Button type.
    #[serde(rename = "type")]
    pub button_type: String,
    /// Label.
    pub text: String,
    /// Callback payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// Link target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Visual intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Send the location without confirmation.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub quick: bool,
    /// Title of the chat a `chat` button creates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_title: Option<String>,
    /// Description of the chat a `chat` button creates.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub chat_description: OptString,
    /// Start payload delivered with `message_chat_created`.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub start_payload: OptString,
    /// Stable identifier of a `chat` button.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub uuid: OptInt64,
}

impl Button {
    fn new(button_type: &str, text: impl Into<String>) -> Self {
        Self {
            button_type: button_type.to_string(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// A button that sends `payload` back as a `message_callback` update.
    pub fn callback(text: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            ..Self::new("callback", text)
        }
    }

    /// A button that opens `url`.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new("link", text)
        }
    }

    /// A button asking the user to share their contact.
    pub fn request_contact(text: impl Into<String>) -> Self {
        Self::new("request_contact", text)
    }

    /// A button asking the user to share their location.
    pub fn request_geo_location(text: impl Into<String>, quick: bool) -> Self {
        Self {
            quick,
            ..Self::new("request_geo_location", text)
        }
    }

    /// A button that creates a new chat titled `chat_title`.
    pub fn chat(text: impl Into<String>, chat_title: impl Into<String>) -> Self {
        Self {
            chat_title: Some(chat_title.into()),
            ..Self::new("chat", text)
        }
    }

    /// A button that sends its label as a message.
    pub fn message(text: impl Into<String>) -> Self {
        Self::new("message", text)
    }

    /// Set the visual intent.
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }
}

/// A reply keyboard button.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReplyButton {
    /// Button type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub button_type: Option<String>,
    /// Label.
    pub text: String,
    /// Payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// Visual intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Send without confirmation.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub quick: bool,
}

/// Data received when a user presses an inline button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Callback {
    /// Press time (Unix milliseconds).
    pub timestamp: i64,
    /// ID to answer with.
    pub callback_id: String,
    /// Button payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// User who pressed.
    pub user: User,
}

/// Answer to a callback (`POST /answers`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallbackAnswer {
    /// Replacement for the original message.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub message: Optional<NewMessageBody>,
    /// One-off notification shown to the user.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub notification: OptString,
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscriptions
// ─────────────────────────────────────────────────────────────────────────────

/// A webhook subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Webhook URL.
    pub url: String,
    /// Creation time (Unix milliseconds).
    pub time: i64,
    /// Update types delivered, `None` for all.
    #[serde(default)]
    pub update_types: Option<Vec<String>>,
    /// API version.
    #[serde(default)]
    pub version: Option<String>,
}

/// Response of `GET /subscriptions`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SubscriptionsResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subscriptions: Vec<Subscription>,
}

/// Body of `POST /subscriptions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionRequestBody {
    /// Webhook URL.
    pub url: String,
    /// Secret echoed in the `X-Max-Bot-Api-Secret` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Update types to deliver.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub update_types: Vec<String>,
    /// API version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Common responses
// ─────────────────────────────────────────────────────────────────────────────

/// Simple success/failure response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleQueryResult {
    /// Whether the call succeeded.
    pub success: bool,
    /// Explanation on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Uploads and media
// ─────────────────────────────────────────────────────────────────────────────

/// Single-use upload URL returned by `POST /uploads`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadEndpoint {
    /// URL to POST the file to.
    pub url: String,
    /// Pre-issued token for video/audio uploads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Token of one uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoToken {
    /// Token.
    pub token: String,
}

/// Response of an image upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoTokens {
    /// Tokens keyed by size/variant.
    pub photos: HashMap<String, PhotoToken>,
}

/// Token of an uploaded video, audio or file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedInfo {
    /// Token.
    pub token: String,
}

/// Playback URLs of a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp4_1080: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp4_720: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp4_480: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp4_360: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp4_240: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp4_144: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hls: Option<String>,
}

/// Response of `GET /videos/{videoToken}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoAttachmentDetails {
    /// Video token.
    pub token: String,
    /// Playback URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<VideoUrls>,
    /// Thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<crate::attachment::PhotoAttachmentPayload>,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
    /// Duration in seconds.
    pub duration: i64,
}
