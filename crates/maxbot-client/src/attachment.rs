//! Message attachments.
//!
//! Inbound attachments are resolved through [`Attachment`], keyed by their
//! `type` field. Outbound attachments are built with the
//! [`AttachmentRequest`] constructors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::payload::{Decoder, Variant, variant};
use crate::types::{Button, Keyboard, PhotoToken, ReplyButton, UploadedInfo, User};

// ─────────────────────────────────────────────────────────────────────────────
// Inbound payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Payload of an image attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoAttachmentPayload {
    /// Photo ID.
    pub photo_id: i64,
    /// Token for re-sending the photo.
    pub token: String,
    /// Image URL.
    pub url: String,
}

/// Payload shared by video and audio attachments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAttachmentPayload {
    /// Media URL.
    pub url: String,
    /// Token for re-sending.
    pub token: String,
}

/// Payload of a file attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAttachmentPayload {
    pub url: String,
    pub token: String,
}

/// Payload of a sticker attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerAttachmentPayload {
    pub url: String,
    pub code: String,
}

/// Payload of a contact attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAttachmentPayload {
    /// Contact in vCard format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcf_info: Option<String>,
    /// Contact as a Max user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_info: Option<User>,
}

/// Payload of a share (link preview) attachment. Also used when sending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShareAttachmentPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Thumbnail of a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoThumbnail {
    pub url: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Inbound attachments
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    pub payload: PhotoAttachmentPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoAttachment {
    pub payload: MediaAttachmentPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<VideoThumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioAttachment {
    pub payload: MediaAttachmentPayload,
    /// Speech-to-text transcription, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub payload: FileAttachmentPayload,
    pub filename: String,
    /// Size in bytes.
    pub size: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerAttachment {
    pub payload: StickerAttachmentPayload,
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAttachment {
    pub payload: ContactAttachmentPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareAttachment {
    pub payload: ShareAttachmentPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAttachment {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardAttachment {
    pub payload: Keyboard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardAttachment {
    pub buttons: Vec<Vec<ReplyButton>>,
}

/// Payload sent by a `message` button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAttachment {
    pub data: String,
}

/// An attachment received on a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Attachment {
    Image(PhotoAttachment),
    Video(VideoAttachment),
    Audio(AudioAttachment),
    File(FileAttachment),
    Sticker(StickerAttachment),
    Contact(ContactAttachment),
    Share(ShareAttachment),
    Location(LocationAttachment),
    InlineKeyboard(InlineKeyboardAttachment),
    ReplyKeyboard(ReplyKeyboardAttachment),
    Data(DataAttachment),
}

impl Variant for Attachment {
    const DISCRIMINATOR: &'static str = "type";

    fn decoder(tag: &str) -> Option<Decoder<Self>> {
        let decoder: Decoder<Self> = match tag {
            "image" => |raw| variant(raw, Attachment::Image),
            "video" => |raw| variant(raw, Attachment::Video),
            "audio" => |raw| variant(raw, Attachment::Audio),
            "file" => |raw| variant(raw, Attachment::File),
            "sticker" => |raw| variant(raw, Attachment::Sticker),
            "contact" => |raw| variant(raw, Attachment::Contact),
            "share" => |raw| variant(raw, Attachment::Share),
            "location" => |raw| variant(raw, Attachment::Location),
            "inline_keyboard" => |raw| variant(raw, Attachment::InlineKeyboard),
            "reply_keyboard" => |raw| variant(raw, Attachment::ReplyKeyboard),
            "data" => |raw| variant(raw, Attachment::Data),
            _ => return None,
        };
        Some(decoder)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Outbound attachments
// ─────────────────────────────────────────────────────────────────────────────

/// Image to attach: an external URL, a token of an existing photo, or tokens
/// returned by an upload. Set exactly one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhotoAttachmentRequestPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<HashMap<String, PhotoToken>>,
}

impl PhotoAttachmentRequestPayload {
    /// Image at an external URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Image identified by an existing token.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Image from upload tokens.
    pub fn from_photos(photos: HashMap<String, PhotoToken>) -> Self {
        Self {
            photos: Some(photos),
            ..Default::default()
        }
    }
}

/// Contact to attach.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactAttachmentRequestPayload {
    /// Display name.
    pub name: Option<String>,
    /// Max user ID of the contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcf_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcf_phone: Option<String>,
}

/// Sticker to attach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerAttachmentRequestPayload {
    pub code: String,
}

/// An attachment on an outgoing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttachmentRequest {
    Image {
        payload: PhotoAttachmentRequestPayload,
    },
    Video {
        payload: UploadedInfo,
    },
    Audio {
        payload: UploadedInfo,
    },
    File {
        payload: UploadedInfo,
    },
    Sticker {
        payload: StickerAttachmentRequestPayload,
    },
    Contact {
        payload: ContactAttachmentRequestPayload,
    },
    Share {
        payload: ShareAttachmentPayload,
    },
    InlineKeyboard {
        payload: Keyboard,
    },
    Location {
        latitude: f64,
        longitude: f64,
    },
    ReplyKeyboard {
        buttons: Vec<Vec<ReplyButton>>,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        direct: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        direct_user_id: Option<i64>,
    },
}

impl AttachmentRequest {
    pub fn photo(payload: PhotoAttachmentRequestPayload) -> Self {
        AttachmentRequest::Image { payload }
    }

    /// Video from an upload token.
    pub fn video(payload: UploadedInfo) -> Self {
        AttachmentRequest::Video { payload }
    }

    /// Audio from an upload token.
    pub fn audio(payload: UploadedInfo) -> Self {
        AttachmentRequest::Audio { payload }
    }

    /// File from an upload token.
    pub fn file(payload: UploadedInfo) -> Self {
        AttachmentRequest::File { payload }
    }

    pub fn sticker(code: impl Into<String>) -> Self {
        AttachmentRequest::Sticker {
            payload: StickerAttachmentRequestPayload { code: code.into() },
        }
    }

    pub fn contact(payload: ContactAttachmentRequestPayload) -> Self {
        AttachmentRequest::Contact { payload }
    }

    /// Link preview.
    pub fn share(payload: ShareAttachmentPayload) -> Self {
        AttachmentRequest::Share { payload }
    }

    /// Inline keyboard from rows of buttons.
    pub fn inline_keyboard(buttons: Vec<Vec<Button>>) -> Self {
        AttachmentRequest::InlineKeyboard {
            payload: Keyboard { buttons },
        }
    }

    pub fn location(latitude: f64, longitude: f64) -> Self {
        AttachmentRequest::Location {
            latitude,
            longitude,
        }
    }

    /// Reply keyboard shown to every chat member.
    pub fn reply_keyboard(buttons: Vec<Vec<ReplyButton>>) -> Self {
        AttachmentRequest::ReplyKeyboard {
            buttons,
            direct: false,
            direct_user_id: None,
        }
    }
}
