//! Typed async client for the Max Bot API.
//!
//! Every API method takes a [`Context`] bounding the call by a deadline and an
//! optional cancellation token, performs exactly one HTTP round trip, and
//! either returns a typed value or an [`Error`] classified as
//! [`ErrorKind::Api`], [`ErrorKind::Network`], [`ErrorKind::Timeout`] or
//! [`ErrorKind::Decode`]. Nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use maxbot_client::{Context, GetUpdatesOpts, MaxClient, NewMessageBody, Update};
//!
//! # async fn example() -> maxbot_client::Result<()> {
//! let client = MaxClient::from_env()?;
//! let ctx = Context::background();
//!
//! let mut opts = GetUpdatesOpts::default();
//! loop {
//!     let batch = client.updates().next_batch(&ctx, &opts).await?;
//!     for update in batch.updates {
//!         if let Update::MessageCreated(created) = update {
//!             if let Some(chat_id) = created.message.recipient.chat_id {
//!                 let reply = NewMessageBody::text("pong");
//!                 client.messages().send(&ctx, chat_id, &reply).await?;
//!             }
//!         }
//!     }
//!     if let Some(marker) = batch.marker {
//!         opts.marker = marker;
//!     }
//! }
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Bots**: get and edit the bot profile
//! - **Chats**: chat info, members, admins, actions, pinning
//! - **Messages**: send, edit, delete, list, answer callbacks
//! - **Uploads**: upload URLs, photo and media uploads, video details
//! - **Subscriptions**: webhook management
//! - **Updates**: long polling with typed update decoding

pub mod api;
pub mod attachment;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod optional;
pub mod payload;
pub mod poll;
pub mod types;
pub mod update;

pub use api::{GetUpdatesOpts, ListChatsQuery, ListMembersQuery, ListMessagesQuery};
pub use attachment::*;
pub use client::{ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, MaxClient};
pub use config::ClientConfig;
pub use context::{Cancelled, Context};
pub use error::{Error, ErrorKind, Result};
pub use optional::{OptBool, OptInt64, OptString, Optional};
pub use poll::{DEFAULT_POLL_TIMEOUT_SECS, POLL_SAFETY_BUFFER, PollWindow};
pub use types::*;
pub use update::*;
