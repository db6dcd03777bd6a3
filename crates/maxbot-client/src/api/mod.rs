//! API endpoint implementations.

mod bots;
mod chats;
mod messages;
mod subscriptions;
mod updates;
mod uploads;

pub use bots::BotsApi;
pub use chats::{ChatsApi, ListChatsQuery, ListMembersQuery};
pub use messages::{ListMessagesQuery, MessagesApi};
pub use subscriptions::SubscriptionsApi;
pub use updates::{GetUpdatesOpts, UpdatesApi};
pub use uploads::UploadsApi;
