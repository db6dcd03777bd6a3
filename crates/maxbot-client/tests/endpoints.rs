//! Endpoint integration tests: paths, query parameters and bodies.

mod common;

use anyhow::Result;
use maxbot_client::{
    AttachmentRequest, BotPatch, Button, CallbackAnswer, ChatPatch, Context, ListChatsQuery,
    ListMembersQuery, ListMessagesQuery, NewMessageBody, Optional, PinMessageBody, SenderAction,
    SubscriptionRequestBody, TextFormat,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

use common::TestBot;

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": true}))
}

// ─────────────────────────────────────────────────────────────────────────────
// Bots
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_edit_bot_sends_only_set_fields() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("PATCH"))
        .and(path("/me"))
        .and(body_json(json!({"first_name": "Renamed", "description": ""})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": 1,
            "first_name": "Renamed",
            "is_bot": true,
            "last_activity_time": 0
        })))
        .expect(1)
        .mount(&bot.server)
        .await;

    let patch = BotPatch {
        first_name: "Renamed".into(),
        description: "".into(),
        ..Default::default()
    };
    let info = bot.client.bots().edit(&Context::background(), &patch).await?;
    assert_eq!(info.profile.user.first_name, "Renamed");
    assert!(info.profile.user.is_bot);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_send_message() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(query_param("chat_id", "12345"))
        .and(query_param_is_missing("disable_link_preview"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"text": "Hello, Max!", "format": "markdown"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": common::message(12345, "mid.abc", "Hello, Max!")
        })))
        .expect(1)
        .mount(&bot.server)
        .await;

    let body = NewMessageBody::text("Hello, Max!").with_format(TextFormat::Markdown);
    let message = bot
        .client
        .messages()
        .send(&Context::background(), 12345, &body)
        .await?;
    assert_eq!(message.body.mid, "mid.abc");
    assert_eq!(message.recipient.chat_id, Some(12345));
    Ok(())
}

#[tokio::test]
async fn test_send_to_user_with_keyboard() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(query_param("user_id", "7"))
        .and(query_param("disable_link_preview", "true"))
        .and(body_json(json!({
            "text": "Pick one",
            "attachments": [{
                "type": "inline_keyboard",
                "payload": {"buttons": [[
                    {"type": "callback", "text": "Yes", "payload": "yes"},
                    {"type": "callback", "text": "No", "payload": "no"}
                ]]}
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": common::message(7, "mid.kb", "Pick one")
        })))
        .expect(1)
        .mount(&bot.server)
        .await;

    let mut body = NewMessageBody::text("Pick one").with_attachment(
        AttachmentRequest::inline_keyboard(vec![vec![
            Button::callback("Yes", "yes"),
            Button::callback("No", "no"),
        ]]),
    );
    body.disable_link_preview = true;

    let message = bot
        .client
        .messages()
        .send_to_user(&Context::background(), 7, &body)
        .await?;
    assert_eq!(message.body.mid, "mid.kb");
    Ok(())
}

#[tokio::test]
async fn test_edit_message_can_clear_text() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("PUT"))
        .and(path("/messages"))
        .and(query_param("message_id", "mid.1"))
        .and(body_json(json!({"text": "", "notify": false})))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;

    let body = NewMessageBody {
        text: Optional::some(String::new()),
        notify: false.into(),
        ..Default::default()
    };
    let result = bot
        .client
        .messages()
        .edit(&Context::background(), "mid.1", &body)
        .await?;
    assert!(result.success);
    Ok(())
}

#[tokio::test]
async fn test_delete_and_get_message() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("DELETE"))
        .and(path("/messages"))
        .and(query_param("message_id", "mid.2"))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/messages/mid.2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::message(3, "mid.2", "still here")),
        )
        .expect(1)
        .mount(&bot.server)
        .await;

    let ctx = Context::background();
    let message = bot.client.messages().get(&ctx, "mid.2").await?;
    assert_eq!(message.body.text.as_deref(), Some("still here"));
    assert!(bot.client.messages().delete(&ctx, "mid.2").await?.success);
    Ok(())
}

#[tokio::test]
async fn test_list_messages_query() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .and(query_param("chat_id", "5"))
        .and(query_param("count", "2"))
        .and(query_param("from", "100"))
        .and(query_param_is_missing("to"))
        .and(query_param_is_missing("message_ids"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [common::message(5, "m1", "a"), common::message(5, "m2", "b")]
        })))
        .expect(1)
        .mount(&bot.server)
        .await;

    let query = ListMessagesQuery {
        chat_id: Some(5),
        count: Some(2),
        from: Some(100),
        ..Default::default()
    };
    let list = bot
        .client
        .messages()
        .list(&Context::background(), &query)
        .await?;
    assert_eq!(list.messages.len(), 2);
    assert_eq!(list.messages[1].body.mid, "m2");
    Ok(())
}

#[tokio::test]
async fn test_answer_callback_notification_only() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("POST"))
        .and(path("/answers"))
        .and(query_param("callback_id", "cb-9"))
        .and(body_json(json!({"notification": "Done"})))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;

    let answer = CallbackAnswer {
        notification: "Done".into(),
        ..Default::default()
    };
    bot.client
        .messages()
        .answer_callback(&Context::background(), "cb-9", &answer)
        .await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Chats
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_chats() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("GET"))
        .and(path("/chats"))
        .and(query_param("count", "10"))
        .and(query_param_is_missing("marker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chats": [common::chat(1, "General"), common::chat(2, "Random")],
            "marker": 2
        })))
        .expect(1)
        .mount(&bot.server)
        .await;

    let query = ListChatsQuery {
        count: Some(10),
        marker: None,
    };
    let list = bot.client.chats().list(&Context::background(), &query).await?;
    assert_eq!(list.chats.len(), 2);
    assert_eq!(list.chats[0].title.as_deref(), Some("General"));
    assert_eq!(list.marker, Some(2));
    Ok(())
}

#[tokio::test]
async fn test_get_chat_by_link_escapes_path() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("GET"))
        .and(path("/chats/@team%20chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::chat(3, "Team")))
        .expect(1)
        .mount(&bot.server)
        .await;

    let chat = bot
        .client
        .chats()
        .get_by_link(&Context::background(), "@team chat")
        .await?;
    assert_eq!(chat.chat_id, 3);
    Ok(())
}

#[tokio::test]
async fn test_edit_chat_tri_state() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("PATCH"))
        .and(path("/chats/42"))
        .and(body_json(json!({"title": "New Title", "notify": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::chat(42, "New Title")))
        .expect(1)
        .mount(&bot.server)
        .await;

    let patch = ChatPatch {
        title: "New Title".into(),
        notify: false.into(),
        ..Default::default()
    };
    let chat = bot
        .client
        .chats()
        .edit(&Context::background(), 42, &patch)
        .await?;
    assert_eq!(chat.title.as_deref(), Some("New Title"));
    Ok(())
}

#[tokio::test]
async fn test_members_filtered_by_ids() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("GET"))
        .and(path("/chats/42/members"))
        .and(query_param("user_ids", "1,2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "members": [{
                "user_id": 1,
                "first_name": "Alice",
                "is_bot": false,
                "last_activity_time": 0,
                "last_access_time": 10,
                "is_owner": true,
                "is_admin": true,
                "join_time": 5,
                "permissions": ["write", "pin_message"]
            }]
        })))
        .expect(1)
        .mount(&bot.server)
        .await;

    let query = ListMembersQuery {
        user_ids: vec![1, 2],
        ..Default::default()
    };
    let list = bot
        .client
        .chats()
        .members(&Context::background(), 42, &query)
        .await?;
    assert_eq!(list.members.len(), 1);
    assert!(list.members[0].is_owner);
    assert_eq!(list.members[0].profile.user.first_name, "Alice");
    assert_eq!(list.marker, None);
    Ok(())
}

#[tokio::test]
async fn test_member_management() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("POST"))
        .and(path("/chats/42/members"))
        .and(body_json(json!({"user_ids": [7, 8]})))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/chats/42/members"))
        .and(query_param("user_id", "7"))
        .and(query_param("block", "true"))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/chats/42/members/admins/8"))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/chats/42/members/me"))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;

    let ctx = Context::background();
    let chats = bot.client.chats();
    assert!(chats.add_members(&ctx, 42, &[7, 8]).await?.success);
    assert!(chats.remove_member(&ctx, 42, 7, true).await?.success);
    assert!(chats.remove_admin(&ctx, 42, 8).await?.success);
    assert!(chats.leave(&ctx, 42).await?.success);
    Ok(())
}

#[tokio::test]
async fn test_admins_round_trip() -> Result<()> {
    let bot = TestBot::start().await;
    let admins = json!({"admins": [{"user_id": 7, "permissions": ["write", "add_admins"]}]});
    Mock::given(method("GET"))
        .and(path("/chats/42/members/admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(admins.clone()))
        .expect(1)
        .mount(&bot.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chats/42/members/admins"))
        .and(body_json(admins))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;

    let ctx = Context::background();
    let list = bot.client.chats().admins(&ctx, 42).await?;
    assert_eq!(list.admins[0].user_id, 7);
    bot.client.chats().set_admins(&ctx, 42, &list).await?;
    Ok(())
}

#[tokio::test]
async fn test_send_action() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("POST"))
        .and(path("/chats/42/actions"))
        .and(body_json(json!({"action": "typing_on"})))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;

    let result = bot
        .client
        .chats()
        .send_action(&Context::background(), 42, SenderAction::TypingOn)
        .await?;
    assert!(result.success);
    Ok(())
}

#[tokio::test]
async fn test_send_action_reports_failure() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("POST"))
        .and(path("/chats/42/actions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "chat is read-only"
        })))
        .expect(1)
        .mount(&bot.server)
        .await;

    let result = bot
        .client
        .chats()
        .send_action(&Context::background(), 42, SenderAction::MarkSeen)
        .await?;
    assert!(!result.success);
    assert_eq!(result.message.as_deref(), Some("chat is read-only"));
    Ok(())
}

#[tokio::test]
async fn test_pin_unpin_and_pinned() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("PUT"))
        .and(path("/chats/42/pin"))
        .and(body_json(json!({"message_id": "mid.7", "notify": false})))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/chats/42/pin"))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/chats/42/pin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": null})))
        .expect(1)
        .mount(&bot.server)
        .await;

    let ctx = Context::background();
    let chats = bot.client.chats();
    let body = PinMessageBody {
        message_id: "mid.7".into(),
        notify: false.into(),
    };
    chats.pin(&ctx, 42, &body).await?;
    chats.unpin(&ctx, 42).await?;
    assert!(chats.pinned(&ctx, 42).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_membership_and_delete() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("GET"))
        .and(path("/chats/42/members/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": 100,
            "first_name": "Bot",
            "is_bot": true,
            "last_activity_time": 0,
            "last_access_time": 0,
            "is_owner": false,
            "is_admin": true,
            "join_time": 1
        })))
        .mount(&bot.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/chats/42"))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;

    let ctx = Context::background();
    let me = bot.client.chats().membership(&ctx, 42).await?;
    assert!(me.is_admin);
    assert!(me.permissions.is_none());
    assert!(bot.client.chats().delete(&ctx, 42).await?.success);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscriptions
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_subscriptions() -> Result<()> {
    let bot = TestBot::start().await;
    Mock::given(method("GET"))
        .and(path("/subscriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subscriptions": [{
                "url": "https://example.com/hook",
                "time": 1,
                "update_types": ["message_created"],
                "version": null
            }]
        })))
        .expect(1)
        .mount(&bot.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/subscriptions"))
        .and(body_json(json!({
            "url": "https://example.com/hook",
            "secret": "s3cret",
            "update_types": ["message_created"]
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/subscriptions"))
        .and(query_param("url", "https://example.com/hook"))
        .respond_with(ok())
        .expect(1)
        .mount(&bot.server)
        .await;

    let ctx = Context::background();
    let subs = bot.client.subscriptions();

    let body = SubscriptionRequestBody {
        url: "https://example.com/hook".into(),
        secret: Some("s3cret".into()),
        update_types: vec!["message_created".into()],
        version: None,
    };
    assert!(subs.subscribe(&ctx, &body).await?.success);

    let list = subs.list(&ctx).await?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].update_types.as_deref(), Some(&["message_created".to_string()][..]));
    assert!(list[0].version.is_none());

    assert!(subs.unsubscribe(&ctx, "https://example.com/hook").await?.success);
    Ok(())
}
