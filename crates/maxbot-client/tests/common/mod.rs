//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use maxbot_client::MaxClient;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Token every test client authenticates with.
pub const TOKEN: &str = "test-token";

/// A mock Max API and a client pointed at it.
pub struct TestBot {
    pub server: MockServer,
    pub client: MaxClient,
}

impl TestBot {
    /// Start a mock server with the default client timeout.
    pub async fn start() -> Self {
        Self::start_with_timeout(maxbot_client::DEFAULT_TIMEOUT).await
    }

    /// Start a mock server with a custom default timeout.
    pub async fn start_with_timeout(timeout: Duration) -> Self {
        let server = MockServer::start().await;
        let client = MaxClient::builder()
            .token(TOKEN)
            .base_url(server.uri())
            .timeout(timeout)
            .build()
            .expect("client builds");
        Self { server, client }
    }

    /// URL under the mock server, for upload endpoints.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }
}

pub fn user(id: i64, first_name: &str) -> Value {
    json!({
        "user_id": id,
        "first_name": first_name,
        "is_bot": false,
        "last_activity_time": 1_700_000_000_000_i64
    })
}

pub fn message(chat_id: i64, mid: &str, text: &str) -> Value {
    json!({
        "sender": user(1, "Alice"),
        "recipient": {"chat_id": chat_id, "chat_type": "chat"},
        "timestamp": 1_700_000_000_000_i64,
        "body": {"mid": mid, "seq": 1, "text": text}
    })
}

pub fn chat(chat_id: i64, title: &str) -> Value {
    json!({
        "chat_id": chat_id,
        "type": "chat",
        "status": "active",
        "title": title,
        "last_event_time": 0,
        "participants_count": 3,
        "is_public": false
    })
}
