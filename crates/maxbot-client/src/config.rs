//! Serializable client configuration.
//!
//! Lets applications keep bot settings alongside the rest of their config
//! (TOML, JSON, environment layers) and hand them to
//! [`ClientBuilder::from_config`](crate::ClientBuilder::from_config).

use serde::{Deserialize, Serialize};

/// Client settings.
///
/// ```
/// use maxbot_client::ClientConfig;
///
/// let config: ClientConfig =
///     serde_json::from_str(r#"{"token": "secret", "timeout_secs": 10}"#).unwrap();
/// assert_eq!(config.timeout_secs, Some(10));
/// assert!(config.base_url.is_none());
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bot token.
    pub token: String,
    /// API base URL. Defaults to the production endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Default per-call timeout in seconds. `0` disables it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
