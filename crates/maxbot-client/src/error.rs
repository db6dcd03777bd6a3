//! Client error types.
//!
//! Every failure that reaches the network layer is classified into exactly
//! one [`ErrorKind`]. The remaining variants are client-side preconditions
//! that never issue a request.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Boxed underlying cause carried by classified errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification of a failed API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The API answered with a non-200 status.
    Api,
    /// The request never produced a response (connection, DNS, TLS, body read).
    Network,
    /// The call deadline elapsed or the call was cancelled.
    Timeout,
    /// Request serialization or response deserialization failed.
    Decode,
}

impl ErrorKind {
    /// Short lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Api => "api",
            ErrorKind::Network => "network",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Decode => "decode",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Server returned an error response.
    #[error("{op}: api error {status}: {message}")]
    Api {
        /// Operation that failed.
        op: &'static str,
        /// HTTP status code.
        status: u16,
        /// Error code from server, when the body carried one.
        code: Option<String>,
        /// Resolved error message.
        message: String,
    },

    /// HTTP transport failed.
    #[error("{op}: network: {source}")]
    Network {
        /// Operation that failed.
        op: &'static str,
        /// Underlying transport error.
        #[source]
        source: BoxError,
    },

    /// Deadline elapsed or the call was cancelled.
    #[error("{op}: timeout: {source}")]
    Timeout {
        /// Operation that failed.
        op: &'static str,
        /// What fired: the deadline, the transport timeout, or cancellation.
        #[source]
        source: BoxError,
    },

    /// JSON serialization/deserialization failed.
    #[error("{op}: decode: {source}")]
    Decode {
        /// Operation that failed.
        op: &'static str,
        /// Underlying serde error.
        #[source]
        source: BoxError,
    },

    /// The bot token passed to the builder was empty.
    #[error("bot token is empty")]
    EmptyToken,

    /// The caller's deadline cannot cover a long-poll request.
    #[error("poll window too short: need {required:?}, {remaining:?} left before deadline")]
    PollWindowTooShort {
        /// Server-side poll timeout plus the safety buffer.
        required: Duration,
        /// Time left before the caller's deadline.
        remaining: Duration,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an API error.
    pub fn api(op: &'static str, status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            op,
            status,
            code: None,
            message: message.into(),
        }
    }

    /// Create a network error.
    pub fn network(op: &'static str, source: impl Into<BoxError>) -> Self {
        Error::Network {
            op,
            source: source.into(),
        }
    }

    /// Create a timeout error.
    pub fn timeout(op: &'static str, source: impl Into<BoxError>) -> Self {
        Error::Timeout {
            op,
            source: source.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(op: &'static str, source: impl Into<BoxError>) -> Self {
        Error::Decode {
            op,
            source: source.into(),
        }
    }

    /// Classify a transport error from `reqwest`.
    pub(crate) fn from_transport(op: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::timeout(op, err)
        } else {
            Error::network(op, err)
        }
    }

    /// The classification, or `None` for client-side precondition errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Api { .. } => Some(ErrorKind::Api),
            Error::Network { .. } => Some(ErrorKind::Network),
            Error::Timeout { .. } => Some(ErrorKind::Timeout),
            Error::Decode { .. } => Some(ErrorKind::Decode),
            _ => None,
        }
    }

    /// Name of the operation that failed, for classified errors.
    pub fn op(&self) -> Option<&'static str> {
        match self {
            Error::Api { op, .. }
            | Error::Network { op, .. }
            | Error::Timeout { op, .. }
            | Error::Decode { op, .. } => Some(op),
            _ => None,
        }
    }

    /// HTTP status code. Only present for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable detail without the operation prefix.
    pub fn message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            Error::Network { source, .. }
            | Error::Timeout { source, .. }
            | Error::Decode { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }

    /// Check if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Api { status: 429, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error response from the server.
#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Build an API error from a non-200 response body.
///
/// Message resolution order is `message`, then `error`, then the canonical
/// reason phrase of the status code. Bodies that are not a JSON object fall
/// straight through to the reason phrase.
pub(crate) fn api_error_from_body(op: &'static str, status: StatusCode, body: &[u8]) -> Error {
    let reason = || status.canonical_reason().unwrap_or("").to_string();

    let parsed = serde_json::from_slice::<ErrorResponse>(body).unwrap_or_default();
    let code = parsed.code.filter(|c| !c.is_empty());
    let message = parsed
        .message
        .filter(|m| !m.is_empty())
        .or(parsed.error.filter(|e| !e.is_empty()))
        .unwrap_or_else(reason);

    Error::Api {
        op,
        status: status.as_u16(),
        code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::Api.to_string(), "api");
        assert_eq!(ErrorKind::Network.to_string(), "network");
        assert_eq!(ErrorKind::Timeout.to_string(), "timeout");
        assert_eq!(ErrorKind::Decode.to_string(), "decode");
    }

    #[test]
    fn test_display_formats() {
        let err = Error::api("send_message", 401, "Invalid access_token");
        assert_eq!(
            err.to_string(),
            "send_message: api error 401: Invalid access_token"
        );

        let err = Error::network("get_chat", "connection refused");
        assert_eq!(err.to_string(), "get_chat: network: connection refused");

        let err = Error::timeout("get_updates", "deadline elapsed");
        assert_eq!(err.to_string(), "get_updates: timeout: deadline elapsed");

        let err = Error::decode("send_message", "unexpected EOF");
        assert_eq!(err.to_string(), "send_message: decode: unexpected EOF");
    }

    #[test]
    fn test_only_timeout_is_timeout() {
        assert!(Error::timeout("op", "late").is_timeout());
        assert!(!Error::network("op", "down").is_timeout());
        assert!(!Error::decode("op", "bad").is_timeout());
        assert!(!Error::api("op", 504, "Gateway Timeout").is_timeout());
    }

    #[test]
    fn test_source_is_none_for_api() {
        let err = Error::api("op", 400, "bad");
        assert!(err.source().is_none());

        let err = Error::network("op", "refused");
        assert_eq!(err.source().map(|s| s.to_string()), Some("refused".into()));
    }

    #[test]
    fn test_status_only_for_api() {
        assert_eq!(Error::api("op", 503, "x").status(), Some(503));
        assert_eq!(Error::timeout("op", "x").status(), None);
        assert_eq!(Error::EmptyToken.status(), None);
        assert_eq!(Error::EmptyToken.kind(), None);
        assert_eq!(Error::EmptyToken.op(), None);
    }

    #[test]
    fn test_status_helpers() {
        assert!(Error::api("op", 404, "x").is_not_found());
        assert!(Error::api("op", 401, "x").is_auth_error());
        assert!(Error::api("op", 429, "x").is_rate_limited());
        assert!(Error::api("op", 502, "x").is_server_error());
        assert!(!Error::api("op", 400, "x").is_server_error());
    }

    #[test]
    fn test_api_error_prefers_message() {
        let body = br#"{"code":"verify.token","message":"Invalid access_token"}"#;
        let err = api_error_from_body("get_bot", StatusCode::UNAUTHORIZED, body);
        match err {
            Error::Api {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(status, 401);
                assert_eq!(code.as_deref(), Some("verify.token"));
                assert_eq!(message, "Invalid access_token");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_error_field() {
        let body = br#"{"error":"chat.not.found","code":"not.found"}"#;
        let err = api_error_from_body("get_chat", StatusCode::NOT_FOUND, body);
        assert_eq!(err.message(), "chat.not.found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_api_error_falls_back_to_status_text() {
        let err = api_error_from_body("op", StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops");
        assert_eq!(err.message(), "Internal Server Error");
        assert_eq!(err.status(), Some(500));

        let err = api_error_from_body("op", StatusCode::BAD_GATEWAY, b"");
        assert_eq!(err.message(), "Bad Gateway");

        let err = api_error_from_body("op", StatusCode::FORBIDDEN, b"{}");
        assert_eq!(err.message(), "Forbidden");
    }
}
