//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{BotsApi, ChatsApi, MessagesApi, SubscriptionsApi, UpdatesApi, UploadsApi};
use crate::config::ClientConfig;
use crate::context::Context;
use crate::error::{Error, Result, api_error_from_body};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://botapi.max.ru";

/// Default per-call timeout, applied when the caller's context has no deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "MAX_BOT_TOKEN";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "MAX_BOT_API_URL";

/// Name of the multipart field carrying the uploaded file.
const UPLOAD_FIELD: &str = "data";

/// Max Bot API client.
///
/// Cheap to clone; clones share the connection pool.
///
/// # Example
///
/// ```no_run
/// use maxbot_client::{Context, MaxClient, NewMessageBody};
///
/// # async fn example() -> maxbot_client::Result<()> {
/// let client = MaxClient::builder().token("secret").build()?;
/// let ctx = Context::background();
///
/// let me = client.bots().me(&ctx).await?;
/// println!("running as {}", me.profile.user.first_name);
///
/// client
///     .messages()
///     .send(&ctx, 12345, &NewMessageBody::text("Hello!"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MaxClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    token: HeaderValue,
    user_agent: HeaderValue,
    timeout: Duration,
}

impl std::fmt::Debug for MaxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl MaxClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// Create a client from `MAX_BOT_TOKEN` and, if set, `MAX_BOT_API_URL`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| Error::Config(format!("{TOKEN_ENV} is not set")))?;
        let mut builder = Self::builder().token(token);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Default per-call timeout. Zero means calls are bounded only by their context.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the bot profile API.
    pub fn bots(&self) -> BotsApi {
        BotsApi::new(self.clone())
    }

    /// Access the chats API.
    pub fn chats(&self) -> ChatsApi {
        ChatsApi::new(self.clone())
    }

    /// Access the messages API.
    pub fn messages(&self) -> MessagesApi {
        MessagesApi::new(self.clone())
    }

    /// Access the webhook subscriptions API.
    pub fn subscriptions(&self) -> SubscriptionsApi {
        SubscriptionsApi::new(self.clone())
    }

    /// Access the uploads API.
    pub fn uploads(&self) -> UploadsApi {
        UploadsApi::new(self.clone())
    }

    /// Access the updates (long polling) API.
    pub fn updates(&self) -> UpdatesApi {
        UpdatesApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Build the URL for a path under the base URL.
    pub(crate) fn url(&self, path: &[String], query: &Query) -> std::result::Result<Url, &'static str> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| "base URL cannot carry a path")?
            .pop_if_empty()
            .extend(path);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }
        Ok(url)
    }

    /// Perform a request and decode the JSON response.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        request: ApiRequest,
    ) -> Result<T> {
        let op = request.op;
        let body = self.send(ctx, request).await?;
        serde_json::from_slice(&body).map_err(|e| Error::decode(op, e))
    }

    /// Perform a request, discarding the response body.
    #[allow(dead_code)]
    pub(crate) async fn execute_unit(&self, ctx: &Context, request: ApiRequest) -> Result<()> {
        self.send(ctx, request).await.map(|_| ())
    }

    /// Perform one round trip and return the raw body of a 200 response.
    async fn send(&self, ctx: &Context, request: ApiRequest) -> Result<Bytes> {
        let ApiRequest {
            op,
            method,
            path,
            query,
            body,
        } = request;

        let body = body.transpose().map_err(|e| Error::decode(op, e))?;
        let url = self.url(&path, &query).map_err(|e| Error::network(op, e))?;
        let ctx = ctx.or_timeout(self.inner.timeout);

        tracing::debug!(op, %method, path = url.path(), "sending request");

        let mut builder = self
            .inner
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.inner.token.clone())
            .header(USER_AGENT, self.inner.user_agent.clone());
        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let (status, bytes) = ctx.run(op, read_response(op, builder)).await?;
        tracing::debug!(op, status = status.as_u16(), "received response");

        if status != StatusCode::OK {
            return Err(api_error_from_body(op, status, &bytes));
        }
        Ok(bytes)
    }

    /// POST a file to a pre-issued upload URL as multipart field `data`.
    ///
    /// The URL already authorizes the upload, so no `Authorization` header is
    /// sent. Returns the raw response body.
    pub(crate) async fn upload(
        &self,
        ctx: &Context,
        op: &'static str,
        upload_url: &str,
        filename: &str,
        body: reqwest::Body,
    ) -> Result<Bytes> {
        let url = Url::parse(upload_url).map_err(|e| Error::network(op, e))?;
        let ctx = ctx.or_timeout(self.inner.timeout);

        let form = Form::new().part(
            UPLOAD_FIELD,
            Part::stream(body).file_name(filename.to_string()),
        );

        tracing::debug!(op, host = url.host_str().unwrap_or_default(), filename, "uploading file");

        let builder = self
            .inner
            .http
            .post(url)
            .header(USER_AGENT, self.inner.user_agent.clone())
            .multipart(form);

        let (status, bytes) = ctx.run(op, read_response(op, builder)).await?;
        tracing::debug!(op, status = status.as_u16(), "upload finished");

        if status != StatusCode::OK {
            return Err(api_error_from_body(op, status, &bytes));
        }
        Ok(bytes)
    }
}

/// Send `builder` and read the full body.
async fn read_response(
    op: &'static str,
    builder: reqwest::RequestBuilder,
) -> Result<(StatusCode, Bytes)> {
    let response = builder
        .send()
        .await
        .map_err(|e| Error::from_transport(op, e))?;
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::from_transport(op, e))?;
    Ok((status, bytes))
}

// ─────────────────────────────────────────────────────────────────────────────
// Request descriptor
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered query parameters. Encodes to nothing when empty.
#[derive(Debug, Clone, Default)]
pub(crate) struct Query(Vec<(&'static str, String)>);

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub(crate) fn push(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// Append a parameter when `cond` holds.
    pub(crate) fn push_if(&mut self, cond: bool, key: &'static str, value: impl ToString) -> &mut Self {
        if cond {
            self.push(key, value);
        }
        self
    }

    /// Append a comma-joined list, skipped when empty.
    pub(crate) fn push_list<I, T>(&mut self, key: &'static str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let joined = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.push_if(!joined.is_empty(), key, joined)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// One API call: operation name, method, path, query and optional JSON body.
#[derive(Debug)]
pub(crate) struct ApiRequest {
    op: &'static str,
    method: Method,
    path: Vec<String>,
    query: Query,
    body: Option<serde_json::Result<Vec<u8>>>,
}

impl ApiRequest {
    pub(crate) fn new(op: &'static str, method: Method, path: &[&str]) -> Self {
        Self {
            op,
            method,
            path: path.iter().map(|s| s.to_string()).collect(),
            query: Query::new(),
            body: None,
        }
    }

    pub(crate) fn get(op: &'static str, path: &[&str]) -> Self {
        Self::new(op, Method::GET, path)
    }

    pub(crate) fn post(op: &'static str, path: &[&str]) -> Self {
        Self::new(op, Method::POST, path)
    }

    pub(crate) fn put(op: &'static str, path: &[&str]) -> Self {
        Self::new(op, Method::PUT, path)
    }

    pub(crate) fn patch(op: &'static str, path: &[&str]) -> Self {
        Self::new(op, Method::PATCH, path)
    }

    pub(crate) fn delete(op: &'static str, path: &[&str]) -> Self {
        Self::new(op, Method::DELETE, path)
    }

    /// Set the query parameters.
    pub(crate) fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Set the JSON body. Serialization errors surface when the request is sent.
    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_vec(body));
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for creating a [`MaxClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    token: Option<String>,
    base_url: Option<String>,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            token: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
            user_agent: None,
        }
    }

    /// Start from a loaded [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = Self::new().token(config.token.clone());
        if let Some(base_url) = &config.base_url {
            builder = builder.base_url(base_url.clone());
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder
    }

    /// Set the bot token. Required.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the base URL. Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the default per-call timeout. `Duration::ZERO` disables it.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a preconfigured HTTP client (proxies, TLS settings, ...).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<MaxClient> {
        let token = self.token.filter(|t| !t.is_empty()).ok_or(Error::EmptyToken)?;
        let mut token = HeaderValue::from_str(&token)
            .map_err(|_| Error::Config("bot token is not a valid header value".to_string()))?;
        token.set_sensitive(true);

        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid base_url {base_url:?}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base_url must be http or https, got {:?}",
                base_url.scheme()
            )));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("maxbot-client/{}", env!("CARGO_PKG_VERSION")));
        let user_agent = HeaderValue::from_str(&user_agent)
            .map_err(|_| Error::Config("invalid user agent".to_string()))?;

        let http = match self.http_client {
            Some(http) => http,
            None => reqwest::Client::builder()
                .build()
                .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?,
        };

        Ok(MaxClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                token,
                user_agent,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
