// API HTTP client
//
// Wraps `reqwest::Client` with base-URL joining, default JSON headers,
// bearer-token injection and envelope parsing. Endpoint helpers (rooms,
// reservations, ...) live in their own modules and borrow the client.

use std::sync::{Arc, RwLock};

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::envelope::Envelope;
use crate::error::{Error, REQUEST_FAILED};
use crate::session::{Navigator, NoNavigation, SessionStore, StorageKeys};
use crate::surface::Surface;
use crate::transport::TransportConfig;

const BODY_PREVIEW_CHARS: usize = 100;

// ── Configuration ───────────────────────────────────────────────────

/// Everything that distinguishes one client from another.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub surface: Surface,
    /// Server root, e.g. `http://localhost:8081`. Request paths are appended verbatim.
    pub base_url: Url,
    pub storage_keys: StorageKeys,
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Defaults for a surface: its server URL and storage keys.
    pub fn for_surface(surface: Surface) -> Result<Self, Error> {
        Ok(Self {
            surface,
            base_url: Url::parse(surface.default_base_url())?,
            storage_keys: surface.storage_keys(),
            transport: TransportConfig::default(),
        })
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Derive storage keys from a prefix instead of the surface defaults.
    pub fn with_storage_prefix(mut self, prefix: &str) -> Self {
        self.storage_keys = StorageKeys::with_prefix(prefix);
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}

// ── Request options ─────────────────────────────────────────────────

/// Method, extra headers and optional JSON body for [`ApiClient::request`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Add a header. Caller headers override the JSON content type.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

// ── Client ──────────────────────────────────────────────────────────

/// HTTP client for the hotel API.
///
/// Holds the session token in memory and mirrors it into the injected
/// [`SessionStore`]. All request methods return the parsed envelope; the
/// resource helpers strip it.
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: RwLock<Option<SecretString>>,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Build a client, restoring any token already present in `store`.
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self, Error> {
        let http = config.transport.build_client()?;
        Self::with_client(http, config, store)
    }

    /// Build a client around a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        config: ClientConfig,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, Error> {
        let token = store
            .get(&config.storage_keys.token)?
            .filter(|t| !t.is_empty())
            .map(SecretString::from);
        if token.is_some() {
            debug!(surface = %config.surface, "restored persisted session token");
        }

        Ok(Self {
            http,
            config,
            token: RwLock::new(token),
            store,
            navigator: Arc::new(NoNavigation),
        })
    }

    /// Replace the navigator used after logout.
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn surface(&self) -> Surface {
        self.config.surface
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    pub fn storage_keys(&self) -> &StorageKeys {
        &self.config.storage_keys
    }

    pub(crate) fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub(crate) fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    // ── Token ────────────────────────────────────────────────────────

    /// Hold `token` in memory and persist it; `None` clears both.
    pub(crate) fn set_token(&self, token: Option<&str>) -> Result<(), Error> {
        *self.token.write().expect("token lock poisoned") =
            token.map(|t| SecretString::from(t.to_owned()));

        let key = &self.config.storage_keys.token;
        match token {
            Some(t) => self.store.set(key, t),
            None => self.store.remove(key),
        }
    }

    pub(crate) fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    fn authorization(&self) -> Result<Option<HeaderValue>, Error> {
        let guard = self.token.read().expect("token lock poisoned");
        let Some(token) = guard.as_ref() else {
            return Ok(None);
        };
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
        value.set_sensitive(true);
        Ok(Some(value))
    }

    // ── URL ──────────────────────────────────────────────────────────

    /// `{base_url}{path}`. `path` starts with `/` and may carry a query string.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> Result<Envelope, Error> {
        self.request(path, RequestOptions::new(Method::GET)).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: &(impl Serialize + Sync)) -> Result<Envelope, Error> {
        self.request(path, RequestOptions::new(Method::POST).json(body)?)
            .await
    }

    /// Send a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> Result<Envelope, Error> {
        self.request(path, RequestOptions::new(Method::POST)).await
    }

    /// Send a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: &(impl Serialize + Sync)) -> Result<Envelope, Error> {
        self.request(path, RequestOptions::new(Method::PUT).json(body)?)
            .await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<Envelope, Error> {
        self.request(path, RequestOptions::new(Method::DELETE)).await
    }

    /// Send a request and parse the envelope.
    ///
    /// Headers are the JSON content type, then the caller's headers, then
    /// the bearer token when one is held. Failures are logged before they
    /// are returned.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Envelope, Error> {
        let url = self.url(path)?;
        let RequestOptions {
            method,
            headers: extra,
            body,
        } = options;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(extra);
        if let Some(auth) = self.authorization()? {
            headers.insert(AUTHORIZATION, auth);
        }

        debug!("{method} {url}");

        let mut builder = self.http.request(method.clone(), url.clone()).headers(headers);
        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(&body)?);
        }

        let resp = builder.send().await.map_err(|e| {
            error!(%method, %url, error = %e, "request did not complete");
            Error::Transport(e)
        })?;

        parse_envelope(resp).await
    }
}

/// Read the body as text and turn it into an envelope or an error.
///
/// Order matters: empty body, then JSON syntax, then HTTP status, then
/// envelope shape.
async fn parse_envelope(resp: reqwest::Response) -> Result<Envelope, Error> {
    let status = resp.status();
    let url = resp.url().clone();

    let body = resp.text().await.map_err(|e| {
        error!(%url, error = %e, "failed to read response body");
        Error::Transport(e)
    })?;

    if body.is_empty() {
        error!(%url, status = status.as_u16(), "empty response body");
        return Err(Error::EmptyResponse {
            status: status.as_u16(),
        });
    }

    let value: Value = serde_json::from_str(&body).map_err(|e| {
        let preview = preview(&body);
        error!(%url, status = status.as_u16(), %preview, "response is not JSON");
        Error::Parse {
            message: format!("{e} (body preview: {preview:?})"),
            body: body.clone(),
        }
    })?;

    if !status.is_success() {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map_or_else(|| REQUEST_FAILED.to_owned(), str::to_owned);
        error!(%url, status = status.as_u16(), %message, "request failed");
        return Err(Error::Request {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_value(value).map_err(|e| {
        error!(%url, error = %e, "response is not an envelope");
        Error::Parse {
            message: format!("response is not an envelope: {e}"),
            body,
        }
    })
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

/// Percent-encode a single path segment.
pub(crate) fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// `key=value&...` with form encoding.
pub(crate) fn query(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    fn client(base: &str) -> ApiClient {
        let config = ClientConfig::for_surface(Surface::Admin)
            .unwrap()
            .with_base_url(Url::parse(base).unwrap());
        ApiClient::with_client(reqwest::Client::new(), config, Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn url_appends_path_verbatim() {
        let c = client("http://hotel.test:8081/");
        assert_eq!(
            c.url("/api/statistics/date-range?startDate=2024-01-01&endDate=2024-01-31")
                .unwrap()
                .as_str(),
            "http://hotel.test:8081/api/statistics/date-range?startDate=2024-01-01&endDate=2024-01-31"
        );
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let c = client("https://hotel.test/backend");
        assert_eq!(c.url("/rooms/3").unwrap().as_str(), "https://hotel.test/backend/rooms/3");
    }

    #[test]
    fn token_is_restored_from_store() {
        let config = ClientConfig::for_surface(Surface::Guest).unwrap();
        let store = Arc::new(MemoryStore::with_values([("token", "persisted")]));
        let c = ApiClient::with_client(reqwest::Client::new(), config, store).unwrap();
        assert!(c.has_token());
    }

    #[test]
    fn empty_persisted_token_is_ignored() {
        let config = ClientConfig::for_surface(Surface::Guest).unwrap();
        let store = Arc::new(MemoryStore::with_values([("token", "")]));
        let c = ApiClient::with_client(reqwest::Client::new(), config, store).unwrap();
        assert!(!c.has_token());
    }

    #[test]
    fn segments_and_queries_are_encoded() {
        assert_eq!(encode_segment("Deluxe Suite"), "Deluxe%20Suite");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(query(&[("name", "李 雷")]), "name=%E6%9D%8E+%E9%9B%B7");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let body = "响应".repeat(80);
        assert_eq!(preview(&body).chars().count(), BODY_PREVIEW_CHARS);
    }
}
