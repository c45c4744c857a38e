use thiserror::Error;

/// Fallback message for HTTP failures whose body carries no `message`.
pub const REQUEST_FAILED: &str = "request failed";

/// Top-level error type for the `innkeep-api` crate.
///
/// Covers every failure mode of a call: network, body decoding, HTTP status,
/// rejected envelopes, and session persistence. The CLI maps these into
/// user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// Network-level failure (connection refused, DNS, timeout, ...).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// A header value (usually the bearer token) contains invalid bytes.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    // ── Response body ───────────────────────────────────────────────
    /// The server answered with an empty body.
    #[error("Empty response body (HTTP {status})")]
    EmptyResponse { status: u16 },

    /// The body was not JSON, or not an envelope-shaped JSON object.
    #[error("Malformed response: {message}")]
    Parse { message: String, body: String },

    // ── API ─────────────────────────────────────────────────────────
    /// Non-2xx HTTP status. `message` is the envelope's message when the
    /// server sent one, otherwise [`REQUEST_FAILED`].
    #[error("{message}")]
    Request { status: u16, message: String },

    // ── Session ─────────────────────────────────────────────────────
    /// The session store failed to read or write a value.
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl Error {
    /// The HTTP status behind this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } | Self::EmptyResponse { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the server refused the credentials or token.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the request never produced an HTTP response.
    pub fn is_network(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }
}
