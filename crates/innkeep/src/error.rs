//! CLI error types with miette diagnostics.
//!
//! Maps `innkeep_api::Error` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use innkeep_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to server at {url}")]
    #[diagnostic(
        code(innkeep::connection_failed),
        help(
            "Check that the hotel server is running and reachable.\n\
             URL: {url}\n\
             Override it with --server or: innkeep config set server <url>"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS setup failed: {message}")]
    #[diagnostic(
        code(innkeep::tls_error),
        help(
            "Use --insecure (-k) to accept a self-signed certificate, \
             or configure ca_cert in your profile."
        )
    )]
    Tls { message: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(innkeep::timeout),
        help("Increase timeout with --timeout or check server responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(innkeep::auth_failed),
        help(
            "Log in again with: innkeep login\n\
             Stored password can be updated with: innkeep config set-password --profile {profile}"
        )
    )]
    AuthFailed { profile: String, message: String },

    #[error("Not logged in")]
    #[diagnostic(code(innkeep::not_logged_in), help("Run: innkeep login"))]
    NotLoggedIn,

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(innkeep::no_credentials),
        help(
            "Pass the identity to `innkeep login`, set `identity` on the profile,\n\
             and store a password with: innkeep config set-password\n\
             Or set INNKEEP_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(innkeep::not_found))]
    NotFound { message: String },

    #[error("Server error (HTTP {status}): {message}")]
    #[diagnostic(code(innkeep::api_error))]
    Api { status: u16, message: String },

    #[error("Request rejected: {message}")]
    #[diagnostic(code(innkeep::rejected))]
    Rejected { message: String },

    #[error("Unexpected response from server")]
    #[diagnostic(
        code(innkeep::bad_response),
        help("The server answered with something other than a JSON envelope. Is --server pointing at the API?")
    )]
    BadResponse {
        #[source]
        source: innkeep_api::Error,
    },

    #[error("Could not persist session: {message}")]
    #[diagnostic(code(innkeep::session), help("Check permissions on the session file or pass --session-file."))]
    Session { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(innkeep::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(innkeep::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: innkeep config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(innkeep::config))]
    Config(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(innkeep::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(innkeep::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Tls { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NotLoggedIn | Self::NoCredentials { .. } => {
                exit_code::AUTH
            }
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── innkeep_api::Error → CliError mapping ────────────────────────────

impl From<innkeep_api::Error> for CliError {
    fn from(err: innkeep_api::Error) -> Self {
        use innkeep_api::Error;

        if err.is_auth_failure() {
            return Self::AuthFailed {
                profile: "current".into(),
                message: err.to_string(),
            };
        }
        if err.is_not_found() {
            return Self::NotFound {
                message: err.to_string(),
            };
        }

        match err {
            Error::Transport(e) if e.is_timeout() => Self::Timeout,
            Error::Transport(e) if e.is_connect() || e.is_request() => Self::ConnectionFailed {
                url: e.url().map(ToString::to_string).unwrap_or_default(),
                source: Box::new(e),
            },
            Error::Tls(message) => Self::Tls { message },
            Error::Request { status, message } => Self::Api { status, message },
            Error::Storage(message) => Self::Session { message },
            Error::InvalidUrl(e) => Self::Validation {
                field: "server".into(),
                reason: e.to_string(),
            },
            other => Self::BadResponse { source: other },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Api(api) => api.into(),
            other => Self::Config(other),
        }
    }
}
