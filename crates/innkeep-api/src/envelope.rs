// Response envelope
//
// Every endpoint answers with `{ "success": bool, "data": any, "message": string }`.
// The transport hands back the whole envelope; resource helpers strip it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::Error;

/// Standard response envelope.
///
/// ```json
/// { "success": true, "data": { ... }, "message": "optional" }
/// ```
///
/// Missing fields fall back to `success: false`, `data: None`,
/// `message: None`, so non-envelope JSON objects still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// The server message, or an empty string.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    /// Return `data`, which may be absent.
    ///
    /// `success` is not consulted: a failed envelope usually carries no data
    /// and callers that care inspect `success` themselves.
    pub fn into_data(self) -> Option<T> {
        if !self.success {
            warn!(message = self.message(), "envelope reported failure");
        }
        self.data
    }
}

impl Envelope<Value> {
    /// Unwrap `data` into `D`, substituting `D::default()` when absent.
    ///
    /// `Vec<Value>` defaults to `[]`, `Map` to `{}`, `Value` to `null`.
    /// A `success: false` envelope without data yields the default too.
    pub fn data_or_default<D>(self) -> Result<D, Error>
    where
        D: DeserializeOwned + Default,
    {
        match self.into_data() {
            None | Some(Value::Null) => Ok(D::default()),
            Some(data) => {
                let raw = data.to_string();
                serde_json::from_value(data).map_err(|e| Error::Parse {
                    message: format!("unexpected data shape: {e}"),
                    body: raw,
                })
            }
        }
    }

    /// The session token carried by a login response, if any.
    pub fn token(&self) -> Option<&str> {
        self.data
            .as_ref()?
            .get("token")?
            .as_str()
            .filter(|t| !t.is_empty())
    }
}
