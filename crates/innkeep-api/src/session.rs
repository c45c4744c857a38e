// Session state and its persistence seams
//
// The client keeps the token in memory and mirrors token, role and identity
// into a `SessionStore`. After logout it hands the login page to a
// `Navigator`. Both are injected so tests and non-browser front ends can
// supply their own.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::error::Error;

// ── Storage keys ────────────────────────────────────────────────────

/// Names under which the session is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub token: String,
    pub role: String,
    pub identity: String,
}

impl StorageKeys {
    /// Keys used by the guest surface: `token`, `userRole`, `userEmail`.
    pub fn guest() -> Self {
        Self {
            token: "token".into(),
            role: "userRole".into(),
            identity: "userEmail".into(),
        }
    }

    /// Keys used by the admin surface: `adminToken`, `adminRole`, `adminUsername`.
    pub fn admin() -> Self {
        Self {
            token: "adminToken".into(),
            role: "adminRole".into(),
            identity: "adminUsername".into(),
        }
    }

    /// `{prefix}Token`, `{prefix}Role`, `{prefix}Identity`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            token: format!("{prefix}Token"),
            role: format!("{prefix}Role"),
            identity: format!("{prefix}Identity"),
        }
    }
}

// ── Store ───────────────────────────────────────────────────────────

/// Persistent key-value storage for session values.
///
/// Mirrors the semantics of browser local storage: string keys, string
/// values, removal of a missing key is not an error.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&self, key: &str) -> Result<(), Error>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, e.g. with a token persisted by an earlier run.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: Mutex::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let values = self.values.lock().expect("session store lock poisoned");
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut values = self.values.lock().expect("session store lock poisoned");
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let mut values = self.values.lock().expect("session store lock poisoned");
        values.remove(key);
        Ok(())
    }
}

// ── Navigation ──────────────────────────────────────────────────────

/// Receives the page to show after logout.
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// Navigator for front ends without pages. Only logs the target.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNavigation;

impl Navigator for NoNavigation {
    fn navigate(&self, location: &str) {
        debug!(location, "navigation requested");
    }
}
