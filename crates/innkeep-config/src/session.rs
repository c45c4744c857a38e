// File-backed session store
//
// Keeps session values in a flat JSON object so a token obtained by one CLI
// invocation is picked up by the next. Every write rewrites the whole file.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use innkeep_api::{Error, SessionStore};

/// [`SessionStore`] persisted as JSON at a fixed path.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, Error> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(storage_err(&self.path, &e)),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&raw) {
            Ok(values) => Ok(values),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding unreadable session file");
                Ok(BTreeMap::new())
            }
        }
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), Error> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir).map_err(|e| storage_err(dir, &e))?;
        let json = serde_json::to_string_pretty(values)?;

        // Temp files are created owner-only; the rename keeps that mode
        let mut file = NamedTempFile::new_in(dir).map_err(|e| storage_err(dir, &e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| storage_err(file.path(), &e))?;
        file.persist(&self.path)
            .map_err(|e| storage_err(&self.path, &e.error))?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let _guard = self.lock.lock().expect("session file lock poisoned");
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let _guard = self.lock.lock().expect("session file lock poisoned");
        let mut values = self.read()?;
        values.insert(key.to_owned(), value.to_owned());
        debug!(key, path = %self.path.display(), "session value stored");
        self.write(&values)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let _guard = self.lock.lock().expect("session file lock poisoned");
        let mut values = self.read()?;
        if values.remove(key).is_none() {
            return Ok(());
        }
        debug!(key, path = %self.path.display(), "session value removed");
        self.write(&values)
    }
}

fn storage_err(path: &Path, err: &std::io::Error) -> Error {
    Error::Storage(format!("{}: {err}", path.display()))
}
