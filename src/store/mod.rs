//! JSON persistence shared by the calendar, the roster and the activity log.

mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage};

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key of the events array.
pub const EVENTS_KEY: &str = "calendarEvents";
/// Storage key of the clients array.
pub const CLIENTS_KEY: &str = "clients";
/// Storage key of the internal activity log.
pub const LOG_KEY: &str = "log";

/// Every key written by the application, in backup order.
pub const ALL_KEYS: [&str; 3] = [EVENTS_KEY, CLIENTS_KEY, LOG_KEY];

pub struct Store<S: Storage> {
    backend: S,
}

impl<S: Storage> Store<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Load the value under `key`, falling back to `T::default()` when the
    /// key is missing, blank or holds JSON `null`.
    pub fn load_or_default<T>(&self, key: &str) -> AppResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let raw = match self.backend.get_item(key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(T::default()),
        };

        let value: Option<T> = serde_json::from_str(&raw).map_err(|e| AppError::Store {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        Ok(value.unwrap_or_default())
    }

    /// Serialize `value` and write it under `key` synchronously.
    pub fn save<T>(&mut self, key: &str, value: &T) -> AppResult<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string_pretty(value)?;
        self.backend.set_item(key, &json)
    }

    /// Raw JSON for `key` as a generic value (used by backups).
    pub fn load_raw(&self, key: &str) -> AppResult<serde_json::Value> {
        let v: Option<serde_json::Value> = self.load_or_default(key)?;
        Ok(v.unwrap_or(serde_json::Value::Array(Vec::new())))
    }
}

impl Store<FileStorage> {
    /// Store rooted at the configured data directory.
    pub fn open<P: AsRef<std::path::Path>>(dir: P) -> Self {
        Self::new(FileStorage::new(dir))
    }
}

impl Store<MemoryStorage> {
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }
}
