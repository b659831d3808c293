// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable session storage backends.
//!
//! The session persists exactly two string entries, keyed [`TOKEN_KEY`]
//! and [`USER_KEY`]. [`FileStorage`] keeps them in a small JSON file;
//! [`MemoryStorage`] backs tests and throwaway sessions. A context with no
//! durable storage at all is modeled by constructing the store without a
//! backend, not by a failing one.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage key for the raw session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// Key/value storage for session entries.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&self, key: &str) -> io::Result<()>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        (**self).remove(key)
    }
}

/// In-memory storage for tests and non-persistent sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        Ok(())
    }
}

/// File-backed storage: a flat JSON object of string entries.
///
/// Reads treat a missing or unreadable file as empty rather than failing,
/// so a corrupted file degrades to a signed-out session.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Map<String, Value> {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return Map::new();
        };
        match serde_json::from_str::<Map<String, Value>>(&contents) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Session file is not valid JSON, treating as empty");
                Map::new()
            }
        }
    }

    fn save(&self, map: &Map<String, Value>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(map).map_err(io::Error::other)?;
        std::fs::write(&self.path, contents)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.load().get(key)?.as_str().map(str::to_string)
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut map = self.load();
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&map)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let mut map = self.load();
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.save(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_storage() -> FileStorage {
        let unique = format!(
            "campus-desk-storage-test-{}-{}.json",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        FileStorage::new(std::env::temp_dir().join(unique))
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let storage = temp_storage();

        storage.set(TOKEN_KEY, "abc.def.ghi").unwrap();
        storage.set(USER_KEY, "{\"_id\":\"u1\"}").unwrap();

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc.def.ghi"));
        assert_eq!(storage.get(USER_KEY).as_deref(), Some("{\"_id\":\"u1\"}"));

        storage.remove(TOKEN_KEY).unwrap();
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert_eq!(storage.get(USER_KEY).as_deref(), Some("{\"_id\":\"u1\"}"));

        std::fs::remove_file(&storage.path).ok();
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let storage = temp_storage();
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert!(storage.remove(TOKEN_KEY).is_ok());
    }

    #[test]
    fn test_unparseable_file_reads_as_empty() {
        let storage = temp_storage();
        std::fs::write(&storage.path, "not json at all").unwrap();

        assert_eq!(storage.get(TOKEN_KEY), None);

        // Writing through the storage replaces the broken file
        storage.set(TOKEN_KEY, "t").unwrap();
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t"));

        std::fs::remove_file(&storage.path).ok();
    }
}
