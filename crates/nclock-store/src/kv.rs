//! Key-value store seam and the JSON-file implementation

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Host-provided persistent key-value store.
/// Absent keys load as `None`; saves overwrite whole values.
pub trait KvStore: Send + Sync {
    fn load(&self, key: &str) -> StoreResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// File-backed store: one `<key>.json` file per key under a root directory
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        JsonFileStore { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KvStore for JsonFileStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned())
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        assert!(store.load("missing").unwrap().is_none());

        store.save("k", "{\"v\":1}").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("{\"v\":1}"));

        store.save("k", "{\"v\":2}").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("{\"v\":2}"));

        store.remove("k").unwrap();
        assert!(store.load("k").unwrap().is_none());
        // Removing an absent key is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.save("a", "1").unwrap();
        assert_eq!(store.load("a").unwrap().as_deref(), Some("1"));
        store.remove("a").unwrap();
        assert!(store.load("a").unwrap().is_none());
    }
}
