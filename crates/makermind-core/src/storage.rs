//! Synchronous key → string storage backends.
//!
//! The store above this layer owns serialization; backends only move
//! strings. [`FileStorage`] keeps one file per key under `.makermind/`,
//! [`MemoryStorage`] keeps everything in-process.

use crate::error::Result;
use crate::{io, paths};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait KeyValueStorage: Send + Sync {
    /// Raw value for `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `root`; files live at `<root>/.makermind/<key>.json`.
    /// The directory is created lazily on the first write.
    pub fn new(root: &Path) -> Self {
        FileStorage {
            root: root.to_path_buf(),
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        paths::slot_path(&self.root, key)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        io::read_if_exists(&self.path(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        io::atomic_write(&self.path(key), value.as_bytes())
    }

    fn remove(&self, key: &str) -> Result<()> {
        io::remove_if_exists(&self.path(key))
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_get_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get("maker_inventory").unwrap(), None);
    }

    #[test]
    fn file_storage_set_then_get() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set("maker_inventory", "[]").unwrap();
        assert_eq!(storage.get("maker_inventory").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join(".makermind/maker_inventory.json").exists());
    }

    #[test]
    fn file_storage_keys_are_independent() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        storage.remove("a").unwrap();
        assert_eq!(storage.get("a").unwrap(), None);
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn memory_storage_remove_missing_is_noop() {
        let storage = MemoryStorage::new();
        storage.remove("nothing").unwrap();
        storage.set("k", "v").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }
}
