//! Key-Value store backed by local files, with automatic serialization.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// Type-safe Key-Value store backed by one JSON file per key.
///
/// Values are serialized to JSON and written under a root directory as
/// `<key>.json`. Provides automatic serialization for any type that
/// implements `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at the given directory, creating it if needed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = LocalStore::open(data_dir.join("shophub"))?;
    /// ```
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::OpenError(e.to_string()))?;
        Ok(Self { root })
    }

    /// The directory backing this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::IoError(e.to_string())),
        };
        let value = serde_json::from_slice(&bytes)?;
        Ok(Some(value))
    }

    /// Set a value in the store, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let bytes = serde_json::to_vec(value)?;
        fs::write(&path, bytes).map_err(|e| StoreError::IoError(e.to_string()))
    }

    /// Delete a value from the store. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::IoError(e.to_string())),
        }
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.path_for(key)?.exists())
    }

    /// Get all keys present in the store, sorted.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = fs::read_dir(&self.root).map_err(|e| StoreError::IoError(e.to_string()))?;
        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::IoError(e.to_string()))?;
            let name = entry.file_name();
            if let Some(key) = name.to_string_lossy().strip_suffix(".json") {
                keys.push(key.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    /// Map a key to its backing file, rejecting keys that would escape
    /// the store directory.
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Entry {
        id: String,
        count: u32,
    }

    fn open_temp() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_set_get_roundtrip() {
        let (_dir, store) = open_temp();
        let entry = Entry {
            id: "p1".to_string(),
            count: 3,
        };

        store.set("entry", &entry).unwrap();
        let loaded: Option<Entry> = store.get("entry").unwrap();
        assert_eq!(loaded, Some(entry));
    }

    #[test]
    fn test_get_missing_key() {
        let (_dir, store) = open_temp();
        let loaded: Option<Entry> = store.get("missing").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_overwrite() {
        let (_dir, store) = open_temp();
        store.set("n", &1u32).unwrap();
        store.set("n", &2u32).unwrap();
        assert_eq!(store.get::<u32>("n").unwrap(), Some(2));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_dir, store) = open_temp();
        store.set("n", &1u32).unwrap();
        store.delete("n").unwrap();
        store.delete("n").unwrap();
        assert_eq!(store.get::<u32>("n").unwrap(), None);
    }

    #[test]
    fn test_exists() {
        let (_dir, store) = open_temp();
        assert!(!store.exists("n").unwrap());
        store.set("n", &1u32).unwrap();
        assert!(store.exists("n").unwrap());
    }

    #[test]
    fn test_keys_sorted() {
        let (_dir, store) = open_temp();
        store.set("b", &1u32).unwrap();
        store.set("a", &2u32).unwrap();
        assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let (dir, store) = open_temp();
        std::fs::write(dir.path().join("bad.json"), b"{not json").unwrap();
        assert!(store.get::<Entry>("bad").is_err());
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let (_dir, store) = open_temp();
        assert!(matches!(
            store.set("", &1u32),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(
            store.set("../escape", &1u32),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(
            store.get::<u32>("a/b"),
            Err(StoreError::InvalidKey(_))
        ));
    }
}
