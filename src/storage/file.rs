//! JSON file storage backend
//!
//! All keys live in one JSON object on disk. The file is read once on open
//! and rewritten on every change.

use super::{KeyValueStore, StorageError};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name used inside the data directory
pub const STORE_FILE: &str = "store.json";

/// Storage backed by a single JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`
    ///
    /// A missing file is an empty store. A file that exists but does not hold a
    /// JSON object of strings is logged and treated as empty; it is replaced on
    /// the next write.
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "discarding unreadable store file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), keys = entries.len(), "opened file store");

        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    /// Open `store.json` inside `dir`
    ///
    /// # Errors
    /// See [`FileStore::open`].
    pub fn in_dir(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::open(dir.as_ref().join(STORE_FILE))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut next = self.entries.borrow().clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        *self.entries.borrow_mut() = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if !self.entries.borrow().contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.borrow().clone();
        next.remove(key);
        self.flush(&next)?;
        *self.entries.borrow_mut() = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path()).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::in_dir(dir.path().join("nested")).unwrap();
            store.set("wordle-solution-2024-03-07", "crane").unwrap();
            store.set("wordle-played-2024-03-07", "true").unwrap();
            store.remove("wordle-played-2024-03-07").unwrap();
        }

        let reopened = FileStore::in_dir(dir.path().join("nested")).unwrap();
        assert_eq!(
            reopened.get("wordle-solution-2024-03-07").unwrap().as_deref(),
            Some("crane")
        );
        assert_eq!(reopened.get("wordle-played-2024-03-07").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn unreadable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blocked");
        fs::create_dir_all(&path).unwrap();

        assert!(matches!(FileStore::open(&path), Err(StorageError::Io(_))));
    }
}
