//! Synchronous key-value blob store.
//!
//! The persistence model mirrors browser local storage: string keys, string
//! values, whole-value reads and writes, last write wins. There is no partial
//! update and no isolation; every snapshot is read-modify-written as a unit
//! by the repository layer.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::StoreError;

/// A synchronous key-value store of string blobs.
pub trait Store {
    /// Returns the blob stored at `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` at `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key` if present.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, used by tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: a single JSON object mapping keys to blobs.
///
/// Every `set`/`remove` rewrites the whole file. An unreadable or unparsable
/// image is treated as empty rather than fatal; the repository layer reseeds
/// the dataset on the next load.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_image(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&raw) {
            Ok(image) => Ok(image),
            Err(err) => {
                log::warn!(
                    "store image at {} is not valid JSON ({err}); starting from an empty image",
                    self.path.display()
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_image(&self, image: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(image)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_image()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut image = self.read_image()?;
        image.insert(key.to_string(), value.to_string());
        self.write_image(&image)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut image = self.read_image()?;
        if image.remove(key).is_some() {
            self.write_image(&image)?;
        }
        Ok(())
    }
}
