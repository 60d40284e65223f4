// ABOUTME: Key-value store abstraction used to persist UI state between page views.
// ABOUTME: Provides an in-memory store and a store backed by a single JSON object file.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Minimal string key-value store, the shape of browser `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store that lives for the duration of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store persisted as one JSON object (`{"key": "value", ...}`) on disk.
///
/// The file is read on every access and rewritten on every `set`; it is created,
/// along with missing parent directories, on first write.
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

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&data).map_err(|e| StoreError::corrupt(&self.path, e))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(&entries)
            .map_err(|e| StoreError::corrupt(&self.path, e))?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
