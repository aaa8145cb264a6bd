//! # Key-Value Backends
//!
//! The persistence contract the stores write through to: synchronous
//! `get`/`set` of string values by string key, atomic per key.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MemoryStore   in-process map; tests and ephemeral sessions             │
//! │                                                                         │
//! │  FileStore     one JSON object file { "cart": "...", ... }              │
//! │                loaded on open; every set re-reads the file, replaces    │
//! │                one key, and rewrites it via temp file + rename          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two `FileStore`s over the same path only ever overwrite the keys they set,
//! so the last writer wins per key. A `get` serves the snapshot taken at open
//! or at this instance's latest `set`.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// Synchronous string key-value storage shared by all stores.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the value under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-process key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        MemoryStore {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::poisoned("memory store"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::poisoned("memory store"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// File Store
// =============================================================================

/// Key-value store persisted as a single JSON object file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens (or prepares to create) the store file at `path`.
    ///
    /// A missing or blank file is an empty store. A file that is not a JSON
    /// object of strings is a backend error.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let entries = read_entries(&path)?;

        info!(path = %path.display(), keys = entries.len(), "File store opened");

        Ok(FileStore {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let contents = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::poisoned("file store"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::poisoned("file store"))?;

        // Merge into what is on disk now, not into our snapshot, so keys
        // written by other instances survive. The in-memory map only changes
        // once the file is on disk.
        let mut next = read_entries(&self.path)?;
        next.insert(key.to_string(), value.to_string());
        self.write_file(&next)?;
        *entries = next;

        debug!(key, bytes = value.len(), "File store written");
        Ok(())
    }
}

/// Reads the store file. Missing or blank means empty.
fn read_entries(path: &Path) -> StoreResult<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_json::from_str(&contents).map_err(|e| {
        StoreError::Backend(format!("{} is not a store file: {}", path.display(), e))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
