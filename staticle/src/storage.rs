//! File-backed key/value helper with optional expiration
//!
//! Stand-in for the browser's local storage: a single JSON file of
//! keyed entries, each with an optional expiry. Best-effort by
//! contract: a missing file, bad JSON, or io error degrades to `None`
//! with a warning, never an error the caller has to handle.

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// A stored value with its optional expiry
#[derive(Debug, Serialize, Deserialize)]
struct StoredItem {
    value: serde_json::Value,
    expires_at: Option<DateTime<Utc>>,
}

/// Opportunistic key/value store backed by a single JSON file
#[derive(Debug)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Create a store over the given file; the file is created lazily
    /// on first write
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store a value, optionally expiring after `ttl`
    pub fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to serialize storage value for '{}': {}", key, e);
                return;
            }
        };

        let mut items = self.load_items();
        items.insert(
            key.to_string(),
            StoredItem {
                value,
                expires_at: ttl.map(|ttl| Utc::now() + ttl),
            },
        );
        self.save_items(&items);
    }

    /// Read a value; an expired entry is removed and reads as `None`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut items = self.load_items();

        let expired = items
            .get(key)
            .is_some_and(|item| item.expires_at.is_some_and(|at| Utc::now() > at));
        if expired {
            items.remove(key);
            self.save_items(&items);
            return None;
        }

        let item = items.remove(key)?;
        match serde_json::from_value(item.value) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Failed to decode storage value for '{}': {}", key, e);
                None
            }
        }
    }

    /// Remove a single entry
    pub fn remove(&self, key: &str) {
        let mut items = self.load_items();
        if items.remove(key).is_some() {
            self.save_items(&items);
        }
    }

    /// Drop the whole store
    pub fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                log::warn!("Failed to clear storage: {}", e);
            }
        }
    }

    fn load_items(&self) -> HashMap<String, StoredItem> {
        if !self.path.exists() {
            return HashMap::new();
        }
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Failed to parse storage file: {}", e);
                    HashMap::new()
                }
            },
            Err(e) => {
                log::warn!("Failed to read storage file: {}", e);
                HashMap::new()
            }
        }
    }

    fn save_items(&self, items: &HashMap<String, StoredItem>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("Failed to create storage directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(items) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    log::warn!("Failed to save storage file: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to serialize storage file: {}", e),
        }
    }
}
