//! Durable key/value storage for the basket document.
//!
//! # Layout
//!
//! The store is scoped to the site origin, the way browser-local storage is:
//!
//! ```text
//! <data_dir>/
//!   http___127_0_0_1_3000/
//!     luminaBasket.json
//! ```
//!
//! One key holds one document. Writes replace the whole document atomically
//! (temp file + rename), so a reader never sees a half-written basket.
//!
//! [`BasketStore`] sits on top of a [`DurableStore`] and owns the basket
//! document schema. Loading never fails: a missing or malformed document
//! yields an empty basket.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Deserialize;
use thiserror::Error;

use lumina_core::{ColorId, LineItem, Quantity};

/// Default key the basket document is stored under.
pub const BASKET_KEY: &str = "luminaBasket";

/// Errors from the durable store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An in-memory store's lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,

    /// Keys name files, so they are restricted to a safe alphabet.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A string key/value store that survives page loads.
pub trait DurableStore: Send + Sync {
    /// Read the value under `key`, `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// =============================================================================
// File-backed store
// =============================================================================

/// Store that keeps one JSON file per key under an origin directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store for `origin` under `data_dir`.
    ///
    /// The directory is created lazily on first write.
    #[must_use]
    pub fn for_origin(data_dir: &Path, origin: &str) -> Self {
        Self {
            root: data_dir.join(origin_slug(origin)),
        }
    }

    /// Directory holding this origin's documents.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl DurableStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })
    }
}

/// Turn an origin URL into a directory name.
fn origin_slug(origin: &str) -> String {
    origin
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

// =============================================================================
// In-memory store
// =============================================================================

/// Process-local store; cloning shares the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DurableStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// Basket document adapter
// =============================================================================

/// A row as read from storage.
///
/// Every field is optional so a row with missing or `null` fields still
/// loads, with blank display values. The field names of the first site
/// release (`color`, `colorName`, `image`) are accepted, and the quantity
/// is read signed so bad rows can be dropped individually.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLineItem {
    #[serde(default, alias = "color")]
    color_id: Option<ColorId>,
    #[serde(default, alias = "colorName")]
    color_display_name: Option<String>,
    #[serde(default, alias = "image")]
    image_ref: Option<String>,
    #[serde(default)]
    quantity: Option<i64>,
}

/// Reads and writes the basket document under a fixed key.
#[derive(Clone)]
pub struct BasketStore {
    store: Arc<dyn DurableStore>,
    key: String,
}

impl std::fmt::Debug for BasketStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasketStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl BasketStore {
    /// Create an adapter over `store` using `key`.
    #[must_use]
    pub fn new(store: Arc<dyn DurableStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Key the document lives under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the basket.
    ///
    /// Never fails: a missing, unreadable or malformed document yields an
    /// empty basket. Rows with a quantity below one are dropped and rows
    /// sharing a colour are merged.
    #[must_use]
    pub fn load(&self) -> Vec<LineItem> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read basket, starting empty");
                return Vec::new();
            }
        };

        let rows: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Malformed basket document, starting empty");
                return Vec::new();
            }
        };

        let mut items: Vec<LineItem> = Vec::with_capacity(rows.len());
        for (position, value) in rows.into_iter().enumerate() {
            let row: StoredLineItem = match serde_json::from_value(value) {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!(position, error = %e, "Dropping unreadable basket row");
                    continue;
                }
            };
            let color_id = row.color_id.unwrap_or_default();
            let raw_quantity = row.quantity.unwrap_or_default();

            let Some(quantity) = u32::try_from(raw_quantity)
                .ok()
                .and_then(|q| Quantity::new(q).ok())
            else {
                tracing::warn!(color = %color_id, quantity = raw_quantity, "Dropping basket row with invalid quantity");
                continue;
            };

            if let Some(existing) = items.iter_mut().find(|item| item.color_id == color_id) {
                tracing::warn!(color = %color_id, "Merging duplicate basket row");
                existing.quantity = existing.quantity.saturating_add(quantity);
                continue;
            }

            items.push(LineItem {
                color_id,
                color_display_name: row.color_display_name.unwrap_or_default(),
                image_ref: row.image_ref.unwrap_or_default(),
                quantity,
            });
        }
        items
    }

    /// Overwrite the stored document with `items`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    pub fn save(&self, items: &[LineItem]) -> Result<(), StoreError> {
        let document = serde_json::to_string(items)?;
        self.store.set(&self.key, &document)
    }
}
