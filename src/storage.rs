//! Storage
//!
//! Durable key-value snapshots of the cart. The cart keeps two entries: the
//! serialized line items under [`CART_KEY`] and the formatted total under
//! [`CART_TOTAL_KEY`]. Stores are deliberately dumb string maps so the cart
//! layer owns all serialization decisions.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Key under which the serialized cart lines are stored.
pub const CART_KEY: &str = "storefront.cart";

/// Key under which the formatted cart total is stored.
pub const CART_TOTAL_KEY: &str = "storefront.cart_total";

/// Errors from reading or writing a cart store.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// The backing file could not be read.
    #[error("failed to read cart store")]
    Read(#[source] io::Error),

    /// The backing file could not be written.
    #[error("failed to write cart store")]
    Write(#[source] io::Error),

    /// The backing file held something other than a string map.
    #[error("cart store contents are corrupt")]
    Corrupt(#[source] serde_json::Error),
}

/// A durable string-keyed snapshot store for the cart.
pub trait CartStore {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, CartStoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CartStoreError>;
}

/// A volatile in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CartStoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CartStoreError> {
        self.entries.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

/// A store persisted as a single JSON object file.
///
/// A missing file reads as empty. Every write rewrites the whole file, which
/// is fine at cart scale.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, CartStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(error) => return Err(CartStoreError::Read(error)),
        };

        serde_json::from_str(&contents).map_err(CartStoreError::Corrupt)
    }
}

impl CartStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CartStoreError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CartStoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        let contents = serde_json::to_string_pretty(&entries).map_err(CartStoreError::Corrupt)?;
        fs::write(&self.path, contents).map_err(CartStoreError::Write)
    }
}
