//! Key-value persistence for UI state.
//!
//! The browser-local-storage analog: a handful of JSON values under fixed
//! keys, loaded once at startup and written after each committed state
//! transition. Persistence is best-effort throughout - a failed write is
//! logged and the session continues in memory; a failed or corrupt read
//! falls back to the default state silently.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Persisted state keys.
pub mod keys {
    /// Cart lines array.
    pub const CART: &str = "luxe_cart";
    /// Wishlist product array.
    pub const WISHLIST: &str = "luxe_wishlist";
    /// Current user object.
    pub const USER: &str = "luxe_user";
    /// Authentication flag (`"true"` when logged in).
    pub const AUTH: &str = "luxe_auth";
}

/// Errors from the key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage I/O error for key {0}: {1}")]
    Io(String, #[source] std::io::Error),

    /// Serializing a value for key failed.
    #[error("failed to serialize value for key {0}: {1}")]
    Serialize(String, String),
}

/// A string key-value store.
///
/// Implementations: [`FileStore`] (one JSON file per key under a state
/// directory) and [`MemoryStore`] (ephemeral, for tests and `--ephemeral`
/// runs).
pub trait KvStore {
    /// Read the value for `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the value for `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value for `key` if present.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl KvStore for Box<dyn KvStore> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
