//! Durable storage for the store container.
//!
//! # Layout
//!
//! Three independently keyed JSON documents:
//!
//! | Key      | Shape          |
//! |----------|----------------|
//! | `user`   | `User \| null` |
//! | `cart`   | `CartItem[]`   |
//! | `orders` | `Order[]`      |
//!
//! # Backends
//!
//! - [`FileStore`] - one `<key>.json` file per key in a data directory
//! - [`MemoryStore`] - in-process map, used by tests and `SIDABUKKE_STORAGE=memory`
//!
//! Both implement [`KeyValueStore`], the get/set/remove surface the
//! [`KeyValueRepository`] is written against.

pub mod file;
pub mod memory;
pub mod repository;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::{Collection, KeyValueRepository, Repository, Snapshot};

use thiserror::Error;

/// Errors from the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend refused the operation (e.g. quota exceeded).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// The three keys the store container persists under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    User,
    Cart,
    Orders,
}

impl StorageKey {
    /// All keys, in load order.
    pub const ALL: [Self; 3] = [Self::User, Self::Cart, Self::Orders];

    /// The key as written to the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Cart => "cart",
            Self::Orders => "orders",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string key-value store, the shape of the browser storage API.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), RepositoryError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backend rejects the delete.
    fn remove_item(&self, key: &str) -> Result<(), RepositoryError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), RepositoryError> {
        (**self).remove_item(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), RepositoryError> {
        (**self).remove_item(key)
    }
}
