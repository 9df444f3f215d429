//! Integration tests for the Sidabukke storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sidabukke-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_flow` - Cart and order placement through the store container
//! - `persistence` - Reloading state from JSON files on disk
//! - `checkout_flow` - Checkout forms, QRIS stub and tracking
//!
//! Every test gets its own temporary data directory, so tests can run in
//! parallel.

use std::path::Path;

use tempfile::TempDir;

use sidabukke_storefront::db::{FileStore, KeyValueRepository};
use sidabukke_storefront::store::Store;

/// Store container over JSON files in a directory.
pub type FileBackedStore = Store<KeyValueRepository<FileStore>>;

/// A temporary data directory that stores can be opened on repeatedly,
/// like successive sessions of one shopper.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// The data directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open a fresh session on the data directory.
    #[must_use]
    pub fn open(&self) -> FileBackedStore {
        Store::load(KeyValueRepository::new(FileStore::new(self.path())))
    }

    /// Overwrite the stored document for `key` with `raw`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_raw(&self, key: &str, raw: &str) {
        std::fs::write(self.path().join(format!("{key}.json")), raw)
            .expect("Failed to write stored document");
    }

    /// Read the stored document for `key`, if any.
    #[must_use]
    pub fn read_raw(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path().join(format!("{key}.json"))).ok()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
