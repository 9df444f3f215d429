//! Application state for one shopping session.

use tracing::info;

use crate::config::{StorageBackend, StorefrontConfig};
use crate::db::{FileStore, KeyValueRepository, KeyValueStore, MemoryStore};
use crate::store::Store;

/// The store container as wired up by [`AppState::open`].
pub type AppStore = Store<KeyValueRepository<Box<dyn KeyValueStore>>>;

/// Configuration plus the session's store container.
///
/// Owned by the front end for the lifetime of the session and handed to
/// whatever needs to read or mutate shop state.
#[derive(Debug)]
pub struct AppState {
    config: StorefrontConfig,
    store: AppStore,
}

impl AppState {
    /// Open the configured backend and load the store from it.
    #[must_use]
    pub fn open(config: StorefrontConfig) -> Self {
        let backend: Box<dyn KeyValueStore> = match config.storage {
            StorageBackend::File => Box::new(FileStore::new(&config.data_dir)),
            StorageBackend::Memory => Box::new(MemoryStore::new()),
        };
        info!(
            storage = ?config.storage,
            data_dir = %config.data_dir.display(),
            "Opening store"
        );

        let store = Store::load(KeyValueRepository::new(backend));
        Self { config, store }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the store container.
    #[must_use]
    pub const fn store(&self) -> &AppStore {
        &self.store
    }

    /// Get a mutable reference to the store container.
    pub fn store_mut(&mut self) -> &mut AppStore {
        &mut self.store
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_file_backend_persists_between_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };

        let mut state = AppState::open(config.clone());
        state
            .store_mut()
            .add_to_cart(catalog::find("sid001").unwrap(), 2);
        drop(state);

        let state = AppState::open(config);
        assert_eq!(state.store().cart().len(), 1);
        assert!(dir.path().join("cart.json").exists());
    }

    #[test]
    fn test_memory_backend_starts_empty() {
        let config = StorefrontConfig {
            storage: StorageBackend::Memory,
            ..StorefrontConfig::default()
        };
        let state = AppState::open(config);
        assert!(state.store().cart_is_empty());
        assert!(state.store().orders().is_empty());
        assert_eq!(state.config().store_name, "Sidabukke Teh");
    }
}
