//! Repository for the store container's three collections.
//!
//! The container never talks to a backend directly: it calls
//! [`Repository::load`] once at startup and [`Repository::save`] after every
//! mutation. Tests swap in a double by implementing the trait.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use sidabukke_core::{CartItem, Order, User};

use super::{KeyValueStore, RepositoryError, StorageKey};

/// Everything loaded from storage at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub user: Option<User>,
    pub cart: Vec<CartItem>,
    pub orders: Vec<Order>,
}

/// One keyed collection, borrowed for writing.
#[derive(Debug, Clone, Copy)]
pub enum Collection<'a> {
    User(Option<&'a User>),
    Cart(&'a [CartItem]),
    Orders(&'a [Order]),
}

impl Collection<'_> {
    /// The key this collection is stored under.
    #[must_use]
    pub const fn key(&self) -> StorageKey {
        match self {
            Self::User(_) => StorageKey::User,
            Self::Cart(_) => StorageKey::Cart,
            Self::Orders(_) => StorageKey::Orders,
        }
    }

    /// Serialize the whole collection as one JSON document.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if a value cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::User(user) => serde_json::to_string(user),
            Self::Cart(items) => serde_json::to_string(items),
            Self::Orders(orders) => serde_json::to_string(orders),
        }
    }
}

/// Load/save surface the store container is written against.
pub trait Repository {
    /// Load all collections. Missing or unreadable values fall back to
    /// their defaults; this never fails.
    fn load(&self) -> Snapshot;

    /// Persist one collection in full.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if encoding or the backend write fails.
    fn save(&self, collection: Collection<'_>) -> Result<(), RepositoryError>;
}

impl<R: Repository + ?Sized> Repository for &R {
    fn load(&self) -> Snapshot {
        (**self).load()
    }

    fn save(&self, collection: Collection<'_>) -> Result<(), RepositoryError> {
        (**self).save(collection)
    }
}

/// [`Repository`] over any [`KeyValueStore`], one JSON document per key.
#[derive(Debug, Clone)]
pub struct KeyValueRepository<S> {
    store: S,
}

impl<S: KeyValueStore> KeyValueRepository<S> {
    /// Create a repository over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Raw stored value for `key`; `None` when missing or unreadable.
    fn read(&self, key: StorageKey) -> Option<String> {
        match self.store.get_item(key.as_str()) {
            Ok(Some(raw)) => Some(raw),
            Ok(None) => {
                debug!(%key, "No stored value, using default");
                None
            }
            Err(e) => {
                warn!(%key, error = %e, "Failed to read stored value, using default");
                None
            }
        }
    }

    /// Decode `key`, falling back to `T::default()` on any failure.
    fn load_or_default<T: DeserializeOwned + Default>(&self, key: StorageKey) -> T {
        let Some(raw) = self.read(key) else {
            return T::default();
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(%key, error = %e, "Corrupt stored value, using default");
            T::default()
        })
    }

    /// Decode the array stored under `key` element by element. Elements that
    /// do not decode are skipped; anything other than an array gives an
    /// empty list.
    fn load_list<T: DeserializeOwned>(&self, key: StorageKey) -> Vec<T> {
        let entries: Vec<Value> = self.load_or_default(key);
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                serde_json::from_value(entry)
                    .map_err(|e| warn!(%key, index, error = %e, "Skipping corrupt stored entry"))
                    .ok()
            })
            .collect()
    }
}

impl<S: KeyValueStore> Repository for KeyValueRepository<S> {
    fn load(&self) -> Snapshot {
        Snapshot {
            user: self.load_or_default(StorageKey::User),
            cart: self.load_list(StorageKey::Cart),
            orders: self.load_list(StorageKey::Orders),
        }
    }

    fn save(&self, collection: Collection<'_>) -> Result<(), RepositoryError> {
        let json = collection.to_json()?;
        self.store.set_item(collection.key().as_str(), &json)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use sidabukke_core::{Product, ProductId};

    use super::*;
    use crate::db::MemoryStore;

    fn classic() -> Product {
        Product {
            id: ProductId::new("sid001"),
            name: "Sidabukke Teh Premium - Classic".to_string(),
            price: Decimal::from(150_000),
            short: String::new(),
            desc: String::new(),
            img: "/images/tehhitam.jpg".to_string(),
            rating: 4.6,
        }
    }

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemoryStore::new();
        let repo = KeyValueRepository::new(&store);
        assert_eq!(repo.load(), Snapshot::default());
    }

    #[test]
    fn test_cart_roundtrip() {
        let store = MemoryStore::new();
        let repo = KeyValueRepository::new(&store);
        let cart = vec![CartItem::new(classic(), 2)];

        repo.save(Collection::Cart(&cart)).unwrap();

        assert_eq!(repo.load().cart, cart);
    }

    #[test]
    fn test_user_null_is_written() {
        let store = MemoryStore::new();
        let repo = KeyValueRepository::new(&store);

        repo.save(Collection::User(None)).unwrap();

        assert_eq!(store.raw("user").as_deref(), Some("null"));
        assert_eq!(repo.load().user, None);
    }

    #[test]
    fn test_corrupt_value_falls_back_per_key() {
        let user = r#"{"name":"budi","email":"budi@example.com"}"#;
        let store = MemoryStore::with_items([("orders", "{not json"), ("user", user)]);
        let repo = KeyValueRepository::new(&store);

        let snapshot = repo.load();

        assert!(snapshot.orders.is_empty());
        assert_eq!(snapshot.user, Some(User::new("budi", "budi@example.com")));
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let store = MemoryStore::with_items([("cart", r#"{"id":"sid001"}"#)]);
        let repo = KeyValueRepository::new(&store);
        assert!(repo.load().cart.is_empty());
    }

    #[test]
    fn test_bad_cart_line_skipped_others_kept() {
        let cart = r#"[
            {"id":"sid001","price":150000,"qty":2},
            {"id":"sid002","price":"not a price","qty":1},
            {"id":"sid003","price":195000,"qty":1}
        ]"#;
        let store = MemoryStore::with_items([("cart", cart)]);
        let repo = KeyValueRepository::new(&store);

        let loaded = repo.load().cart;

        let ids: Vec<&str> = loaded.iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, ["sid001", "sid003"]);
    }

    #[test]
    fn test_minimal_cart_line_loads() {
        let store = MemoryStore::with_items([("cart", r#"[{"id":"sid001","price":150000,"qty":2}]"#)]);
        let repo = KeyValueRepository::new(&store);

        let loaded = repo.load().cart;

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].qty, 2);
        assert_eq!(loaded[0].line_total(), Decimal::from(300_000));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let store = MemoryStore::new();
        store.fail_writes(true);
        let repo = KeyValueRepository::new(&store);

        let result = repo.save(Collection::Orders(&[]));

        assert!(matches!(result, Err(RepositoryError::Unavailable(_))));
    }
}
