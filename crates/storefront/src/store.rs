//! The store container.
//!
//! [`Store`] is the single owner of the current user, the cart and the order
//! history, and the only thing allowed to change them. Every mutation writes
//! the affected collection through the [`Repository`] before returning.
//!
//! Persistence is fire-and-forget: a failed write is logged and otherwise
//! ignored, and the in-memory state stays authoritative for the session.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, error, info, instrument};

use sidabukke_core::{CartItem, Order, OrderDetails, OrderStatus, Product, User, cart_total};

use crate::db::{Collection, Repository};
use crate::ids::OrderIdGenerator;
use crate::services::auth::{LoginForm, RegisterForm};

/// Number of orders shown on the account page.
pub const RECENT_ORDER_COUNT: usize = 5;

/// Session-scoped state container for user, cart and orders.
pub struct Store<R> {
    repo: R,
    user: Option<User>,
    cart: Vec<CartItem>,
    orders: Vec<Order>,
    ids: OrderIdGenerator,
}

impl<R: Repository> Store<R> {
    /// Load state from `repo`. Unreadable collections start empty.
    pub fn load(repo: R) -> Self {
        let snapshot = repo.load();
        debug!(
            signed_in = snapshot.user.is_some(),
            cart_lines = snapshot.cart.len(),
            orders = snapshot.orders.len(),
            "Store loaded"
        );

        Self {
            ids: OrderIdGenerator::seeded_from(&snapshot.orders),
            user: snapshot.user,
            cart: snapshot.cart,
            orders: snapshot.orders,
            repo,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Cart line items in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Order history, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Sum of `price × qty` over the cart, computed on every call.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        cart_total(&self.cart)
    }

    /// Number of distinct line items (the header badge).
    #[must_use]
    pub fn cart_line_count(&self) -> usize {
        self.cart.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn cart_is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Look up an order by id.
    #[must_use]
    pub fn find_order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// The `n` newest orders.
    #[must_use]
    pub fn recent_orders(&self, n: usize) -> &[Order] {
        self.orders.get(..n.min(self.orders.len())).unwrap_or(&[])
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add `qty` of `product`. An existing line for the same product is
    /// incremented instead of duplicated; the result is never below 1.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product, qty: i64) {
        if let Some(line) = self.cart.iter_mut().find(|i| i.product.id == product.id) {
            line.qty = clamp_qty(i64::from(line.qty).saturating_add(qty));
            debug!(qty = line.qty, "Incremented cart line");
        } else {
            let line = CartItem {
                product: product.clone(),
                qty: clamp_qty(qty),
            };
            debug!(qty = line.qty, "Added cart line");
            self.cart.push(line);
        }
        self.persist(Collection::Cart(&self.cart));
    }

    /// Set the quantity of `product_id` to `max(1, qty)`. Unknown ids are
    /// ignored.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, product_id: &str, qty: i64) {
        if let Some(line) = self.cart.iter_mut().find(|i| i.product.id == product_id) {
            line.qty = clamp_qty(qty);
        }
        self.persist(Collection::Cart(&self.cart));
    }

    /// Remove the line for `product_id`, if present.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.retain(|i| i.product.id != product_id);
        self.persist(Collection::Cart(&self.cart));
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist(Collection::Cart(&self.cart));
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Turn the current cart into an order placed now.
    ///
    /// Returns `None` and changes nothing when the cart is empty.
    pub fn place_order(&mut self, details: OrderDetails) -> Option<Order> {
        self.place_order_at(details, Utc::now())
    }

    /// Turn the current cart into an order placed at `now`.
    ///
    /// The order snapshots the cart lines and total, starts as
    /// [`OrderStatus::Processing`], and is prepended to the history. The cart
    /// is cleared in the same step.
    #[instrument(skip(self, details, now))]
    pub fn place_order_at(&mut self, details: OrderDetails, now: DateTime<Utc>) -> Option<Order> {
        if self.cart.is_empty() {
            debug!("Cart is empty, no order placed");
            return None;
        }

        let order = Order {
            id: self.ids.generate_at(now),
            total: self.cart_total(),
            items: std::mem::take(&mut self.cart),
            details,
            status: OrderStatus::Processing,
            created_at: now,
        };

        info!(order_id = %order.id, total = %order.total, lines = order.items.len(), "Order placed");

        self.orders.insert(0, order.clone());
        self.persist(Collection::Orders(&self.orders));
        self.persist(Collection::Cart(&self.cart));

        Some(order)
    }

    // =========================================================================
    // User
    // =========================================================================

    /// Replace the current user.
    #[instrument(skip(self, user), fields(signed_in = user.is_some()))]
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
        self.persist(Collection::User(self.user.as_ref()));
    }

    /// Sign in with whatever was submitted. Nothing is verified.
    pub fn login(&mut self, form: LoginForm) -> Option<&User> {
        self.set_user(Some(form.into_user()));
        self.user()
    }

    /// Register with whatever was submitted. Nothing is verified or stored
    /// beyond the resulting user.
    pub fn register(&mut self, form: RegisterForm) -> Option<&User> {
        self.set_user(Some(form.into_user()));
        self.user()
    }

    /// Sign out.
    pub fn logout(&mut self) {
        self.set_user(None);
    }

    fn persist(&self, collection: Collection<'_>) {
        if let Err(e) = self.repo.save(collection) {
            error!(key = %collection.key(), error = %e, "Failed to persist collection");
        }
    }
}

impl<R> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("user", &self.user)
            .field("cart", &self.cart.len())
            .field("orders", &self.orders.len())
            .finish_non_exhaustive()
    }
}

/// Clamp a requested quantity into `1..=u32::MAX`.
fn clamp_qty(qty: i64) -> u32 {
    u32::try_from(qty.max(1)).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::catalog;
    use crate::db::{KeyValueRepository, MemoryStore};

    fn classic() -> &'static Product {
        catalog::find("sid001").unwrap()
    }

    fn greentea() -> &'static Product {
        catalog::find("sid002").unwrap()
    }

    fn store(backend: &MemoryStore) -> Store<KeyValueRepository<&MemoryStore>> {
        Store::load(KeyValueRepository::new(backend))
    }

    #[test]
    fn test_add_same_product_merges_lines() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);

        store.add_to_cart(classic(), 1);
        store.add_to_cart(classic(), 2);
        store.add_to_cart(classic(), 4);

        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart()[0].qty, 7);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);

        store.add_to_cart(greentea(), 1);
        store.add_to_cart(classic(), 1);

        let ids: Vec<_> = store.cart().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, ["sid002", "sid001"]);
        assert_eq!(store.cart_line_count(), 2);
    }

    #[test]
    fn test_negative_increment_clamps_to_one() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);

        store.add_to_cart(classic(), 2);
        store.add_to_cart(classic(), -10);
        assert_eq!(store.cart()[0].qty, 1);

        store.add_to_cart(greentea(), 0);
        assert_eq!(store.cart()[1].qty, 1);
    }

    #[test]
    fn test_update_quantity_clamps() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);
        store.add_to_cart(classic(), 3);

        store.update_quantity("sid001", 0);
        assert_eq!(store.cart()[0].qty, 1);

        store.update_quantity("sid001", -5);
        assert_eq!(store.cart()[0].qty, 1);

        store.update_quantity("sid001", 9);
        assert_eq!(store.cart()[0].qty, 9);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);
        store.add_to_cart(classic(), 2);

        store.update_quantity("sid999", 5);

        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart()[0].qty, 2);
    }

    #[test]
    fn test_remove_and_clear() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);
        store.add_to_cart(classic(), 1);
        store.add_to_cart(greentea(), 1);

        store.remove_from_cart("sid999");
        assert_eq!(store.cart().len(), 2);

        store.remove_from_cart("sid001");
        assert_eq!(store.cart()[0].id(), "sid002");

        store.clear_cart();
        assert!(store.cart_is_empty());
        assert_eq!(backend.raw("cart").as_deref(), Some("[]"));
    }

    #[test]
    fn test_cart_total_tracks_mutations() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);

        store.add_to_cart(classic(), 2);
        assert_eq!(store.cart_total(), Decimal::from(300_000));

        store.add_to_cart(greentea(), 1);
        assert_eq!(store.cart_total(), Decimal::from(465_000));

        store.update_quantity("sid001", 1);
        assert_eq!(store.cart_total(), Decimal::from(315_000));
    }

    #[test]
    fn test_place_order_on_empty_cart() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);

        assert!(store.place_order(OrderDetails::default()).is_none());
        assert!(store.orders().is_empty());
        assert_eq!(backend.raw("orders"), None);
    }

    #[test]
    fn test_place_order_snapshots_and_clears() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);
        store.add_to_cart(classic(), 1);
        store.add_to_cart(classic(), 2);

        let order = store
            .place_order(OrderDetails::shipping("A", "B", "C"))
            .unwrap();

        assert_eq!(order.total, Decimal::from(450_000));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].qty, 3);
        assert_eq!(order.status, OrderStatus::Processing);
        assert!(store.cart_is_empty());
        assert_eq!(store.orders()[0], order);

        store.add_to_cart(greentea(), 5);
        assert_eq!(store.orders()[0].items.len(), 1);
        assert_eq!(store.orders()[0].total, Decimal::from(450_000));
    }

    #[test]
    fn test_orders_newest_first_with_distinct_ids() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);
        let now = Utc::now();

        store.add_to_cart(classic(), 1);
        let first = store.place_order_at(OrderDetails::default(), now).unwrap();
        store.add_to_cart(greentea(), 1);
        let second = store.place_order_at(OrderDetails::default(), now).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.orders()[0].id, second.id);
        assert_eq!(store.orders()[1].id, first.id);
        assert_eq!(store.find_order(first.id.as_str()), Some(&first));
        assert!(store.find_order("ORD-0").is_none());
    }

    #[test]
    fn test_recent_orders() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);
        for _ in 0..7 {
            store.add_to_cart(classic(), 1);
            store.place_order(OrderDetails::default());
        }

        assert_eq!(store.recent_orders(RECENT_ORDER_COUNT).len(), 5);
        assert_eq!(store.recent_orders(100).len(), 7);
        assert_eq!(store.recent_orders(RECENT_ORDER_COUNT)[0], store.orders()[0]);
    }

    #[test]
    fn test_every_mutation_persists() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);

        store.add_to_cart(classic(), 2);
        let reloaded = KeyValueRepository::new(&backend).load();
        assert_eq!(reloaded.cart, store.cart());

        store.place_order(OrderDetails::shipping("A", "B", "C"));
        let reloaded = KeyValueRepository::new(&backend).load();
        assert!(reloaded.cart.is_empty());
        assert_eq!(reloaded.orders, store.orders());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);
        store.add_to_cart(classic(), 1);

        backend.fail_writes(true);
        store.add_to_cart(greentea(), 1);
        let order = store.place_order(OrderDetails::default());

        assert!(order.is_some());
        assert_eq!(store.orders().len(), 1);
        assert!(store.cart_is_empty());
        // Storage still holds the last successful write.
        assert_eq!(KeyValueRepository::new(&backend).load().cart.len(), 1);
    }

    #[test]
    fn test_login_derives_name() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);

        let user = store
            .login(LoginForm {
                email: "budi@example.com".to_string(),
                password: SecretString::from("anything"),
            })
            .cloned()
            .unwrap();

        assert_eq!(user, User::new("budi", "budi@example.com"));
        let stored = backend.raw("user").unwrap();
        assert!(!stored.contains("anything"));
    }

    #[test]
    fn test_register_and_logout() {
        let backend = MemoryStore::new();
        let mut store = store(&backend);

        store.register(RegisterForm {
            name: "Siti Aminah".to_string(),
            email: "siti@example.com".to_string(),
            password: SecretString::from("pw"),
        });
        assert_eq!(store.user().unwrap().name, "Siti Aminah");

        store.logout();
        assert!(store.user().is_none());
        assert_eq!(backend.raw("user").as_deref(), Some("null"));
    }

    #[test]
    fn test_load_restores_previous_session() {
        let backend = MemoryStore::new();
        {
            let mut store = store(&backend);
            store.set_user(Some(User::new("A", "a@example.com")));
            store.add_to_cart(classic(), 2);
        }

        let store = store(&backend);
        assert_eq!(store.user().unwrap().email, "a@example.com");
        assert_eq!(store.cart()[0].qty, 2);
    }
}
