//! The session state engine.

use crate::cart::{Cart, CartItem, CartTotals, CheckoutTotals, Coupon};
use crate::catalog::Product;
use crate::checkout::{DeliveryOption, Order, OrderStatus};
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use crate::session::{RecentlyViewed, Wishlist};
use serde::{Deserialize, Serialize};
use shophub_cache::LocalStore;

/// The signed-in shopper profile. No authentication is involved; this
/// is display state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shopper {
    pub name: String,
    pub email: String,
}

impl Shopper {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Owns all mutable per-session state: cart, applied coupon, wishlist,
/// order history, recently-viewed list, and the shopper profile.
///
/// The engine is an explicit handle constructed at startup and passed
/// to the presentation layer, so state is reachable only through it.
/// Cart-affecting mutations return the freshly derived cart-page
/// totals, so callers never read stale pricing. All mutations are
/// synchronous and complete before the next event is processed.
#[derive(Debug)]
pub struct SessionEngine {
    cart: Cart,
    coupon: Option<Coupon>,
    wishlist: Wishlist,
    orders: Vec<Order>,
    recently_viewed: RecentlyViewed,
    shopper: Option<Shopper>,
    store: LocalStore,
}

impl SessionEngine {
    /// Create an engine over a persistence handle, restoring the
    /// recently-viewed list from the previous session.
    pub fn new(store: LocalStore) -> Self {
        Self {
            cart: Cart::new(),
            coupon: None,
            wishlist: Wishlist::new(),
            orders: Vec::new(),
            recently_viewed: RecentlyViewed::load(&store),
            shopper: None,
            store,
        }
    }

    /// Engine pre-populated with the demo order history and shopper.
    pub fn with_demo_data(store: LocalStore) -> Self {
        let mut engine = Self::new(store);
        engine.orders = demo_orders();
        engine.shopper = Some(Shopper::new("John Doe", "john.doe@example.com"));
        engine
    }

    // --- Cart ---

    /// Add a line to the cart, merging quantities into an existing line
    /// with the same `(product id, size, color)` key.
    pub fn add_to_cart(&mut self, item: CartItem) -> CartTotals {
        self.cart.add(item);
        self.cart_totals()
    }

    /// Remove every cart line for the product, regardless of variant.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> CartTotals {
        self.cart.remove(product_id);
        self.cart_totals()
    }

    /// Set the quantity on every cart line for the product.
    pub fn set_cart_quantity(&mut self, product_id: &ProductId, quantity: u32) -> CartTotals {
        self.cart.set_quantity(product_id, quantity);
        self.cart_totals()
    }

    /// Empty the cart. No confirmation step.
    pub fn clear_cart(&mut self) -> CartTotals {
        self.cart.clear();
        self.cart_totals()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart-page totals for the current cart and coupon.
    pub fn cart_totals(&self) -> CartTotals {
        CartTotals::compute(self.cart.items(), self.coupon.as_ref())
    }

    /// Checkout-page totals for the current cart and a delivery option.
    pub fn checkout_totals(&self, delivery: DeliveryOption) -> CheckoutTotals {
        CheckoutTotals::compute(self.cart.items(), delivery)
    }

    // --- Coupon ---

    /// Apply a coupon code. An invalid code leaves state unchanged;
    /// there is no error and no way to tell a wrong code from none.
    pub fn apply_coupon(&mut self, code: &str) -> CartTotals {
        if let Some(coupon) = Coupon::redeem(code) {
            tracing::debug!(code = coupon.code(), "coupon applied");
            self.coupon = Some(coupon);
        }
        self.cart_totals()
    }

    /// Remove any applied coupon.
    pub fn remove_coupon(&mut self) -> CartTotals {
        self.coupon = None;
        self.cart_totals()
    }

    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    // --- Wishlist ---

    /// Add a product to the wishlist; already-present ids are a no-op.
    pub fn add_to_wishlist(&mut self, product: Product) {
        self.wishlist.add(product);
    }

    /// Remove a product from the wishlist; absent ids are a no-op.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) {
        self.wishlist.remove(product_id);
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    // --- Orders ---

    /// Prepend an order to the history (most recent first).
    ///
    /// Stock is deliberately not re-validated here.
    pub fn add_order(&mut self, order: Order) {
        tracing::debug!(id = order.id.as_str(), total = %order.total(), "order placed");
        self.orders.insert(0, order);
    }

    /// Order history, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    // --- Recently viewed ---

    /// Record a product view in the persisted recently-viewed list.
    pub fn record_view(&mut self, product: Product) {
        self.recently_viewed.record(product, &self.store);
    }

    /// Recently-viewed products, most recent first, at most six.
    pub fn recently_viewed(&self) -> &[Product] {
        self.recently_viewed.items()
    }

    // --- Shopper ---

    pub fn set_user(&mut self, shopper: Option<Shopper>) {
        self.shopper = shopper;
    }

    pub fn user(&self) -> Option<&Shopper> {
        self.shopper.as_ref()
    }
}

/// The demo order history shown on the user dashboard.
fn demo_orders() -> Vec<Order> {
    vec![
        Order::restore(
            OrderId::new("ORD-2024-001"),
            1770249600, // 2026-02-05
            OrderStatus::Shipped,
            Vec::new(),
            Money::from_decimal(1299.99),
            Some("TRK123456789".to_string()),
        ),
        Order::restore(
            OrderId::new("ORD-2024-002"),
            1769558400, // 2026-01-28
            OrderStatus::Delivered,
            Vec::new(),
            Money::from_decimal(599.99),
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::generate_tracking_number;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, "Item", "Brand", "Category", Money::new(cents))
    }

    fn engine() -> (tempfile::TempDir, SessionEngine) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, SessionEngine::new(store))
    }

    #[test]
    fn test_add_to_cart_returns_fresh_totals() {
        let (_dir, mut engine) = engine();
        let totals = engine.add_to_cart(CartItem::new(product("1", 10000), 2));

        assert_eq!(totals.subtotal, Money::new(20000));
        assert_eq!(totals.total, Money::new(21600));
    }

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let (_dir, mut engine) = engine();
        for quantity in [1, 2, 3] {
            engine.add_to_cart(CartItem::new(product("1", 1000), quantity));
        }

        assert_eq!(engine.cart().len(), 1);
        assert_eq!(engine.cart().items()[0].quantity, 6);
    }

    #[test]
    fn test_remove_drops_all_variant_lines() {
        let (_dir, mut engine) = engine();
        engine.add_to_cart(CartItem::new(product("1", 1000), 1).with_size("M"));
        engine.add_to_cart(CartItem::new(product("1", 1000), 1).with_size("L"));

        let totals = engine.remove_from_cart(&ProductId::new("1"));
        assert!(engine.cart().is_empty());
        assert_eq!(totals.subtotal, Money::zero());
    }

    #[test]
    fn test_apply_valid_coupon() {
        let (_dir, mut engine) = engine();
        engine.add_to_cart(CartItem::new(product("1", 2000), 1));

        let totals = engine.apply_coupon("save10");
        assert!(engine.coupon().is_some());
        assert_eq!(totals.discount, Money::new(200));
        assert_eq!(totals.total, Money::new(2943));
    }

    #[test]
    fn test_invalid_coupon_is_a_noop() {
        let (_dir, mut engine) = engine();
        engine.add_to_cart(CartItem::new(product("1", 2000), 1));

        let totals = engine.apply_coupon("SAVE20");
        assert!(engine.coupon().is_none());
        assert_eq!(totals.discount, Money::zero());
    }

    #[test]
    fn test_remove_coupon() {
        let (_dir, mut engine) = engine();
        engine.add_to_cart(CartItem::new(product("1", 2000), 1));
        engine.apply_coupon("SAVE10");

        let totals = engine.remove_coupon();
        assert!(engine.coupon().is_none());
        assert_eq!(totals.discount, Money::zero());
    }

    #[test]
    fn test_checkout_totals_use_delivery_option() {
        let (_dir, mut engine) = engine();
        engine.add_to_cart(CartItem::new(product("1", 10000), 1));

        let cart = engine.cart_totals();
        let checkout = engine.checkout_totals(DeliveryOption::Express);

        // Divergent policies: free over threshold on the cart page,
        // fixed option price at checkout.
        assert_eq!(cart.shipping, Money::zero());
        assert_eq!(checkout.shipping, Money::new(1999));
    }

    #[test]
    fn test_wishlist_set_semantics() {
        let (_dir, mut engine) = engine();
        engine.add_to_wishlist(product("1", 100));
        engine.add_to_wishlist(product("1", 100));
        assert_eq!(engine.wishlist().len(), 1);

        engine.remove_from_wishlist(&ProductId::new("2"));
        assert_eq!(engine.wishlist().len(), 1);

        engine.remove_from_wishlist(&ProductId::new("1"));
        assert!(engine.wishlist().is_empty());
    }

    #[test]
    fn test_orders_are_most_recent_first() {
        let (_dir, mut engine) = engine();
        let first = Order::place(Vec::new(), Money::new(100));
        let second = Order::place(Vec::new(), Money::new(200));
        let second_id = second.id.clone();

        engine.add_order(first);
        engine.add_order(second);

        assert_eq!(engine.orders()[0].id, second_id);
    }

    #[test]
    fn test_checkout_flow_snapshot() {
        // The checkout collaborator builds the order from the current
        // cart, then clears it; the snapshot keeps the old lines.
        let (_dir, mut engine) = engine();
        engine.add_to_cart(CartItem::new(product("1", 2000), 2));

        let totals = engine.checkout_totals(DeliveryOption::Standard);
        let order = Order::place(engine.cart().items().to_vec(), totals.total)
            .with_tracking(generate_tracking_number());
        engine.add_order(order);
        engine.clear_cart();

        assert!(engine.cart().is_empty());
        assert_eq!(engine.orders()[0].item_count(), 2);
        assert_eq!(engine.orders()[0].total(), totals.total);
    }

    #[test]
    fn test_record_view_persists_across_engines() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = LocalStore::open(dir.path()).unwrap();
            let mut engine = SessionEngine::new(store);
            engine.record_view(product("1", 100));
            engine.record_view(product("2", 100));
        }

        let store = LocalStore::open(dir.path()).unwrap();
        let engine = SessionEngine::new(store);
        let ids: Vec<&str> = engine
            .recently_viewed()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_recently_viewed_invariants() {
        let (_dir, mut engine) = engine();
        for i in 1..=7 {
            engine.record_view(product(&i.to_string(), 100));
        }
        engine.record_view(product("3", 100));

        let items = engine.recently_viewed();
        assert!(items.len() <= 6);
        assert_eq!(items[0].id.as_str(), "3");
        let mut ids: Vec<&str> = items.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_demo_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        let engine = SessionEngine::with_demo_data(store);

        assert_eq!(engine.orders().len(), 2);
        assert_eq!(engine.orders()[0].id.as_str(), "ORD-2024-001");
        assert_eq!(engine.orders()[0].status, OrderStatus::Shipped);
        assert_eq!(engine.user().unwrap().name, "John Doe");
    }

    #[test]
    fn test_set_user() {
        let (_dir, mut engine) = engine();
        assert!(engine.user().is_none());
        engine.set_user(Some(Shopper::new("Jane", "jane@example.com")));
        assert_eq!(engine.user().unwrap().email, "jane@example.com");
        engine.set_user(None);
        assert!(engine.user().is_none());
    }
}
