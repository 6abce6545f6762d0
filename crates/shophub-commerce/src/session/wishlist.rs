//! Wishlist membership.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An insertion-ordered set of products, unique by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product. Adding an already-present id is a no-op; returns
    /// whether the product was inserted.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(product);
        true
    }

    /// Remove a product by id. Removing an absent id is a no-op;
    /// returns whether anything was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| &p.id != id);
        self.items.len() < before
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == id)
    }

    /// The wishlist in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str) -> Product {
        Product::new(id, "Item", "Brand", "Category", Money::new(100))
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.add(product("1")));
        assert!(!wishlist.add(product("1")));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product("1"));
        assert!(!wishlist.remove(&ProductId::new("2")));
        assert!(wishlist.remove(&ProductId::new("1")));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product("3"));
        wishlist.add(product("1"));
        wishlist.add(product("2"));

        let ids: Vec<&str> = wishlist.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
