//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line in the shopping cart.
///
/// Two lines with the same product but a different size or color are
/// distinct; the merge key is `(product id, size, color)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Units of this line. Callers clamp to available stock before
    /// mutating; the cart itself does not.
    pub quantity: u32,
    /// Selected size, when the product has a size selector.
    pub selected_size: Option<String>,
    /// Selected color, when the product has a color selector.
    pub selected_color: Option<String>,
}

impl CartItem {
    /// Create a line with no variant selection.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity,
            selected_size: None,
            selected_color: None,
        }
    }

    /// Set the selected size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.selected_size = Some(size.into());
        self
    }

    /// Set the selected color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.selected_color = Some(color.into());
        self
    }

    /// Price of this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.product.price * i64::from(self.quantity)
    }

    /// Check whether two lines share the `(product id, size, color)`
    /// merge key.
    fn same_line(&self, other: &CartItem) -> bool {
        self.product.id == other.product.id
            && self.selected_size == other.selected_size
            && self.selected_color == other.selected_color
    }
}

/// The shopping cart: an ordered list of line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, merging quantities into an existing line with the
    /// same `(product id, size, color)` key, otherwise appending.
    ///
    /// No upper bound is enforced here; the caller is responsible for
    /// clamping quantity to available stock.
    pub fn add(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.same_line(&item)) {
            existing.quantity += item.quantity;
            return;
        }
        self.items.push(item);
    }

    /// Remove every line for the product, regardless of selected size or
    /// color. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|i| &i.product.id != product_id);
    }

    /// Set the quantity on every line for the product (same blanket
    /// match as [`Cart::remove`]). The value is not re-clamped; absent
    /// ids are a no-op.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        for item in self.items.iter_mut().filter(|i| &i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The cart lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count (sum of line quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals before any discount.
    pub fn subtotal(&self) -> Money {
        Money::sum(self.items.iter().map(|i| i.line_total()))
    }
}
