//! E-commerce domain types and logic for the ShopHub storefront.
//!
//! This crate is the state and derivation core behind the storefront UI:
//!
//! - **Catalog**: the immutable seed catalog and its derived queries
//! - **Search**: the product filter/sort pipeline
//! - **Cart**: line-item mutation, coupons, derived pricing
//! - **Checkout**: delivery options and order snapshots
//! - **Session**: the per-session state engine (cart, wishlist, orders,
//!   recently viewed) with local persistence
//!
//! # Example
//!
//! ```rust,ignore
//! use shophub_commerce::prelude::*;
//!
//! let catalog = CatalogStore::seeded()?;
//! let store = LocalStore::open(data_dir)?;
//! let mut session = SessionEngine::new(store);
//!
//! // Add a product to the cart and read the derived totals
//! let product = catalog.products()[0].clone();
//! let totals = session.add_to_cart(CartItem::new(product, 1));
//! println!("Total: {}", totals.total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

// Re-exported so engine consumers need only one crate import.
pub use shophub_cache::{LocalStore, StoreError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        CatalogStore, Product, ProductVariants, Specification, StockStatus,
    };

    // Search
    pub use crate::search::{FilterSpec, PriceRange, SearchQuery, SortMode};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartTotals, CheckoutTotals, Coupon};

    // Checkout
    pub use crate::checkout::{DeliveryOption, Order, OrderStatus};

    // Session
    pub use crate::session::{RecentlyViewed, SessionEngine, Shopper, Wishlist};

    // Persistence
    pub use shophub_cache::{LocalStore, StoreError};
}
