//! Cart state, coupons, and derived pricing.

mod cart;
mod coupon;
mod pricing;

pub use cart::{Cart, CartItem};
pub use coupon::Coupon;
pub use pricing::{
    CartTotals, CheckoutTotals, FLAT_SHIPPING, FREE_SHIPPING_THRESHOLD, TAX_RATE,
};
