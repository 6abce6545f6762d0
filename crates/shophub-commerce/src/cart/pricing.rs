//! Derived cart pricing.
//!
//! Totals are pure functions of the cart lines plus coupon state,
//! recomputed on every read and never cached. The cart summary and the
//! checkout page use different shipping (and tax-base) policies; each
//! policy is its own named type and the call site picks one explicitly.

use crate::cart::{CartItem, Coupon};
use crate::checkout::DeliveryOption;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sales tax rate, percent.
pub const TAX_RATE: f64 = 8.0;
/// Pre-discount subtotal above which the cart page ships free
/// (strictly greater than).
pub const FREE_SHIPPING_THRESHOLD: Money = Money::new(5000);
/// Flat shipping charge below the threshold.
pub const FLAT_SHIPPING: Money = Money::new(999);

fn subtotal_of(items: &[CartItem]) -> Money {
    Money::sum(items.iter().map(|i| i.line_total()))
}

/// Totals shown on the cart page.
///
/// Coupon-aware: tax applies to the discounted subtotal, and shipping
/// is free above [`FREE_SHIPPING_THRESHOLD`] of the *pre-discount*
/// subtotal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub shipping: Money,
    pub total: Money,
}

impl CartTotals {
    /// Derive totals from the cart lines and the applied coupon.
    pub fn compute(items: &[CartItem], coupon: Option<&Coupon>) -> Self {
        let subtotal = subtotal_of(items);
        let discount = coupon
            .map(|c| c.discount(subtotal))
            .unwrap_or_else(Money::zero);
        let taxable = subtotal - discount;
        let tax = taxable.percentage(TAX_RATE);
        // Free shipping keys off the pre-discount subtotal.
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Money::zero()
        } else {
            FLAT_SHIPPING
        };

        Self {
            subtotal,
            discount,
            tax,
            shipping,
            total: taxable + tax + shipping,
        }
    }

    /// Check if a coupon discount is in effect.
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }

    /// Amount still needed to qualify for free shipping, when shipping
    /// is being charged.
    pub fn remaining_for_free_shipping(&self) -> Option<Money> {
        (!self.shipping.is_zero()).then(|| FREE_SHIPPING_THRESHOLD - self.subtotal)
    }
}

/// Totals shown on the checkout page.
///
/// No coupon term, tax applies to the full subtotal, and shipping is
/// the selected delivery option's fixed price, independent of the cart
/// page's free-shipping threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub shipping: Money,
    pub total: Money,
}

impl CheckoutTotals {
    /// Derive totals from the cart lines and the chosen delivery option.
    pub fn compute(items: &[CartItem], delivery: DeliveryOption) -> Self {
        let subtotal = subtotal_of(items);
        let tax = subtotal.percentage(TAX_RATE);
        let shipping = delivery.price();

        Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }
}
