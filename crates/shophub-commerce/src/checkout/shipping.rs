//! Delivery options for checkout.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Delivery options offered on the checkout page.
///
/// Each option carries a fixed price, independent of the cart page's
/// free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    #[default]
    Standard,
    Express,
    Free,
}

impl DeliveryOption {
    /// The fixed shipping price for this option.
    pub fn price(&self) -> Money {
        match self {
            DeliveryOption::Standard => Money::new(999),
            DeliveryOption::Express => Money::new(1999),
            DeliveryOption::Free => Money::zero(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOption::Standard => "standard",
            DeliveryOption::Express => "express",
            DeliveryOption::Free => "free",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(DeliveryOption::Standard),
            "express" => Some(DeliveryOption::Express),
            "free" => Some(DeliveryOption::Free),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryOption::Standard => "Standard Delivery",
            DeliveryOption::Express => "Express Delivery",
            DeliveryOption::Free => "Free Delivery",
        }
    }

    /// Delivery estimate shown next to the option.
    pub fn delivery_estimate(&self) -> &'static str {
        match self {
            DeliveryOption::Standard => "5-7 business days",
            DeliveryOption::Express => "2-3 business days",
            DeliveryOption::Free => "7-10 business days",
        }
    }

    /// Check if this option ships free.
    pub fn is_free(&self) -> bool {
        self.price().is_zero()
    }
}
