//! Coupon codes.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The single supported coupon code.
const SAVE10: &str = "SAVE10";
/// Discount granted by the code, as a percentage of subtotal.
const SAVE10_PERCENT: f64 = 10.0;

/// A successfully redeemed coupon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coupon {
    code: String,
}

impl Coupon {
    /// Redeem a coupon code, matched case-insensitively.
    ///
    /// Any input other than `SAVE10` yields `None`; a wrong code and a
    /// missing code are indistinguishable to the caller.
    pub fn redeem(code: &str) -> Option<Coupon> {
        if code.eq_ignore_ascii_case(SAVE10) {
            Some(Coupon {
                code: code.to_string(),
            })
        } else {
            None
        }
    }

    /// The code exactly as the shopper entered it.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Discount amount for the given subtotal.
    pub fn discount(&self, subtotal: Money) -> Money {
        subtotal.percentage(SAVE10_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redeem_exact_code() {
        assert!(Coupon::redeem("SAVE10").is_some());
    }

    #[test]
    fn test_redeem_is_case_insensitive() {
        let coupon = Coupon::redeem("save10").unwrap();
        assert_eq!(coupon.code(), "save10");
        assert!(Coupon::redeem("Save10").is_some());
    }

    #[test]
    fn test_redeem_rejects_everything_else() {
        assert!(Coupon::redeem("SAVE20").is_none());
        assert!(Coupon::redeem("SAVE1").is_none());
        assert!(Coupon::redeem("SAVE100").is_none());
        assert!(Coupon::redeem("").is_none());
        assert!(Coupon::redeem(" SAVE10").is_none());
    }

    #[test]
    fn test_discount_is_ten_percent() {
        let coupon = Coupon::redeem("SAVE10").unwrap();
        assert_eq!(coupon.discount(Money::new(2000)), Money::new(200));
        assert_eq!(coupon.discount(Money::new(10000)), Money::new(1000));
    }
}
