//! Listing filters.

use crate::catalog::{Product, StockStatus};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Category sentinel that matches every product.
pub const CATEGORY_ALL: &str = "All";
/// Stock sentinel that matches every product.
pub const STOCK_ALL: &str = "all";

/// Inclusive price range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Check whether a price falls inside the range, inclusive on both
    /// ends.
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Filter specification for the product listing.
///
/// Every field is independently optional and filters combine with AND
/// semantics; the default spec passes every product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterSpec {
    /// Exact category match; `None` matches everything.
    pub category: Option<String>,
    /// Inclusive price bounds.
    pub price_range: Option<PriceRange>,
    /// Allowed brands; empty means no brand restriction.
    pub brands: Vec<String>,
    /// Minimum rating, inclusive.
    pub min_rating: Option<f64>,
    /// Exact stock status match; `None` matches everything.
    pub stock: Option<StockStatus>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category. The sentinel [`CATEGORY_ALL`] clears the
    /// restriction (the routing layer passes it through verbatim).
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (category != CATEGORY_ALL).then_some(category);
        self
    }

    /// Restrict to an inclusive price range.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    /// Allow an additional brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.push(brand.into());
        self
    }

    /// Require a minimum rating.
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// Restrict to a stock status.
    pub fn with_stock(mut self, stock: StockStatus) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Restrict to a stock status given as its wire string. The sentinel
    /// [`STOCK_ALL`] (or any unknown value) clears the restriction.
    pub fn with_stock_param(mut self, stock: &str) -> Self {
        self.stock = StockStatus::from_str(stock);
        self
    }

    /// Check whether a product passes every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(range) = &self.price_range {
            if !range.contains(product.price) {
                return false;
            }
        }
        if !self.brands.is_empty() && !self.brands.iter().any(|b| *b == product.brand) {
            return false;
        }
        if let Some(min) = self.min_rating {
            if product.rating < min {
                return false;
            }
        }
        if let Some(stock) = self.stock {
            if product.stock != stock {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: &str, brand: &str, cents: i64, rating: f64) -> Product {
        Product::new("x", "Item", brand, category, Money::new(cents)).with_rating(rating, 10)
    }

    #[test]
    fn test_default_spec_passes_everything() {
        let spec = FilterSpec::new();
        assert!(spec.matches(&product("Electronics", "AudioTech", 29999, 4.5)));
    }

    #[test]
    fn test_category_filter() {
        let spec = FilterSpec::new().with_category("Fashion");
        assert!(spec.matches(&product("Fashion", "LuxeMode", 18999, 4.6)));
        assert!(!spec.matches(&product("Electronics", "TechPro", 44999, 4.8)));
    }

    #[test]
    fn test_category_all_sentinel() {
        let spec = FilterSpec::new().with_category(CATEGORY_ALL);
        assert_eq!(spec.category, None);
        assert!(spec.matches(&product("Grocery", "TeaHarmony", 2499, 4.7)));
    }

    #[test]
    fn test_price_range_inclusive() {
        let spec = FilterSpec::new().with_price_range(Money::new(1000), Money::new(2000));
        assert!(spec.matches(&product("Home", "A", 1000, 4.0)));
        assert!(spec.matches(&product("Home", "A", 2000, 4.0)));
        assert!(!spec.matches(&product("Home", "A", 2001, 4.0)));
        assert!(!spec.matches(&product("Home", "A", 999, 4.0)));
    }

    #[test]
    fn test_empty_brand_set_passes_all() {
        let spec = FilterSpec::new();
        assert!(spec.brands.is_empty());
        assert!(spec.matches(&product("Home", "AnyBrand", 1000, 4.0)));
    }

    #[test]
    fn test_brand_membership() {
        let spec = FilterSpec::new().with_brand("AudioTech").with_brand("TechPro");
        assert!(spec.matches(&product("Electronics", "TechPro", 100, 4.0)));
        assert!(!spec.matches(&product("Electronics", "GameGear", 100, 4.0)));
    }

    #[test]
    fn test_min_rating_inclusive() {
        let spec = FilterSpec::new().with_min_rating(4.5);
        assert!(spec.matches(&product("Home", "A", 100, 4.5)));
        assert!(!spec.matches(&product("Home", "A", 100, 4.4)));
    }

    #[test]
    fn test_stock_filter() {
        let spec = FilterSpec::new().with_stock(StockStatus::Limited);
        let mut p = product("Home", "A", 100, 4.0);
        p.stock = StockStatus::Limited;
        p.stock_count = 5;
        assert!(spec.matches(&p));
        assert!(!spec.matches(&product("Home", "A", 100, 4.0)));
    }

    #[test]
    fn test_stock_all_sentinel() {
        let spec = FilterSpec::new()
            .with_stock(StockStatus::Limited)
            .with_stock_param(STOCK_ALL);
        assert_eq!(spec.stock, None);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let spec = FilterSpec::new()
            .with_category("Electronics")
            .with_min_rating(4.0);
        assert!(spec.matches(&product("Electronics", "A", 100, 4.5)));
        assert!(!spec.matches(&product("Electronics", "A", 100, 3.9)));
        assert!(!spec.matches(&product("Fashion", "A", 100, 4.5)));
    }
}
