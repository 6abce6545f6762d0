//! Product types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock availability for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Freely available.
    #[default]
    InStock,
    /// Low remaining quantity.
    Limited,
    /// Not purchasable; `stock_count` must be zero.
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::Limited => "limited",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "in-stock" => Some(StockStatus::InStock),
            "limited" => Some(StockStatus::Limited),
            "out-of-stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::Limited => "Limited Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// Selectable size/color options for a product.
///
/// Either list may be empty; a product with no selector at all has no
/// `ProductVariants` value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductVariants {
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

/// A labelled specification shown on the product detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

impl Specification {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A product in the ShopHub catalog.
///
/// Products are immutable seed data; there is no lifecycle beyond
/// process start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Free-form category (e.g., "Electronics").
    pub category: String,
    /// Current price.
    pub price: Money,
    /// Pre-sale price; presence implies the product is on sale.
    pub original_price: Option<Money>,
    /// Average rating, 0–5.
    pub rating: f64,
    /// Review count.
    pub reviews: u32,
    /// Full description.
    pub description: String,
    /// Image URL (display-only).
    pub image: String,
    /// Stock availability.
    pub stock: StockStatus,
    /// Units available.
    pub stock_count: u32,
    /// Absent variants mean the product shows no size/color selector.
    pub variants: Option<ProductVariants>,
    /// Ordered label/value pairs; empty when the product has none.
    pub specifications: Vec<Specification>,
}

impl Product {
    /// Create a new product with defaults for the optional fields.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            price,
            original_price: None,
            rating: 0.0,
            reviews: 0,
            description: String::new(),
            image: String::new(),
            stock: StockStatus::InStock,
            stock_count: 0,
            variants: None,
            specifications: Vec::new(),
        }
    }

    /// Set the pre-sale price.
    pub fn with_original_price(mut self, price: Money) -> Self {
        self.original_price = Some(price);
        self
    }

    /// Set the rating and review count.
    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    /// Set stock availability and count.
    pub fn with_stock(mut self, stock: StockStatus, stock_count: u32) -> Self {
        self.stock = stock;
        self.stock_count = stock_count;
        self
    }

    /// Add selectable sizes.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants.get_or_insert_with(ProductVariants::default).sizes =
            sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Add selectable colors.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants.get_or_insert_with(ProductVariants::default).colors =
            colors.into_iter().map(Into::into).collect();
        self
    }

    /// Add a specification entry.
    pub fn with_spec(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.push(Specification::new(label, value));
        self
    }

    /// Check if the product can be purchased.
    pub fn is_in_stock(&self) -> bool {
        self.stock != StockStatus::OutOfStock
    }

    /// Check if the product is on sale (has an original price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|original| {
            if original > self.price {
                let savings = (original - self.price).cents();
                Some(savings as f64 / original.cents() as f64 * 100.0)
            } else {
                None
            }
        })
    }

    /// Check if the product offers a size or color selector.
    pub fn has_variants(&self) -> bool {
        self.variants
            .as_ref()
            .map(|v| !v.sizes.is_empty() || !v.colors.is_empty())
            .unwrap_or(false)
    }

    /// Validate the record-level invariants of this product.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let fail = |reason: &str| CommerceError::InvalidProduct {
            id: self.id.as_str().to_string(),
            reason: reason.to_string(),
        };

        if self.price <= Money::zero() {
            return Err(fail("price must be positive"));
        }
        if let Some(original) = self.original_price {
            if original < self.price {
                return Err(fail("original price below current price"));
            }
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(fail("rating out of range"));
        }
        if self.stock == StockStatus::OutOfStock && self.stock_count != 0 {
            return Err(fail("out-of-stock product with nonzero stock count"));
        }
        if let Some(variants) = &self.variants {
            for list in [&variants.sizes, &variants.colors] {
                for (i, value) in list.iter().enumerate() {
                    if value.is_empty() {
                        return Err(fail("empty variant value"));
                    }
                    if list[..i].contains(value) {
                        return Err(fail("duplicate variant value"));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new("1", "Headphones", "AudioTech", "Electronics", Money::new(29999))
            .with_rating(4.5, 1203)
            .with_stock(StockStatus::InStock, 45)
    }

    #[test]
    fn test_stock_status_strings() {
        assert_eq!(StockStatus::Limited.as_str(), "limited");
        assert_eq!(StockStatus::Limited.display_name(), "Limited Stock");
        assert_eq!(
            StockStatus::from_str("out-of-stock"),
            Some(StockStatus::OutOfStock)
        );
        assert_eq!(StockStatus::from_str("backorder"), None);
    }

    #[test]
    fn test_product_on_sale() {
        let p = product().with_original_price(Money::new(39999));
        assert!(p.is_on_sale());
        let discount = p.discount_percentage().unwrap();
        assert!((discount - 25.0).abs() < 0.01);
    }

    #[test]
    fn test_product_not_on_sale_without_original_price() {
        let p = product();
        assert!(!p.is_on_sale());
        assert_eq!(p.discount_percentage(), None);
    }

    #[test]
    fn test_variants() {
        let p = product().with_colors(["Black", "Silver"]);
        assert!(p.has_variants());
        assert!(p.variants.as_ref().unwrap().sizes.is_empty());

        assert!(!product().has_variants());
    }

    #[test]
    fn test_validate_accepts_good_product() {
        assert!(product().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_records() {
        let base = product();

        let mut p = base.clone();
        p.price = Money::zero();
        assert!(p.validate().is_err());

        let mut p = base.clone();
        p.original_price = Some(Money::new(100));
        assert!(p.validate().is_err());

        let mut p = base.clone();
        p.rating = 5.5;
        assert!(p.validate().is_err());

        let mut p = base.clone();
        p.stock = StockStatus::OutOfStock;
        p.stock_count = 3;
        assert!(p.validate().is_err());

        let p = base.with_sizes(["M", "M"]);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_stock_serde_wire_format() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"out-of-stock\"");
    }
}
