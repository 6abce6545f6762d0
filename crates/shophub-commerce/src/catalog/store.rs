//! The immutable product store and its derived queries.

use crate::catalog::{seed_products, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::SearchQuery;

/// Holds the immutable product catalog and answers listing queries.
///
/// The catalog is validated once at construction; all queries are pure
/// reads over the seeded order.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Build a store over a validated product list.
    ///
    /// Fails when any record violates a catalog invariant or two
    /// products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        for (i, product) in products.iter().enumerate() {
            product.validate()?;
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CommerceError::DuplicateProduct(
                    product.id.as_str().to_string(),
                ));
            }
        }
        Ok(Self { products })
    }

    /// Build a store over the ShopHub seed catalog.
    pub fn seeded() -> Result<Self, CommerceError> {
        Self::new(seed_products())
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = Vec::new();
        for product in &self.products {
            if !brands.contains(&product.brand.as_str()) {
                brands.push(&product.brand);
            }
        }
        brands
    }

    /// Run a listing query against the catalog.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Product> {
        query.run(&self.products)
    }

    /// Products currently on sale, up to `limit`.
    pub fn flash_sale(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_on_sale())
            .take(limit)
            .collect()
    }

    /// Products with more than 1000 reviews, up to `limit`.
    pub fn best_sellers(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.reviews > 1000)
            .take(limit)
            .collect()
    }

    /// Other products in the same category, up to `limit`.
    pub fn related(&self, id: &ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }
}
