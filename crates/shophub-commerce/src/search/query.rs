//! Listing query and sort pipeline.

use crate::catalog::Product;
use crate::search::FilterSpec;
use serde::{Deserialize, Serialize};

/// Sort modes for the product listing. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// Descending by review count.
    #[default]
    Popularity,
    /// Ascending by price.
    PriceLowToHigh,
    /// Descending by price.
    PriceHighToLow,
    /// Descending by rating.
    Rating,
    /// Preserve catalog order.
    Newest,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Popularity => "popularity",
            SortMode::PriceLowToHigh => "price-low",
            SortMode::PriceHighToLow => "price-high",
            SortMode::Rating => "rating",
            SortMode::Newest => "newest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "popularity" => Some(SortMode::Popularity),
            "price-low" => Some(SortMode::PriceLowToHigh),
            "price-high" => Some(SortMode::PriceHighToLow),
            "rating" => Some(SortMode::Rating),
            "newest" => Some(SortMode::Newest),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Popularity => "Popularity",
            SortMode::PriceLowToHigh => "Price: Low to High",
            SortMode::PriceHighToLow => "Price: High to Low",
            SortMode::Rating => "Customer Rating",
            SortMode::Newest => "Newest First",
        }
    }
}

/// A listing query: a filter specification plus the active sort mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    pub filter: FilterSpec,
    pub sort: SortMode,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter specification.
    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = filter;
        self
    }

    /// Set the sort mode.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Run the query against a product list.
    ///
    /// Filtering keeps catalog order; every sort is stable, so catalog
    /// order is the tie-break and output is deterministic.
    pub fn run<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut results: Vec<&Product> = products
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect();

        match self.sort {
            SortMode::Popularity => results.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
            SortMode::PriceLowToHigh => results.sort_by(|a, b| a.price.cmp(&b.price)),
            SortMode::PriceHighToLow => results.sort_by(|a, b| b.price.cmp(&a.price)),
            SortMode::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            // Catalog order already is newest-first.
            SortMode::Newest => {}
        }

        results
    }
}
