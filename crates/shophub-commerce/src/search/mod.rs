//! Listing filter and sort pipeline.

mod filter;
mod query;

pub use filter::{FilterSpec, PriceRange, CATEGORY_ALL, STOCK_ALL};
pub use query::{SearchQuery, SortMode};
