//! File-backed Key-Value persistence layer for ShopHub.
//!
//! Provides a simple, ergonomic API for persisting small pieces of
//! storefront state to local disk with automatic JSON serialization,
//! one file per key.
//!
//! # Example
//!
//! ```rust,ignore
//! use shophub_cache::LocalStore;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Viewed {
//!     product_ids: Vec<String>,
//! }
//!
//! let store = LocalStore::open("~/.shophub")?;
//!
//! // Store a value
//! store.set("recently_viewed", &viewed)?;
//!
//! // Retrieve a value
//! let viewed: Option<Viewed> = store.get("recently_viewed")?;
//!
//! // Delete a value
//! store.delete("recently_viewed")?;
//! ```

mod error;
mod kv;

pub use error::StoreError;
pub use kv::LocalStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{LocalStore, StoreError};
}
