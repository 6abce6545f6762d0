//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// The error surface is deliberately narrow: session mutations are
/// tolerant no-ops by design, so only catalog construction can fail.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A product record violates a catalog invariant.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Two catalog products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),
}
