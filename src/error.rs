//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog operations.
///
/// The query path itself is total: unknown filter values and missing product
/// attributes degrade to "no constraint" or "no match" instead of erroring.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two products in the catalog share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
