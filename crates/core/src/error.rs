//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation, missing
/// products, stock shortfalls). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. non-positive quantity, empty cart).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A product id was referenced that the catalog does not contain.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity exceeds the product's current stock.
    #[error("insufficient stock for {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: String,
        available: u32,
        requested: u32,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn product_not_found(product_id: impl Into<String>) -> Self {
        Self::ProductNotFound(product_id.into())
    }

    pub fn insufficient_stock(
        product_id: impl Into<String>,
        available: u32,
        requested: u32,
    ) -> Self {
        Self::InsufficientStock {
            product_id: product_id.into(),
            available,
            requested,
        }
    }
}
