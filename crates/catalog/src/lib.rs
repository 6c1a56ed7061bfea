//! Product catalog domain module.
//!
//! This crate owns the product set and the stock reserve/release primitives,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod catalog;
pub mod product;

pub use catalog::ProductCatalog;
pub use product::{Product, ProductId};
