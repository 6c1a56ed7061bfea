//! Shopping cart domain module.
//!
//! This crate accumulates requested quantities per product, validating each
//! addition against live catalog stock. Pure domain logic (no IO, no HTTP,
//! no storage).

pub mod cart;

pub use cart::Cart;
