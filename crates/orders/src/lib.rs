//! Order creation domain module.
//!
//! The transactional core: validates a cart against current stock, prices it,
//! and commits the stock reservations, with all-or-nothing semantics from the
//! two-pass validate-then-commit structure.

pub mod receipt;
pub mod service;

pub use receipt::{OrderId, OrderReceipt};
pub use service::OrderService;
