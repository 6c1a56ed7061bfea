//! Pricing domain module.
//!
//! Computes discounts and shipping for a cart as a pure function of
//! (subtotal, item count, coupon). No side effects, no shared mutable state.

pub mod coupon;
pub mod engine;

pub use coupon::Coupon;
pub use engine::{PricingBreakdown, PricingEngine};
