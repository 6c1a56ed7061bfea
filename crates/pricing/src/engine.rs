use serde::{Deserialize, Serialize};

use orderdesk_cart::Cart;
use orderdesk_catalog::ProductCatalog;
use orderdesk_core::{DomainResult, Money, ValueObject};

use crate::coupon::Coupon;

/// The priced breakdown of a cart. Immutable once constructed.
///
/// All amounts are exact cents. Bulk and coupon discounts are both computed
/// against the original subtotal - they are additive, never compounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub subtotal: Money,
    pub bulk_discount: Money,
    pub coupon_discount: Money,
    pub shipping: Money,
    pub total: Money,
}

impl ValueObject for PricingBreakdown {}

/// Pricing rules: flat shipping, a bulk discount past an item-count
/// threshold, and an optional coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingEngine {
    /// Flat shipping fee charged unless waived by a coupon.
    pub shipping_fee: Money,
    /// Minimum total item count that triggers the bulk discount.
    pub bulk_threshold: u32,
    /// Bulk discount rate in basis points.
    pub bulk_discount_bps: u32,
}

impl Default for PricingEngine {
    /// Standard rules: $10.00 shipping, 5% off subtotal at 5 or more items.
    fn default() -> Self {
        Self {
            shipping_fee: Money::from_cents(1_000),
            bulk_threshold: 5,
            bulk_discount_bps: 500,
        }
    }
}

impl PricingEngine {
    /// Price a cart under the given coupon.
    ///
    /// Pure: reads the cart and catalog, mutates nothing. The only error
    /// source is the subtotal's product lookups.
    pub fn calculate(
        &self,
        cart: &Cart,
        catalog: &ProductCatalog,
        coupon: Coupon,
    ) -> DomainResult<PricingBreakdown> {
        let subtotal = cart.subtotal(catalog)?;
        let total_items = cart.total_items();

        let bulk_discount = if total_items >= self.bulk_threshold {
            subtotal.percent_bps(self.bulk_discount_bps)
        } else {
            Money::zero()
        };

        let (coupon_discount, shipping) = match coupon {
            Coupon::None => (Money::zero(), self.shipping_fee),
            Coupon::PercentOff(bps) => (subtotal.percent_bps(bps), self.shipping_fee),
            Coupon::FreeShipping => (Money::zero(), Money::zero()),
        };

        let total = subtotal - bulk_discount - coupon_discount + shipping;

        Ok(PricingBreakdown {
            subtotal,
            bulk_discount,
            coupon_discount,
            shipping,
            total,
        })
    }
}
