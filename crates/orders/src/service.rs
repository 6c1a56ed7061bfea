use chrono::Utc;

use orderdesk_cart::Cart;
use orderdesk_catalog::ProductCatalog;
use orderdesk_core::{DomainError, DomainResult};
use orderdesk_pricing::{Coupon, PricingEngine};

use crate::receipt::{OrderId, OrderReceipt};

/// Creates orders from carts: validate, price, reserve.
#[derive(Debug, Default, Clone)]
pub struct OrderService {
    pricing: PricingEngine,
}

impl OrderService {
    pub fn new(pricing: PricingEngine) -> Self {
        Self { pricing }
    }

    /// Create an order from a cart, reserving stock for every item.
    ///
    /// Two passes over the cart give all-or-nothing semantics even though the
    /// catalog's reserve primitive is individually non-transactional:
    ///
    /// 1. Validation pass: every item is checked against *current* stock
    ///    (independent of whatever check happened at add time - stock may
    ///    have drifted since).
    /// 2. Commit pass: only after every item passed, stock is reserved for
    ///    all of them.
    ///
    /// No stock mutates unless the whole cart validates; a failed call leaves
    /// the catalog exactly as it was. Under single-actor use the commit pass
    /// cannot fail, because validation made every shortfall visible first.
    pub fn create_order(
        &self,
        catalog: &mut ProductCatalog,
        cart: &Cart,
        coupon_code: Option<&str>,
    ) -> DomainResult<OrderReceipt> {
        if cart.is_empty() {
            return Err(DomainError::validation("cart is empty"));
        }

        for (product_id, quantity) in cart.items() {
            let product = catalog.product(product_id)?;
            let available = product.stock();
            if *quantity > available {
                tracing::debug!(
                    product_id = %product_id,
                    available,
                    requested = quantity,
                    "order validation failed"
                );
                return Err(DomainError::insufficient_stock(
                    product_id.as_str(),
                    available,
                    *quantity,
                ));
            }
        }

        let coupon = Coupon::from_code(coupon_code);
        let pricing = self.pricing.calculate(cart, catalog, coupon)?;

        for (product_id, quantity) in cart.items() {
            catalog.reserve_stock(product_id, *quantity)?;
        }

        let receipt = OrderReceipt {
            order_id: OrderId::new(),
            total: pricing.total,
            items: cart.items().clone(),
            placed_at: Utc::now(),
        };

        tracing::info!(
            order_id = %receipt.order_id,
            total = %receipt.total,
            item_count = cart.total_items(),
            "order placed"
        );

        Ok(receipt)
    }
}
