use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use orderdesk_catalog::{ProductCatalog, ProductId};
use orderdesk_core::{DomainError, DomainResult, Money};

/// Accumulates requested quantities per product.
///
/// The cart never owns products and never holds a catalog reference; every
/// operation that needs stock or prices takes `&ProductCatalog` explicitly.
/// That keeps the cart a plain value and leaves the catalog free to be
/// mutably borrowed by the order commit while carts are still alive.
///
/// Lifecycle: created empty, grows through [`add_item`](Self::add_item) (no
/// removal), and is discarded after an order is created from it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: BTreeMap<ProductId, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quantity of a product, validating against the catalog.
    ///
    /// Fails with `Validation` on a zero quantity, `ProductNotFound` on an
    /// unknown id, and `InsufficientStock` when `quantity` exceeds the
    /// product's *current* stock. The check is per call: the quantity already
    /// in the cart does not count against it, so two additions that each fit
    /// current stock both succeed even when their sum does not. The order
    /// service's validation pass is the backstop for the accumulated total.
    ///
    /// A failed add leaves the cart unmodified.
    pub fn add_item(
        &mut self,
        catalog: &ProductCatalog,
        product_id: &ProductId,
        quantity: u32,
    ) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let product = catalog.product(product_id)?;

        let available = product.stock();
        if quantity > available {
            return Err(DomainError::insufficient_stock(
                product_id.as_str(),
                available,
                quantity,
            ));
        }

        *self.items.entry(product_id.clone()).or_insert(0) += quantity;
        Ok(())
    }

    /// Total quantity across all entries.
    pub fn total_items(&self) -> u32 {
        self.items.values().sum()
    }

    /// Sum of `unit_price * quantity` over all entries.
    ///
    /// Recomputed from live catalog prices on every call, never cached.
    pub fn subtotal(&self, catalog: &ProductCatalog) -> DomainResult<Money> {
        self.items
            .iter()
            .map(|(product_id, qty)| Ok(catalog.product(product_id)?.unit_price() * *qty))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The requested quantities, keyed by product id.
    pub fn items(&self) -> &BTreeMap<ProductId, u32> {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_catalog::Product;

    fn test_catalog() -> ProductCatalog {
        ProductCatalog::new([
            product("P001", "Laptop", 120_000, 10),
            product("P002", "Mouse", 2_500, 50),
            product("P003", "Keyboard", 7_500, 30),
            product("P004", "Monitor", 30_000, 5),
            product("P005", "USB Cable", 1_000, 100),
        ])
    }

    fn product(id: &str, name: &str, price_cents: i64, stock: u32) -> Product {
        Product::new(ProductId::new(id), name, Money::from_cents(price_cents), stock).unwrap()
    }

    #[test]
    fn add_single_item() {
        let catalog = test_catalog();
        let mut cart = Cart::new();

        cart.add_item(&catalog, &ProductId::new("P001"), 2).unwrap();

        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.items().get(&ProductId::new("P001")), Some(&2));
        assert!(!cart.is_empty());
    }

    #[test]
    fn add_multiple_items() {
        let catalog = test_catalog();
        let mut cart = Cart::new();

        cart.add_item(&catalog, &ProductId::new("P001"), 1).unwrap();
        cart.add_item(&catalog, &ProductId::new("P002"), 3).unwrap();
        cart.add_item(&catalog, &ProductId::new("P003"), 2).unwrap();

        assert_eq!(cart.total_items(), 6);
        assert_eq!(cart.items().len(), 3);
    }

    #[test]
    fn repeated_adds_accumulate_one_entry() {
        let catalog = test_catalog();
        let mut cart = Cart::new();

        cart.add_item(&catalog, &ProductId::new("P002"), 2).unwrap();
        cart.add_item(&catalog, &ProductId::new("P002"), 3).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().get(&ProductId::new("P002")), Some(&5));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let catalog = test_catalog();
        let mut cart = Cart::new();

        let err = cart.add_item(&catalog, &ProductId::new("P001"), 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn unknown_product_is_rejected() {
        let catalog = test_catalog();
        let mut cart = Cart::new();

        let err = cart.add_item(&catalog, &ProductId::new("P999"), 1).unwrap_err();
        assert!(matches!(err, DomainError::ProductNotFound(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn quantity_above_stock_is_rejected_and_cart_unchanged() {
        let catalog = test_catalog();
        let mut cart = Cart::new();
        cart.add_item(&catalog, &ProductId::new("P004"), 2).unwrap();

        let err = cart.add_item(&catalog, &ProductId::new("P004"), 6).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                product_id: "P004".into(),
                available: 5,
                requested: 6,
            }
        );
        assert_eq!(cart.items().get(&ProductId::new("P004")), Some(&2));
    }

    #[test]
    fn stock_check_is_per_call_not_cumulative() {
        // Each add is validated against current stock alone. Two adds of 3 on
        // a stock-5 product both pass, and the cart ends up holding 6 - more
        // than the catalog can actually fulfil. Order creation re-validates
        // the accumulated total.
        let catalog = test_catalog();
        let mut cart = Cart::new();
        let id = ProductId::new("P004"); // stock 5

        cart.add_item(&catalog, &id, 3).unwrap();
        cart.add_item(&catalog, &id, 3).unwrap();

        assert_eq!(cart.items().get(&id), Some(&6));
    }

    #[test]
    fn add_validates_against_live_stock() {
        let mut catalog = test_catalog();
        let mut cart = Cart::new();
        let id = ProductId::new("P004"); // stock 5

        cart.add_item(&catalog, &id, 5).unwrap();

        // Stock drifts after the first add; the next add sees the new level.
        catalog.reserve_stock(&id, 4).unwrap();
        let err = cart.add_item(&catalog, &id, 2).unwrap_err();
        assert!(matches!(err, DomainError::InsufficientStock { .. }));
    }

    #[test]
    fn subtotal_sums_price_times_quantity() {
        let catalog = test_catalog();
        let mut cart = Cart::new();

        cart.add_item(&catalog, &ProductId::new("P001"), 1).unwrap(); // 1200.00
        cart.add_item(&catalog, &ProductId::new("P002"), 4).unwrap(); //  100.00
        cart.add_item(&catalog, &ProductId::new("P003"), 2).unwrap(); //  150.00

        assert_eq!(cart.subtotal(&catalog).unwrap().cents(), 145_000);
    }

    #[test]
    fn subtotal_of_empty_cart_is_zero() {
        let catalog = test_catalog();
        let cart = Cart::new();
        assert!(cart.subtotal(&catalog).unwrap().is_zero());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn subtotal_is_idempotent_without_mutation() {
        let catalog = test_catalog();
        let mut cart = Cart::new();
        cart.add_item(&catalog, &ProductId::new("P005"), 7).unwrap();

        let first = cart.subtotal(&catalog).unwrap();
        let second = cart.subtotal(&catalog).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn subtotal_survives_stock_drift() {
        // Subtotal depends on prices, not stock levels.
        let mut catalog = test_catalog();
        let mut cart = Cart::new();
        let id = ProductId::new("P002");
        cart.add_item(&catalog, &id, 4).unwrap();

        let before = cart.subtotal(&catalog).unwrap();
        catalog.reserve_stock(&id, 40).unwrap();
        assert_eq!(cart.subtotal(&catalog).unwrap(), before);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: total_items equals the sum of all accepted adds.
            #[test]
            fn total_items_is_sum_of_adds(quantities in proptest::collection::vec(1u32..=20, 1..8)) {
                let catalog = test_catalog();
                let mut cart = Cart::new();
                let id = ProductId::new("P005"); // stock 100, every add fits

                for qty in &quantities {
                    cart.add_item(&catalog, &id, *qty).unwrap();
                }

                prop_assert_eq!(cart.total_items(), quantities.iter().sum::<u32>());
            }

            /// Property: subtotal is unit price times accumulated quantity
            /// for a single-product cart.
            #[test]
            fn subtotal_tracks_accumulated_quantity(quantities in proptest::collection::vec(1u32..=10, 1..8)) {
                let catalog = test_catalog();
                let mut cart = Cart::new();
                let id = ProductId::new("P002"); // 25.00 each

                for qty in &quantities {
                    cart.add_item(&catalog, &id, *qty).unwrap();
                }

                let expected = Money::from_cents(2_500) * quantities.iter().sum::<u32>();
                prop_assert_eq!(cart.subtotal(&catalog).unwrap(), expected);
            }

            /// Property: a rejected add never changes the cart.
            #[test]
            fn failed_add_leaves_cart_unchanged(qty in 6u32..=100) {
                let catalog = test_catalog();
                let mut cart = Cart::new();
                let id = ProductId::new("P004"); // stock 5
                cart.add_item(&catalog, &id, 1).unwrap();
                let snapshot = cart.clone();

                prop_assert!(cart.add_item(&catalog, &id, qty).is_err());
                prop_assert_eq!(cart, snapshot);
            }
        }
    }
}
