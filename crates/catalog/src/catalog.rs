use std::collections::BTreeMap;

use orderdesk_core::{DomainError, DomainResult};

use crate::product::{Product, ProductId};

/// Owns the product set for its lifetime; composition is fixed at
/// construction (entries are never added or removed afterwards).
///
/// Stock mutation goes through [`reserve_stock`](Self::reserve_stock) and
/// [`release_stock`](Self::release_stock) only. Neither call is transactional
/// with respect to the others: a caller that needs all-or-nothing semantics
/// across several products must validate every item before reserving any
/// (which is exactly what the order service does).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    products: BTreeMap<ProductId, Product>,
}

impl ProductCatalog {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|p| (p.id().clone(), p))
                .collect(),
        }
    }

    /// Look up a product by id.
    pub fn product(&self, product_id: &ProductId) -> DomainResult<&Product> {
        self.products
            .get(product_id)
            .ok_or_else(|| DomainError::product_not_found(product_id.as_str()))
    }

    /// Reserve stock for a product, decrementing its counter.
    ///
    /// Fails with `InsufficientStock` when `quantity` exceeds the current
    /// stock, leaving the counter untouched.
    pub fn reserve_stock(&mut self, product_id: &ProductId, quantity: u32) -> DomainResult<()> {
        let product = self
            .products
            .get_mut(product_id)
            .ok_or_else(|| DomainError::product_not_found(product_id.as_str()))?;

        let available = product.stock();
        if quantity > available {
            return Err(DomainError::insufficient_stock(
                product_id.as_str(),
                available,
                quantity,
            ));
        }

        product.set_stock(available - quantity);
        Ok(())
    }

    /// Release stock back, incrementing the counter unconditionally.
    ///
    /// There is no upper bound: releasing may push stock above any earlier
    /// baseline. This is the compensation primitive for a prior reservation.
    pub fn release_stock(&mut self, product_id: &ProductId, quantity: u32) -> DomainResult<()> {
        let product = self
            .products
            .get_mut(product_id)
            .ok_or_else(|| DomainError::product_not_found(product_id.as_str()))?;

        let stock = product.stock();
        product.set_stock(stock + quantity);
        Ok(())
    }

    /// Iterate over all products (read-only).
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
