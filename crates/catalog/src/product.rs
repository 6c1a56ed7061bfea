use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, Money};

/// Product identifier (caller-supplied, SKU-like).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Entity: a catalog product with immutable identity and a mutable stock
/// counter.
///
/// Stock is only mutable through the catalog's reserve/release operations;
/// there is no public setter. Every stock mutation bumps `stock_version`, so
/// drift between a cart's add-time check and order commit is observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    unit_price: Money,
    stock: u32,
    stock_version: u64,
}

impl Product {
    /// Create a product, rejecting negative prices and empty names.
    ///
    /// Negative stock is unrepresentable by construction (`u32`).
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        stock: u32,
    ) -> DomainResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if unit_price.is_negative() {
            return Err(DomainError::validation("unit price cannot be negative"));
        }

        Ok(Self {
            id,
            name,
            unit_price,
            stock,
            stock_version: 0,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Currently available stock.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Number of stock mutations applied since construction.
    pub fn stock_version(&self) -> u64 {
        self.stock_version
    }

    /// Replace the stock counter. Catalog-internal: reserve/release are the
    /// only callers.
    pub(crate) fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
        self.stock_version += 1;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
