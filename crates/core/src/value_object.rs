//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined
//! entirely by their attribute values, and are immutable once constructed. To
//! "modify" one, build a new one.

/// Marker trait for value objects.
///
/// - `Money { cents: 5750 }` is a value object
/// - `Product { id: ProductId("P002"), .. }` is an entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
