//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attributes are the same value. To "modify" one, build a new
/// one. A price range or a filter selection is a value object; a catalog
/// product (which has a `ProductId`) is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
