//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — they represent
/// concepts where only the attribute values matter. To "modify" one, create a
/// new instance with the new values.
///
/// Example: `Price { currency: Usd, amount: 19.99 }` is a value object; a
/// `Company` identified by its nit is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
