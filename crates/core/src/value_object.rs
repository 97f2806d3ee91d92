//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are the same value. To "modify" one, build
/// a new one.
///
/// - `Money { amount: 100 }` is a value object.
/// - `Customer { id: CustomerId(...), .. }` is an entity (identity matters).
///
/// The bounds keep value objects cheap to copy, comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
