//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one.
///
/// - **Value Object**: `Price(1000)` equals any other `Price(1000)`.
/// - **Entity**: two `Product`s with the same id are the same product.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
