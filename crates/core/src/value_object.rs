//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: two values with the same attributes are
//! interchangeable. A catalog product is one; adding the same product twice
//! simply stores two equal entries.

/// Marker trait for value objects.
///
/// Value objects are **immutable** once built and **compared by value**. To
/// "change" one, build a new value.
///
/// The trait requires:
/// - **Clone**: values are copied out of shared containers rather than aliased
/// - **PartialEq**: comparison is by attribute values
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
