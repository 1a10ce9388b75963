//! Value object trait: equality by value, not identity.
//!
//! Prices, multipliers, selected services and invoices carry no identity of
//! their own. Two of them with the same attribute values are the same value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. An [`Invoice`] snapshot is the clearest example in this
/// workspace: once issued it never changes, even when the order it was taken
/// from keeps moving.
///
/// The trait requires:
/// - **Clone**: values are copied, never shared by reference
/// - **PartialEq**: compared by attribute values
/// - **Debug**: debuggable in logs and test failures
///
/// [`Invoice`]: ../../aquawash_invoicing/struct.Invoice.html
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
