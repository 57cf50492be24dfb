//! Traits shared by the scalar wrappers, for use in generic code.

/// Access to a wrapper's backing primitive and its validity.
pub trait KeyValue {
    /// The backing primitive.
    type Value: ?Sized;

    /// Returns a reference to the backing primitive.
    fn value_ref(&self) -> &Self::Value;

    /// Returns true if the value denotes a present identifier.
    fn is_valid(&self) -> bool;
}

/// Canonical factory used by generic code to build a wrapper from its primitive.
pub trait ValueOf<P>: Sized {
    fn value_of(value: P) -> Self;
}

/// Equality over optional references.
///
/// Two absent values are equal, an absent value never equals a present one,
/// and present values defer to `PartialEq`.
#[must_use]
pub fn nullable_eq<T: PartialEq + ?Sized>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
