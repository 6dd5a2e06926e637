//! Numeric wrapper types selecting an algebraic operation.
//!
//! - [`Sum`]: addition (identity: zero)
//! - [`Product`]: multiplication (identity: one)

/// Additive semigroup/monoid wrapper.
///
/// # Examples
///
/// ```rust
/// use valset::set::Set;
/// use valset::typeclass::{Foldable, Sum};
///
/// let total: Sum<i32> = Set::from_items([1, 2, 3]).fold_map(Sum);
/// assert_eq!(total.into_inner(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// Multiplicative semigroup/monoid wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}
