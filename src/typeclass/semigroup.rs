//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use valset::set::Set;
//! use valset::typeclass::Semigroup;
//!
//! // Sets combine by union
//! let left = Set::from_items([1, 2]);
//! let right = Set::from_items([2, 3]);
//! assert_eq!(left.combine(right), Set::from_items([1, 2, 3]));
//! ```

use std::hash::Hash;
use std::ops::Add;

use super::wrappers::{Product, Sum};
use crate::set::Set;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("foo").combine(String::from("bar")), "foobar");
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both operands.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces an iterator with `combine`, or `None` when it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    /// use valset::typeclass::Semigroup;
    ///
    /// let sets = vec![Set::from_items([1]), Set::from_items([2]), Set::from_items([1, 3])];
    /// assert_eq!(Set::reduce_all(sets), Some(Set::from_items([1, 2, 3])));
    ///
    /// let none: Vec<Set<i32>> = Vec::new();
    /// assert_eq!(Set::reduce_all(none), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

/// Sets form a semigroup under union.
impl<T: Clone + Hash + Eq> Semigroup for Set<T> {
    fn combine(self, other: Self) -> Self {
        // Fold the smaller operand into the larger one.
        let (larger, smaller) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller
            .into_iter()
            .fold(larger, |accumulator, element| accumulator.with(element))
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: std::ops::Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}
