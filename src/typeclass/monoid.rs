//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` (in addition to associativity):
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use std::hash::Hash;
use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};
use crate::set::Set;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use valset::set::Set;
/// use valset::typeclass::{Monoid, Semigroup};
///
/// let set = Set::from_items([1, 2]);
/// assert_eq!(<Set<i32> as Monoid>::empty().combine(set.clone()), set);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    /// use valset::typeclass::Monoid;
    ///
    /// let sets = vec![Set::from_items([1, 2]), Set::from_items([2, 3])];
    /// assert_eq!(Set::combine_all(sets), Set::from_items([1, 2, 3]));
    ///
    /// let none: Vec<Set<i32>> = Vec::new();
    /// assert!(Set::combine_all(none).is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl<T: Clone + Hash + Eq> Monoid for Set<T> {
    fn empty() -> Self {
        Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_monoid!(
    i32 => 1,
    i64 => 1,
    u32 => 1,
    u64 => 1,
    usize => 1,
    f64 => 1.0,
);
