//! Operator forms of the set algebra on borrowed sets.
//!
//! | Operator  | Method                       |
//! |-----------|------------------------------|
//! | `&a \| &b` | [`Set::union`]               |
//! | `&a & &b` | [`Set::intersection`]        |
//! | `&a - &b` | [`Set::difference`]          |
//! | `&a ^ &b` | [`Set::symmetric_difference`] |

use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::Set;

impl<T: Clone + Hash + Eq> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns the union of `self` and `rhs` as a new set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let this = Set::from_items([1, 2, 3, 4]);
    /// let that = Set::from_items([2, 3, 4, 5]);
    /// assert_eq!(&this | &that, Set::from_items([1, 2, 3, 4, 5]));
    /// ```
    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Clone + Hash + Eq> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns the intersection of `self` and `rhs` as a new set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let this = Set::from_items([1, 2, 3, 4]);
    /// let that = Set::from_items([2, 3, 4, 5]);
    /// assert_eq!(&this & &that, Set::from_items([2, 3, 4]));
    /// ```
    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.intersection(rhs)
    }
}

impl<T: Clone + Hash + Eq> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns the members of `self` absent from `rhs`.
    fn sub(self, rhs: &Set<T>) -> Set<T> {
        self.difference(rhs)
    }
}

impl<T: Clone + Hash + Eq> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns the members of exactly one of `self` and `rhs`.
    fn bitxor(self, rhs: &Set<T>) -> Set<T> {
        self.symmetric_difference(rhs)
    }
}
