//! Foldable type class - structures that can be reduced to a summary value.
//!
//! Implementors provide [`Foldable::fold_left`] and [`Foldable::fold_right`];
//! everything else is derived from `fold_left`.
//!
//! For [`Set`], both folds visit members in the same unspecified order.
//! Results are only well defined when the combining function does not
//! depend on visiting order.
//!
//! [`Set`]: crate::set::Set

use std::hash::Hash;

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::set::Set;

/// A type class for structures that can be folded.
///
/// # Examples
///
/// ```rust
/// use valset::set::Set;
/// use valset::typeclass::{Foldable, Sum};
///
/// let set = Set::from_items([1, 2, 3, 4]);
/// assert!(set.clone().exists(|element| *element == 4));
/// assert_eq!(set.fold_map(Sum).into_inner(), 10);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right, consuming it.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left, consuming it.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a [`Monoid`] and combines the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns the number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects every element into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element, in fold order, matching `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if any element matches `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element matches `predicate`.
    ///
    /// Vacuously `true` for empty structures.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(true, |all, element| all && predicate(&element))
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

impl<T: Hash + Eq> Foldable for Set<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        // No member order exists, so this is fold_left with flipped arguments.
        self.into_iter()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Product, Sum};
    use rstest::rstest;

    #[rstest]
    fn set_fold_left_sums_members() {
        let set = Set::from_items([1, 2, 3]);
        assert_eq!(Foldable::fold_left(set, 0, |sum, element| sum + element), 6);
    }

    #[rstest]
    fn set_fold_right_sums_members() {
        let set = Set::from_items([1, 2, 3]);
        assert_eq!(set.fold_right(0, |element, sum| sum + element), 6);
    }

    #[rstest]
    fn set_fold_map_with_product() {
        let set = Set::from_items([2, 3, 4, 2]);
        assert_eq!(set.fold_map(Product).into_inner(), 24);
    }

    #[rstest]
    fn set_length_counts_distinct_members() {
        assert_eq!(Set::from_items([1, 1, 2]).length(), 2);
    }

    #[rstest]
    fn set_to_list_contains_every_member() {
        let mut list = Set::from_items([3, 1, 2, 3]).to_list();
        list.sort_unstable();
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[rstest]
    #[case(2, Some(2))]
    #[case(9, None)]
    fn set_find(#[case] target: i32, #[case] expected: Option<i32>) {
        let set = Set::from_items([1, 2, 3]);
        assert_eq!(set.find(|element| *element == target), expected);
    }

    #[rstest]
    fn set_exists_and_for_all() {
        let set = Set::from_items([2, 4, 6]);

        assert!(set.exists(|element| *element == 4));
        assert!(!set.exists(|element| *element == 5));
        assert!(set.for_all(|element| element % 2 == 0));
        assert!(!set.for_all(|element| *element > 2));
    }

    #[rstest]
    fn empty_set_for_all_is_vacuously_true() {
        let set: Set<i32> = Set::empty();
        assert!(set.for_all(|_| false));
        assert!(!set.exists(|_| true));
    }

    #[rstest]
    fn vec_fold_right_visits_in_reverse() {
        let values = vec![1, 2, 3];
        let rendered = values.fold_right(String::new(), |element, accumulator| {
            format!("{accumulator}{element}")
        });
        assert_eq!(rendered, "321");
    }

    #[rstest]
    fn option_fold_map() {
        assert_eq!(Some(5).fold_map(Sum).into_inner(), 5);
        assert_eq!(None::<i32>.fold_map(Sum).into_inner(), 0);
    }
}
