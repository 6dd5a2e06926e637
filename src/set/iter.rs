//! Iterators over the members of a [`Set`](super::Set).
//!
//! Both iterators wrap the backing table's iterators so the table type
//! never appears in the public API.

use std::collections::hash_set;
use std::iter::FusedIterator;

/// A borrowing iterator over the members of a [`Set`](super::Set).
///
/// Created by [`Set::iter`](super::Set::iter).
pub struct Iter<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(super) const fn new(inner: hash_set::Iter<'a, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the members of a [`Set`](super::Set).
///
/// Created by `Set::into_iter`.
pub struct IntoIter<T> {
    inner: hash_set::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(super) const fn new(inner: hash_set::IntoIter<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::super::Set;
    use rstest::rstest;

    #[rstest]
    fn test_iter_is_exact_size() {
        let set = Set::from_items([1, 2, 3, 3]);
        let mut iterator = set.iter();

        assert_eq!(iterator.len(), 3);
        iterator.next();
        assert_eq!(iterator.len(), 2);
    }

    #[rstest]
    fn test_iter_is_restartable() {
        let set = Set::from_items([10, 20, 30]);

        let first: i32 = set.iter().sum();
        let second: i32 = set.iter().sum();

        assert_eq!(first, 60);
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_iter_clone_without_clone_members() {
        #[derive(PartialEq, Eq, Hash)]
        struct Token(u8);

        let set = Set::from_items([Token(1), Token(2)]);
        let iterator = set.iter();
        let copy = iterator.clone();

        assert_eq!(iterator.count(), 2);
        assert_eq!(copy.count(), 2);
    }

    #[rstest]
    fn test_iter_is_fused_after_exhaustion() {
        let set = Set::singleton(1);
        let mut iterator = set.iter();

        assert_eq!(iterator.next(), Some(&1));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_into_iter_yields_owned_members() {
        let set = Set::from_items(["a".to_string(), "b".to_string()]);

        let mut members: Vec<String> = set.into_iter().collect();
        members.sort();

        assert_eq!(members, vec!["a".to_string(), "b".to_string()]);
    }

    #[rstest]
    fn test_for_loop_over_reference() {
        let set = Set::from_items([1, 2, 3]);
        let mut total = 0;
        for member in &set {
            total += member;
        }
        assert_eq!(total, 6);
        assert_eq!(set.len(), 3);
    }
}
