//! The [`Set`] type: construction, queries, algebra and transforms.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use super::MemberHasher;
use super::error::DuplicateElementError;
use super::iter::{IntoIter, Iter};

// =============================================================================
// Set Definition
// =============================================================================

/// An immutable, unordered collection of unique elements.
///
/// Construction deduplicates its input. All operations except
/// [`clear`](Self::clear) are pure: they build a new set and leave the
/// receiver and any argument untouched.
///
/// Iteration order is unspecified and may differ between two sets with the
/// same membership.
///
/// # Time Complexity
///
/// | Operation              | Complexity (expected) |
/// |------------------------|-----------------------|
/// | `from_items`           | O(n)                  |
/// | `len`, `is_empty`      | O(1)                  |
/// | `contains`             | O(1)                  |
/// | `add`, `remove`        | O(n) (copies the set) |
/// | `union`                | O(n + m)              |
/// | `intersection`         | O(n)                  |
/// | `difference`           | O(n)                  |
/// | `symmetric_difference` | O(n + m)              |
/// | `is_subset`            | O(n)                  |
/// | `is_superset`          | O(m)                  |
///
/// # Examples
///
/// ```rust
/// use valset::set::Set;
///
/// let set = Set::from_items(["red", "green", "red"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("green"));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    members: HashSet<T, MemberHasher>,
}

impl<T> Set<T> {
    /// Creates a set with no members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set: Set<i32> = Set::empty();
    /// assert!(set.is_empty());
    /// assert_eq!(set.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            members: HashSet::with_hasher(MemberHasher::default()),
        }
    }

    /// Returns the number of distinct members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// assert_eq!(Set::from_items([1, 1, 2, 2, 3, 3]).len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if the set has at least one member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// assert!(Set::from_items([1]).non_empty());
    /// assert!(!Set::<i32>::empty().non_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns an iterator over the members, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set = Set::from_items([1, 2, 3]);
    /// let total: i32 = set.iter().sum();
    /// assert_eq!(total, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.members.iter())
    }

    /// Empties the set in place and returns it.
    ///
    /// This is the only operation that changes a set after construction.
    /// Clones and [`to_vec`](Self::to_vec) snapshots taken earlier keep
    /// their members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let mut set = Set::from_items([1, 2, 3]);
    /// let snapshot = set.to_vec();
    ///
    /// assert!(set.clear().is_empty());
    /// assert_eq!(snapshot.len(), 3);
    /// ```
    pub fn clear(&mut self) -> &mut Self {
        self.members.clear();
        self
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a set from the distinct elements of `items`.
    ///
    /// Duplicate inputs collapse into one member; input order is irrelevant.
    ///
    /// # Arguments
    ///
    /// * `items` - Any finite sequence of elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set = Set::from_items(vec![3, 1, 3, 2, 1]);
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set, Set::from_items([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iterator = items.into_iter();
        let mut members =
            HashSet::with_capacity_and_hasher(iterator.size_hint().0, MemberHasher::default());
        members.extend(iterator);
        Self { members }
    }

    /// Creates a set containing exactly `item`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set = Set::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[must_use]
    pub fn singleton(item: T) -> Self {
        Self::from_items(std::iter::once(item))
    }

    /// Creates a set from `items`, failing if any element occurs twice.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateElementError`] carrying the first repeated element
    /// and its zero-based position in `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set = Set::try_from_distinct(["a", "b", "c"]).unwrap();
    /// assert_eq!(set.len(), 3);
    ///
    /// let error = Set::try_from_distinct(["a", "b", "a"]).unwrap_err();
    /// assert_eq!(error.position(), 2);
    /// assert_eq!(*error.element(), "a");
    /// ```
    pub fn try_from_distinct<I>(items: I) -> Result<Self, DuplicateElementError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let iterator = items.into_iter();
        let mut members =
            HashSet::with_capacity_and_hasher(iterator.size_hint().0, MemberHasher::default());
        for (position, item) in iterator.enumerate() {
            if let Some(duplicate) = members.replace(item) {
                return Err(DuplicateElementError::new(duplicate, position));
            }
        }
        Ok(Self { members })
    }

    /// Returns `true` if `item` is a member.
    ///
    /// The item may be any borrowed form of the element type, with
    /// matching `Hash` and `Eq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set = Set::from_items(["hello".to_string(), "world".to_string()]);
    ///
    /// // &str looks up String members
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.members.contains(item)
    }

    /// Returns `true` if `item` is not a member.
    #[must_use]
    pub fn not_contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        !self.contains(item)
    }

    /// Returns `true` if every member of `self` is a member of `that`.
    ///
    /// The empty set is a subset of every set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let this = Set::from_items([2, 3, 4]);
    /// let that = Set::from_items([2, 3, 4, 5]);
    ///
    /// assert!(this.is_subset(&that));
    /// assert!(!that.is_subset(&this));
    /// ```
    #[must_use]
    pub fn is_subset(&self, that: &Self) -> bool {
        self.len() <= that.len() && self.iter().all(|member| that.contains(member))
    }

    /// Returns `true` if every member of `that` is a member of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let this = Set::from_items([2, 3, 4, 5]);
    /// let that = Set::from_items([2, 3, 4]);
    ///
    /// assert!(this.is_superset(&that));
    /// assert!(!that.is_superset(&this));
    /// ```
    #[must_use]
    pub fn is_superset(&self, that: &Self) -> bool {
        that.is_subset(self)
    }

    /// Returns `true` if `self` and `that` have no member in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let odd = Set::from_items([1, 3]);
    /// let even = Set::from_items([2, 4]);
    /// assert!(odd.is_disjoint(&even));
    /// assert!(!odd.is_disjoint(&Set::from_items([3])));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, that: &Self) -> bool {
        let (smaller, larger) = if self.len() <= that.len() {
            (self, that)
        } else {
            (that, self)
        };
        smaller.iter().all(|member| larger.not_contains(member))
    }

    /// Returns a set with the image of every member under `transform`.
    ///
    /// Images are deduplicated, so a non-injective `transform` can yield a
    /// smaller set than the receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set = Set::from_items([1, 2, 3, 4]);
    /// assert_eq!(set.map(|x| x * 2), Set::from_items([2, 4, 6, 8]));
    /// assert_eq!(set.map(|x| x % 2), Set::from_items([0, 1]));
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, transform: F) -> Set<U>
    where
        F: FnMut(&T) -> U,
        U: Hash + Eq,
    {
        self.iter().map(transform).collect()
    }

    /// Accumulates `combine` over every member, starting from `init`.
    ///
    /// Each member is visited exactly once, in unspecified order. Unlike
    /// [`Foldable::fold_left`](crate::typeclass::Foldable::fold_left) this
    /// borrows the set and hands out references.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set = Set::from_items([1, 2, 3]);
    /// assert_eq!(set.fold_left(0, |sum, x| sum + x), 6);
    /// ```
    pub fn fold_left<R, F>(&self, init: R, combine: F) -> R
    where
        F: FnMut(R, &T) -> R,
    {
        self.iter().fold(init, combine)
    }

    /// Consumes the set and returns it with `item` added.
    pub(crate) fn with(mut self, item: T) -> Self {
        self.members.insert(item);
        self
    }
}

impl<T: Clone + Hash + Eq> Set<T> {
    /// Returns a new set with `item` added.
    ///
    /// Adding an existing member yields a set equal to the receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set = Set::from_items([1]);
    /// let added = set.add(2);
    ///
    /// assert_eq!(set.len(), 1); // Original unchanged
    /// assert_eq!(added.len(), 2);
    /// assert_eq!(added.add(2), added);
    /// ```
    #[must_use]
    pub fn add(&self, item: T) -> Self {
        self.clone().with(item)
    }

    /// Returns a new set without `item`.
    ///
    /// Removing a non-member yields a set equal to the receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set = Set::from_items([1, 2]);
    /// let removed = set.remove(&1);
    ///
    /// assert_eq!(set.len(), 2); // Original unchanged
    /// assert_eq!(removed, Set::from_items([2]));
    /// assert_eq!(set.remove(&9), set);
    /// ```
    #[must_use]
    pub fn remove<Q>(&self, item: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut copy = self.clone();
        copy.members.remove(item);
        copy
    }

    /// Returns the members for which `predicate` holds.
    ///
    /// `predicate` is called exactly once per member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set = Set::from_items([1, 2, 3]);
    /// assert_eq!(set.filter(|x| *x == 2), Set::from_items([2]));
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|member| predicate(member))
            .cloned()
            .collect()
    }

    /// Returns every element that is a member of `self` or `that`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let this = Set::from_items([1, 2, 3, 4]);
    /// let that = Set::from_items([2, 3, 4, 5]);
    /// assert_eq!(this.union(&that), Set::from_items([1, 2, 3, 4, 5]));
    /// ```
    #[must_use]
    pub fn union(&self, that: &Self) -> Self {
        let (larger, smaller) = if self.len() >= that.len() {
            (self, that)
        } else {
            (that, self)
        };
        let mut result = larger.clone();
        result.members.extend(smaller.iter().cloned());
        result
    }

    /// Returns the members of `self` that are also members of `that`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let this = Set::from_items([1, 2, 3, 4]);
    /// let that = Set::from_items([2, 3, 4, 5]);
    /// assert_eq!(this.intersection(&that), Set::from_items([2, 3, 4]));
    /// ```
    #[must_use]
    pub fn intersection(&self, that: &Self) -> Self {
        let (smaller, larger) = if self.len() <= that.len() {
            (self, that)
        } else {
            (that, self)
        };
        smaller.filter(|member| larger.contains(member))
    }

    /// Returns the members of `self` that are not members of `that`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let this = Set::from_items([1, 2, 3, 4]);
    /// let that = Set::from_items([2, 3, 4, 5]);
    /// assert_eq!(this.difference(&that), Set::from_items([1]));
    /// assert_eq!(that.difference(&this), Set::from_items([5]));
    /// ```
    #[must_use]
    pub fn difference(&self, that: &Self) -> Self {
        self.filter(|member| that.not_contains(member))
    }

    /// Returns the elements that are members of exactly one operand.
    ///
    /// Equal to `(self - that) ∪ (that - self)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let this = Set::from_items([1, 2, 3, 4]);
    /// let that = Set::from_items([2, 3, 4, 5]);
    /// assert_eq!(this.symmetric_difference(&that), Set::from_items([1, 5]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, that: &Self) -> Self {
        self.difference(that).union(&that.difference(self))
    }

    /// Returns the current members as a freshly allocated `Vec`.
    ///
    /// Order is unspecified. The returned vector is a snapshot: a later
    /// [`clear`](Self::clear) does not affect it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valset::set::Set;
    ///
    /// let set = Set::from_items([1, 1, 2, 2, 3, 3]);
    /// let mut members = set.to_vec();
    /// members.sort_unstable();
    /// assert_eq!(members, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// Sets are plain owned containers: thread-safe exactly when their members are.
static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.members.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, member) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{member}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
