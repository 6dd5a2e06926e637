//! Error types for set construction.

use std::fmt;

/// Returned by [`Set::try_from_distinct`](super::Set::try_from_distinct)
/// when the input repeats an element.
///
/// # Examples
///
/// ```rust
/// use valset::set::Set;
///
/// let error = Set::try_from_distinct([1, 2, 2]).unwrap_err();
/// assert_eq!(error.to_string(), "duplicate element at position 2");
/// assert_eq!(error.into_element(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateElementError<T> {
    element: T,
    position: usize,
}

impl<T> DuplicateElementError<T> {
    pub(super) const fn new(element: T, position: usize) -> Self {
        Self { element, position }
    }

    /// The repeated element.
    #[must_use]
    pub const fn element(&self) -> &T {
        &self.element
    }

    /// Zero-based position of the repetition in the input sequence.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Consumes the error and returns the repeated element.
    #[must_use]
    pub fn into_element(self) -> T {
        self.element
    }
}

impl<T> fmt::Display for DuplicateElementError<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "duplicate element at position {}", self.position)
    }
}

impl<T: fmt::Debug> std::error::Error for DuplicateElementError<T> {}
