//! Immutable value-type sets.
//!
//! This module provides [`Set`], an unordered collection of unique elements
//! with set algebra and functional transforms. Every operation except
//! [`Set::clear`] returns a new set and leaves its operands untouched.
//!
//! Each set owns its own hash table; sets never share storage, and
//! [`Clone`] produces an independent table with the same membership.
//!
//! # Examples
//!
//! ```rust
//! use valset::set::Set;
//!
//! let set = Set::from_items([1, 1, 2, 2, 3, 3]);
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&1));
//! assert!(set.not_contains(&4));
//!
//! // The original set is preserved
//! let extended = set.add(4);
//! assert_eq!(set.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```
//!
//! ## Set algebra
//!
//! ```rust
//! use valset::set::Set;
//!
//! let this = Set::from_items([1, 2, 3, 4]);
//! let that = Set::from_items([2, 3, 4, 5]);
//!
//! assert_eq!(this.union(&that), Set::from_items([1, 2, 3, 4, 5]));
//! assert_eq!(this.intersection(&that), Set::from_items([2, 3, 4]));
//! assert_eq!(this.difference(&that), Set::from_items([1]));
//! assert_eq!(this.symmetric_difference(&that), Set::from_items([1, 5]));
//!
//! // Operator forms
//! assert_eq!(&this - &that, Set::from_items([1]));
//! assert_eq!(&this ^ &that, Set::from_items([1, 5]));
//! ```
//!
//! ## Transforms
//!
//! ```rust
//! use valset::set::Set;
//!
//! let set = Set::from_items([1, 2, 3]);
//!
//! assert_eq!(set.map(|x| x * 2), Set::from_items([2, 4, 6]));
//! assert_eq!(set.filter(|x| *x == 2), Set::from_items([2]));
//! assert_eq!(set.fold_left(0, |sum, x| sum + x), 6);
//! ```

// =============================================================================
// Member Hasher Selection
// =============================================================================

/// Hasher builder used by every backing table.
///
/// Selected by Cargo feature: `fxhash` uses `rustc_hash::FxBuildHasher`,
/// `ahash` uses `ahash::RandomState`, and the default is the standard
/// library's `RandomState`. `fxhash` wins when both are enabled.
#[cfg(feature = "fxhash")]
pub(crate) type MemberHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type MemberHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type MemberHasher = std::collections::hash_map::RandomState;

mod error;
mod iter;
mod membership;
mod ops;

pub use error::DuplicateElementError;
pub use iter::{IntoIter, Iter};
pub use membership::Set;
