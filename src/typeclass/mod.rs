//! Type class traits that let [`Set`](crate::set::Set) take part in generic
//! functional code.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation via GATs
//! - [`Semigroup`]: associative binary operation (union, for sets)
//! - [`Monoid`]: semigroup with an identity (the empty set)
//! - [`Foldable`]: reducing a structure to a summary value
//! - [`Sum`], [`Product`]: numeric wrappers for `fold_map`
//!
//! # Examples
//!
//! ```rust
//! use valset::set::Set;
//! use valset::typeclass::{Foldable, Monoid, Sum};
//!
//! let groups = vec![Set::from_items([1, 2]), Set::from_items([2, 3])];
//! let everyone = Set::combine_all(groups);
//! assert_eq!(everyone.fold_map(Sum).into_inner(), 6);
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
