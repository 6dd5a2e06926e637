//! # valset
//!
//! Immutable value-type sets for Rust.
//!
//! ## Overview
//!
//! [`Set`](set::Set) is an unordered collection of unique, hashable
//! elements. It offers set algebra (union, intersection, difference,
//! symmetric difference, subset and superset tests) and functional
//! transforms (map, filter, fold). Every operation except `clear` returns a
//! new set, so a set can be shared and passed around without defensive
//! copies.
//!
//! - **Sets**: construction, membership, algebra, transforms, iteration
//! - **Type Classes**: `Semigroup`, `Monoid`, `Foldable` for generic code
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): Type class traits and their `Set` instances
//! - `fxhash`: Hash members with `rustc-hash`
//! - `ahash`: Hash members with `ahash`
//!
//! ## Example
//!
//! ```rust
//! use valset::prelude::*;
//!
//! let this = Set::from_items([1, 2, 3, 4]);
//! let that = Set::from_items([2, 3, 4, 5]);
//!
//! assert_eq!(this.symmetric_difference(&that), Set::from_items([1, 5]));
//! assert!(Set::from_items([2, 3]).is_subset(&that));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports [`Set`](crate::set::Set), its companion types, and (with the
/// `typeclass` feature) the combining type classes and wrappers.
///
/// [`Foldable`](crate::typeclass::Foldable) is left out: its consuming
/// `fold_left` would shadow [`Set::fold_left`](crate::set::Set::fold_left)
/// on owned sets. Import it from [`typeclass`](crate::typeclass) when needed.
///
/// # Usage
///
/// ```rust
/// use valset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::{Monoid, Product, Semigroup, Sum, TypeConstructor};
}

pub mod set;

#[cfg(feature = "typeclass")]
pub mod typeclass;
