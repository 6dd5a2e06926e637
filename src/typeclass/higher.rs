//! Higher-kinded type emulation.
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses a
//! generic associated type so a trait can talk about "the same container,
//! holding a different element type", which is what [`Foldable`] and the
//! `map` transform of [`Set`] need.
//!
//! [`Foldable`]: super::Foldable
//! [`Set`]: crate::set::Set

use crate::set::Set;

/// A type constructor applied to some element type.
///
/// # Type Parameters
///
/// - `Inner`: the element type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Examples
///
/// ```rust
/// use valset::set::Set;
/// use valset::typeclass::TypeConstructor;
///
/// fn assert_inner<F: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Set<i32>>();
/// assert_inner::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The element type, e.g. `i32` for `Set<i32>`.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Set<T> {
    type Inner = T;
    type WithType<B> = Set<B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_inner_type_is_element_type() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<Set<String>>();
    }

    #[test]
    fn set_with_type_is_set_of_new_type() {
        fn rebuild<F: TypeConstructor>(_value: &F) -> F::WithType<u8>
        where
            F::WithType<u8>: Default,
        {
            Default::default()
        }

        let source: Set<i32> = Set::from_items([1, 2, 3]);
        let rebuilt: Set<u8> = rebuild(&source);
        assert!(rebuilt.is_empty());
    }

    #[test]
    fn option_with_type_is_option_of_new_type() {
        fn rebuild<F: TypeConstructor>(_value: &F) -> F::WithType<String>
        where
            F::WithType<String>: Default,
        {
            Default::default()
        }

        let rebuilt: Option<String> = rebuild(&Some(1));
        assert_eq!(rebuilt, None);
    }
}
