//! Monoid type class - a semigroup with an identity element.
//!
//! # Laws
//!
//! ```text
//! A::empty().combine(a) == a
//! a.combine(A::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Monoid, Product};
//!
//! assert_eq!(String::combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
//! assert_eq!(Product::<i32>::combine_all(Vec::new()), Product(1));
//! ```

use std::ops::{Add, Mul};

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, One, Product, Sum};

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// The identity of [`Semigroup::combine`].
    fn empty() -> Self;

    /// Folds any sequence from the left, starting at [`Monoid::empty`].
    fn combine_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    #[inline]
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    #[inline]
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::default())
    }
}

impl<A: Mul<Output = A> + One> Monoid for Product<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::ONE)
    }
}

impl<A: Ord + Bounded> Monoid for Max<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn empty_collection_folds_to_identity() {
        assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum(0));
        assert_eq!(Max::<u8>::combine_all(Vec::new()), Max(0));
        assert_eq!(Min::<i8>::combine_all(Vec::new()), Min(i8::MAX));
    }

    #[rstest]
    fn tuple_identity_is_componentwise() {
        let identity: (String, Vec<i32>) = Monoid::empty();
        assert_eq!(identity, (String::new(), Vec::new()));
    }

    proptest! {
        #[test]
        fn identity_laws_hold_for_vec(values in prop::collection::vec(any::<i16>(), 0..8)) {
            prop_assert_eq!(Vec::empty().combine(values.clone()), values.clone());
            prop_assert_eq!(values.clone().combine(Vec::empty()), values);
        }

        #[test]
        fn sum_of_many_matches_iterator_sum(values in prop::collection::vec(-1000_i64..1000, 0..16)) {
            let expected: i64 = values.iter().sum();
            prop_assert_eq!(Sum::combine_all(values.into_iter().map(Sum)), Sum(expected));
        }
    }
}
