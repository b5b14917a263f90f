//! Semigroup type class - values with an associative binary operation.
//!
//! `Semigroup` is the value-level algebra the effect layer lifts: combining
//! two successful payloads with [`Apply::combine_lifted`] uses the payload's
//! `combine`.
//!
//! [`Apply::combine_lifted`]: super::Apply::combine_lifted
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::Semigroup;
//!
//! assert_eq!("Hello, ".to_string().combine("World!".to_string()), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Max, Min, Product, Sum};

/// A type with an associative binary operation.
pub trait Semigroup: Sized {
    /// Combines two values; `self` is the left operand.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines `self` with itself `count` times.
    ///
    /// Returns `None` for `count == 0`, because a semigroup has no identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Semigroup;
    ///
    /// assert_eq!("ab".to_string().combine_n(3), Some("ababab".to_string()));
    /// assert_eq!("ab".to_string().combine_n(0), None);
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Option<Self>
    where
        Self: Clone,
    {
        if count == 0 {
            return None;
        }
        let mut accumulator = self.clone();
        for _ in 1..count {
            accumulator = accumulator.combine(self.clone());
        }
        Some(accumulator)
    }

    /// Folds a non-empty sequence from the left.
    ///
    /// Returns `None` when `items` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Semigroup, Sum};
    ///
    /// assert_eq!(Semigroup::reduce_all(vec![Sum(1), Sum(2), Sum(3)]), Some(Sum(6)));
    /// assert_eq!(Semigroup::reduce_all(Vec::<Sum<i32>>::new()), None);
    /// ```
    fn reduce_all<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().reduce(Self::combine)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is the identity; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left @ Some(_), None) => left,
            (None, right) => right,
        }
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, (): Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("a".to_string()), None, Some("a".to_string()))]
    #[case(None, Some("b".to_string()), Some("b".to_string()))]
    #[case(Some("a".to_string()), Some("b".to_string()), Some("ab".to_string()))]
    #[case(None, None, None)]
    fn option_combines_present_values(
        #[case] left: Option<String>,
        #[case] right: Option<String>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn tuple_combines_componentwise() {
        let combined = (Sum(1), "x".to_string()).combine((Sum(2), "y".to_string()));
        assert_eq!(combined, (Sum(3), "xy".to_string()));
    }

    #[rstest]
    fn min_keeps_smaller() {
        assert_eq!(Min('q').combine(Min('c')), Min('c'));
    }

    proptest! {
        #[test]
        fn string_combine_is_associative(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn combine_n_matches_repeat(text in "[a-z]{1,4}", count in 1_usize..6) {
            prop_assert_eq!(text.clone().combine_n(count), Some(text.repeat(count)));
        }
    }
}
