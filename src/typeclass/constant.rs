//! The constant functor.
//!
//! `Const<C, A>` holds a `C` and only pretends to hold an `A`: mapping the
//! payload retags the phantom type and leaves the stored value alone. With a
//! [`Semigroup`] `C`, `zip` combines the stored values, so traversing with
//! [`ConstKind`] folds a collection into a summary without building the
//! traversed structure.
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Applicative, Const, ConstKind, Sum};
//!
//! let total = ConstKind::<Sum<i32>>::traverse_array_par(vec![1, 2, 3], |n: i32| {
//!     Const::<Sum<i32>, ()>::make(Sum(n))
//! });
//! assert_eq!(total.get_const(), Sum(6));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::applicative::{Applicative, Apply, Pointed};
use super::functor::Functor;
use super::higher::Kind;
use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A stored `C` tagged with a payload type `A` it never contains.
pub struct Const<C, A> {
    value: C,
    marker: PhantomData<fn() -> A>,
}

impl<C, A> Const<C, A> {
    /// Stores `value`.
    #[inline]
    pub const fn make(value: C) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    /// The stored value.
    #[inline]
    pub fn get_const(self) -> C {
        self.value
    }

    /// Transforms the stored value.
    pub fn map_left<D, F>(self, function: F) -> Const<D, A>
    where
        F: FnOnce(C) -> D,
    {
        Const::make(function(self.value))
    }

    /// Retags the payload type; the stored value is untouched.
    #[inline]
    pub fn contramap<B, F>(self, _function: F) -> Const<C, B>
    where
        F: FnOnce(B) -> A,
    {
        Const::make(self.value)
    }

    #[inline]
    fn retag<B>(self) -> Const<C, B> {
        Const::make(self.value)
    }
}

impl<C: fmt::Debug, A> fmt::Debug for Const<C, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

impl<C: Clone, A> Clone for Const<C, A> {
    fn clone(&self) -> Self {
        Self::make(self.value.clone())
    }
}

impl<C: PartialEq, A> PartialEq for Const<C, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C: Eq, A> Eq for Const<C, A> {}

// =============================================================================
// Kind Tag
// =============================================================================

/// Kind tag for `Const<C, _>`.
pub struct ConstKind<C>(PhantomData<fn() -> C>);

impl<C: Send + 'static> Kind for ConstKind<C> {
    type Of<A: Send + 'static> = Const<C, A>;
}

impl<C: Send + 'static> Functor for ConstKind<C> {
    #[inline]
    fn map<A, B, F>(fa: Const<C, A>, _function: F) -> Const<C, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.retag()
    }
}

impl<C: Monoid + Send + 'static> Pointed for ConstKind<C> {
    #[inline]
    fn of<A>(_value: A) -> Const<C, A>
    where
        A: Send + 'static,
    {
        Const::make(C::empty())
    }
}

impl<C: Semigroup + Send + 'static> Apply for ConstKind<C> {
    #[inline]
    fn zip<A, B>(fa: Const<C, A>, fb: Const<C, B>) -> Const<C, (A, B)>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        Const::make(fa.value.combine(fb.value))
    }
}

/// `all` combines the stored values left to right.
impl<C: Monoid + Send + 'static> Applicative for ConstKind<C> {
    fn all<A>(effects: Vec<Const<C, A>>) -> Const<C, Vec<A>>
    where
        A: Send + 'static,
    {
        Const::make(C::combine_all(effects.into_iter().map(Const::get_const)))
    }
}

static_assertions::assert_impl_all!(Const<String, std::rc::Rc<i32>>: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Max, Sum};
    use rstest::rstest;

    #[rstest]
    fn map_never_calls_function() {
        let stored: Const<&str, i32> = Const::make("kept");
        let mapped = ConstKind::<&str>::map(stored, |_: i32| -> i32 { panic!("payload is phantom") });
        assert_eq!(mapped.get_const(), "kept");
    }

    #[rstest]
    fn zip_combines_stored_values() {
        let left: Const<String, u8> = Const::make("ab".to_string());
        let right: Const<String, char> = Const::make("cd".to_string());
        assert_eq!(ConstKind::<String>::zip(left, right).get_const(), "abcd");
    }

    #[rstest]
    fn of_stores_the_identity() {
        assert_eq!(ConstKind::<Vec<u8>>::of(42).get_const(), Vec::<u8>::new());
    }

    #[rstest]
    #[case(vec![], Sum(0))]
    #[case(vec![4, 5, 6], Sum(15))]
    fn traversal_folds_without_building_output(#[case] items: Vec<i32>, #[case] expected: Sum<i32>) {
        let folded = ConstKind::<Sum<i32>>::traverse_array_par(items, |n: i32| Const::<Sum<i32>, String>::make(Sum(n)));
        assert_eq!(folded.get_const(), expected);
    }

    #[rstest]
    fn map_left_and_contramap_touch_only_their_side() {
        let stored: Const<Max<i32>, String> = Const::make(Max(3));
        let widened: Const<i64, usize> = stored.map_left(|Max(n)| i64::from(n) * 2).contramap(|length: usize| "x".repeat(length));
        assert_eq!(widened.get_const(), 6);
    }
}
