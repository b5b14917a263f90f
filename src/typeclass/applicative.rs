//! Applicative type class - lifting values and combining independent effects.
//!
//! This module provides three layers of the capability hierarchy:
//!
//! - [`Pointed`]: produce an effect from a pure value (`of`)
//! - [`Apply`]: combine two independent effects (`zip`)
//! - [`Applicative`]: both, plus aggregation of a whole collection (`all`)
//!
//! The meaning of "independent" is decided by the kind. For synchronous
//! kinds `zip` runs the left side and then the right side. For asynchronous
//! kinds `zip` starts both sides without waiting for either one, so the side
//! effects inside them may interleave in any order; only the *result* is
//! positional. Wrap a kind in [`Sequential`](super::Sequential) to force
//! left-to-right application derived from `flat_map`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! K::ap(K::of(|x| x), fa) == fa
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! K::ap(K::of(f), K::of(x)) == K::of(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! K::ap(ff, K::of(y)) == K::ap(K::of(|f| f(y)), ff)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Apply, OptionKind, Pointed};
//!
//! let lifted: Option<i32> = OptionKind::of(42);
//! assert_eq!(lifted, Some(42));
//!
//! let sum = OptionKind::map2(Some(1), Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;
use super::higher::{IdentityKind, Kind, OptionKind, ResultKind};
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use super::traversable;

/// A capability for kinds that can lift a pure value.
pub trait Pointed: Kind {
    /// Produces an already-completed effect carrying `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Pointed, ResultKind};
    ///
    /// let lifted: Result<i32, String> = ResultKind::<String>::of(7);
    /// assert_eq!(lifted, Ok(7));
    /// ```
    fn of<A>(value: A) -> Self::Of<A>
    where
        A: Send + 'static;
}

/// A capability for kinds that can combine two independent effects.
///
/// `zip` is the only required operation; every other method is derived
/// from it. The order in which the two sides execute is a property of the
/// kind, but the result is always `(left, right)`.
pub trait Apply: Functor {
    /// Combines two effects into an effect of a pair.
    fn zip<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<(A, B)>
    where
        A: Send + 'static,
        B: Send + 'static;

    /// Applies a function carried by one effect to the value of another.
    #[inline]
    fn ap<A, B, F>(fab: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Self::map(Self::zip(fab, fa), |(function, value)| function(value))
    }

    /// Combines two effects with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Apply, OptionKind};
    ///
    /// assert_eq!(OptionKind::map2(Some(2), Some(3), |x, y| x * y), Some(6));
    /// assert_eq!(OptionKind::map2(Some(2), None::<i32>, |x, y| x * y), None);
    /// ```
    #[inline]
    fn map2<A, B, C, F>(fa: Self::Of<A>, fb: Self::Of<B>, function: F) -> Self::Of<C>
    where
        A: Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
        F: FnOnce(A, B) -> C + Send + 'static,
    {
        Self::map(Self::zip(fa, fb), move |(a, b)| function(a, b))
    }

    /// Combines three effects with a ternary function.
    #[inline]
    fn map3<A, B, C, D, F>(
        fa: Self::Of<A>,
        fb: Self::Of<B>,
        fc: Self::Of<C>,
        function: F,
    ) -> Self::Of<D>
    where
        A: Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
        D: Send + 'static,
        F: FnOnce(A, B, C) -> D + Send + 'static,
    {
        Self::map(Self::zip(Self::zip(fa, fb), fc), move |((a, b), c)| {
            function(a, b, c)
        })
    }

    /// Runs both effects and keeps the left result.
    #[inline]
    fn zip_left<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<A>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        Self::map(Self::zip(fa, fb), |(a, _)| a)
    }

    /// Runs both effects and keeps the right result.
    #[inline]
    fn zip_right<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        Self::map(Self::zip(fa, fb), |(_, b)| b)
    }

    /// Lifts a `Semigroup` on payloads into one on effects.
    ///
    /// The result is `first.combine(second)` in argument order, whatever
    /// order the two effects completed in.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Apply, OptionKind};
    ///
    /// let combined = OptionKind::combine_lifted(Some("a".to_string()), Some("b".to_string()));
    /// assert_eq!(combined, Some("ab".to_string()));
    /// ```
    #[inline]
    fn combine_lifted<A>(first: Self::Of<A>, second: Self::Of<A>) -> Self::Of<A>
    where
        A: Semigroup + Send + 'static,
    {
        Self::map2(first, second, Semigroup::combine)
    }
}

/// A capability combining [`Apply`] and [`Pointed`].
///
/// Besides the lifting and combining operations, `Applicative` provides
/// aggregation of a collection of effects and the parallel discipline of the
/// array traversal engine.
pub trait Applicative: Apply + Pointed {
    /// Aggregates a collection of effects into an effect of a vector.
    ///
    /// Result element `i` is the payload of `effects[i]`. The default folds
    /// with [`Apply::zip`]; kinds with a native "run all" primitive override it.
    fn all<A>(effects: Vec<Self::Of<A>>) -> Self::Of<Vec<A>>
    where
        A: Send + 'static,
    {
        let capacity = effects.len();
        effects
            .into_iter()
            .fold(Self::of(Vec::with_capacity(capacity)), |accumulator, effect| {
                Self::map2(accumulator, effect, |mut buffer, value| {
                    buffer.push(value);
                    buffer
                })
            })
    }

    /// The identity of [`Apply::combine_lifted`].
    #[inline]
    fn empty_lifted<A>() -> Self::Of<A>
    where
        A: Monoid + Send + 'static,
    {
        Self::of(A::empty())
    }

    /// Applies `function` to every element and aggregates with [`Applicative::all`].
    ///
    /// See [`traversable::traverse_array_par`].
    fn traverse_array_par<A, B, F>(items: Vec<A>, function: F) -> Self::Of<Vec<B>>
    where
        Self: Sized,
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(A) -> Self::Of<B>,
    {
        traversable::traverse_array_par::<Self, A, B, F>(items, function)
    }

    /// Like [`Applicative::traverse_array_par`], also passing the element index.
    fn traverse_array_with_index_par<A, B, F>(items: Vec<A>, function: F) -> Self::Of<Vec<B>>
    where
        Self: Sized,
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(usize, A) -> Self::Of<B>,
    {
        traversable::traverse_array_with_index_par::<Self, A, B, F>(items, function)
    }

    /// Aggregates already-built effects with the parallel discipline.
    fn sequence_array_par<A>(effects: Vec<Self::Of<A>>) -> Self::Of<Vec<A>>
    where
        Self: Sized,
        A: Send + 'static,
    {
        traversable::sequence_array_par::<Self, A>(effects)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Pointed for IdentityKind {
    #[inline]
    fn of<A>(value: A) -> A
    where
        A: Send + 'static,
    {
        value
    }
}

impl Apply for IdentityKind {
    #[inline]
    fn zip<A, B>(fa: A, fb: B) -> (A, B)
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        (fa, fb)
    }
}

impl Applicative for IdentityKind {}

impl Pointed for OptionKind {
    #[inline]
    fn of<A>(value: A) -> Option<A>
    where
        A: Send + 'static,
    {
        Some(value)
    }
}

impl Apply for OptionKind {
    #[inline]
    fn zip<A, B>(fa: Option<A>, fb: Option<B>) -> Option<(A, B)>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        fa.zip(fb)
    }
}

impl Applicative for OptionKind {
    fn all<A>(effects: Vec<Option<A>>) -> Option<Vec<A>>
    where
        A: Send + 'static,
    {
        effects.into_iter().collect()
    }
}

impl<E: Send + 'static> Pointed for ResultKind<E> {
    #[inline]
    fn of<A>(value: A) -> Result<A, E>
    where
        A: Send + 'static,
    {
        Ok(value)
    }
}

impl<E: Send + 'static> Apply for ResultKind<E> {
    #[inline]
    fn zip<A, B>(fa: Result<A, E>, fb: Result<B, E>) -> Result<(A, B), E>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        Ok((fa?, fb?))
    }
}

impl<E: Send + 'static> Applicative for ResultKind<E> {
    fn all<A>(effects: Vec<Result<A, E>>) -> Result<Vec<A>, E>
    where
        A: Send + 'static,
    {
        effects.into_iter().collect()
    }
}
