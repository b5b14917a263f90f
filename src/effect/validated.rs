//! Error-accumulating composition over `EitherT`.
//!
//! [`Validated<M, E>`] is a second kind tag for `EitherT<M, E, _>`. Its
//! `zip` runs both sides like [`EitherTKind`](super::EitherTKind) does, but
//! when both fail the two failures are merged with [`Semigroup::combine`]
//! instead of keeping the left one. Traversing with it reports every
//! failure rather than the first.
//!
//! `Validated` has no `Chain` instance: a dependent step cannot run once
//! its input has failed, so there would be nothing to accumulate.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::{EitherT, Validated};
//! use effectual::typeclass::{Applicative, IdentityKind};
//!
//! let checked = Validated::<IdentityKind, Vec<String>>::traverse_array_par(vec![3, -1, 7, -4], |n: i32| {
//!     if n >= 0 { EitherT::right(n) } else { EitherT::left(vec![format!("{n} is negative")]) }
//! });
//! assert_eq!(
//!     checked.run(),
//!     Err(vec!["-1 is negative".to_string(), "-4 is negative".to_string()])
//! );
//! ```

use std::marker::PhantomData;

use super::either_t::EitherT;
use crate::typeclass::{Applicative, Apply, Functor, Kind, Monad, Pointed, Semigroup, SemigroupKind};

/// Kind tag for `EitherT<M, E, _>` whose failures accumulate.
pub struct Validated<M, E>(PhantomData<fn() -> (M, E)>);

impl<M: Kind, E: Send + 'static> Kind for Validated<M, E> {
    type Of<A: Send + 'static> = EitherT<M, E, A>;
}

impl<M: Functor, E: Send + 'static> Functor for Validated<M, E> {
    #[inline]
    fn map<A, B, F>(fa: EitherT<M, E, A>, function: F) -> EitherT<M, E, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.map(function)
    }
}

impl<M: Pointed, E: Send + 'static> Pointed for Validated<M, E> {
    #[inline]
    fn of<A>(value: A) -> EitherT<M, E, A>
    where
        A: Send + 'static,
    {
        EitherT::right(value)
    }
}

impl<M: Apply, E: Semigroup + Send + 'static> Apply for Validated<M, E> {
    fn zip<A, B>(fa: EitherT<M, E, A>, fb: EitherT<M, E, B>) -> EitherT<M, E, (A, B)>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        EitherT::new(M::map2(fa.run(), fb.run(), |left: Result<A, E>, right: Result<B, E>| match (left, right) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (Err(first), Err(second)) => Err(first.combine(second)),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
        }))
    }
}

/// `all` runs every inner effect with `M::all`, then merges the failures in
/// input order, or keeps every Success when there are none.
impl<M: Applicative, E: Semigroup + Send + 'static> Applicative for Validated<M, E> {
    fn all<A>(effects: Vec<EitherT<M, E, A>>) -> EitherT<M, E, Vec<A>>
    where
        A: Send + 'static,
    {
        let inners = effects.into_iter().map(EitherT::run).collect();
        EitherT::new(M::map(M::all(inners), |results: Vec<Result<A, E>>| {
            let mut values = Vec::with_capacity(results.len());
            let mut failure: Option<E> = None;
            for result in results {
                match (result, failure.take()) {
                    (Ok(value), None) => values.push(value),
                    (Ok(_), Some(error)) => failure = Some(error),
                    (Err(error), None) => failure = Some(error),
                    (Err(error), Some(earlier)) => failure = Some(earlier.combine(error)),
                }
            }
            failure.map_or(Ok(values), Err)
        }))
    }
}

/// The first Success wins. The second computation is only built after the
/// first has failed, and when it fails too both failures are merged.
impl<M: Monad, E: Semigroup + Send + 'static> SemigroupKind for Validated<M, E> {
    fn combine_kind<A, F>(first: EitherT<M, E, A>, second: F) -> EitherT<M, E, A>
    where
        A: Send + 'static,
        F: FnOnce() -> EitherT<M, E, A> + Send + 'static,
    {
        first.or_else(move |earlier| second().map_left(move |later| earlier.combine(later)))
    }
}
