//! The `Sequential` adapter - forcing left-to-right application.
//!
//! Every kind carries its own notion of application. For synchronous kinds
//! that is already left to right; for asynchronous kinds [`Apply::zip`]
//! starts both sides at once. `Sequential<K>` has exactly the same effect
//! type as `K` but derives `zip` from [`Chain::flat_map`], so the right side
//! is only started after the left side has completed.
//!
//! Choosing the discipline is therefore choosing which tag to supply:
//!
//! ```text
//! combine_lifted::<AsyncKind>(a, b)              // a and b run concurrently
//! combine_lifted::<Sequential<AsyncKind>>(a, b)  // a runs, then b runs
//! ```
//!
//! Results are identical under both disciplines for effects without side
//! effects; only the interleaving of side effects differs. A failure on the
//! left side under `Sequential` means the right side is never started.
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Apply, ResultKind, Sequential};
//!
//! type Ordered = Sequential<ResultKind<String>>;
//!
//! let summed = Ordered::map2(Ok(1), Ok(2), |x: i32, y: i32| x + y);
//! assert_eq!(summed, Ok(3));
//! ```

use std::marker::PhantomData;

use super::alternative::{MonoidKind, SemigroupKind};
use super::applicative::{Applicative, Apply, Pointed};
use super::functor::Functor;
use super::higher::Kind;
use super::monad::Chain;
use super::traversable;

/// Tag adapter with the effect type of `K` and sequential application.
pub struct Sequential<K>(PhantomData<fn() -> K>);

impl<K: Kind> Kind for Sequential<K> {
    type Of<A: Send + 'static> = K::Of<A>;
}

impl<K: Functor> Functor for Sequential<K> {
    #[inline]
    fn map<A, B, F>(fa: K::Of<A>, function: F) -> K::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        K::map(fa, function)
    }
}

impl<K: Pointed> Pointed for Sequential<K> {
    #[inline]
    fn of<A>(value: A) -> K::Of<A>
    where
        A: Send + 'static,
    {
        K::of(value)
    }
}

impl<K: Chain> Apply for Sequential<K> {
    fn zip<A, B>(fa: K::Of<A>, fb: K::Of<B>) -> K::Of<(A, B)>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        K::flat_map(fa, move |left| K::map(fb, move |right| (left, right)))
    }
}

/// `all` runs the effects one after another through `K`'s in-order loop,
/// stopping at the first failure.
impl<K: Chain + Pointed> Applicative for Sequential<K> {
    fn all<A>(effects: Vec<K::Of<A>>) -> K::Of<Vec<A>>
    where
        A: Send + 'static,
    {
        traversable::in_order::<K, K::Of<A>, A, _>(effects, |_, effect: K::Of<A>| effect)
    }
}

impl<K: Chain + Pointed> Chain for Sequential<K> {
    #[inline]
    fn flat_map<A, B, F>(fa: K::Of<A>, function: F) -> K::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> K::Of<B> + Send + 'static,
    {
        K::flat_map(fa, function)
    }

    #[inline]
    fn try_traverse_in_order<A, B, X, F>(items: Vec<A>, function: F) -> <Sequential<K> as Kind>::Of<Result<Vec<B>, X>>
    where
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> <Sequential<K> as Kind>::Of<Result<B, X>> + Send + 'static,
    {
        K::try_traverse_in_order(items, function)
    }
}

impl<K: SemigroupKind> SemigroupKind for Sequential<K> {
    #[inline]
    fn combine_kind<A, F>(first: K::Of<A>, second: F) -> K::Of<A>
    where
        A: Send + 'static,
        F: FnOnce() -> K::Of<A> + Send + 'static,
    {
        K::combine_kind(first, second)
    }
}

impl<K: MonoidKind> MonoidKind for Sequential<K> {
    #[inline]
    fn empty_kind<A>() -> K::Of<A>
    where
        A: Send + 'static,
    {
        K::empty_kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionKind, ResultKind};
    use rstest::rstest;

    #[rstest]
    fn sequential_zip_matches_native_zip_on_values() {
        assert_eq!(
            Sequential::<OptionKind>::zip(Some(1), Some('a')),
            OptionKind::zip(Some(1), Some('a'))
        );
    }

    #[rstest]
    fn sequential_all_keeps_index_order() {
        let collected = Sequential::<ResultKind<()>>::all(vec![Ok(2), Ok(0), Ok(1)]);
        assert_eq!(collected, Ok(vec![2, 0, 1]));
    }

    #[rstest]
    fn sequential_all_returns_first_failure() {
        let collected = Sequential::<ResultKind<&str>>::all(vec![Ok(1), Err("x"), Err("y")]);
        assert_eq!(collected, Err("x"));
    }

    #[rstest]
    fn sequential_all_over_long_input() {
        let effects: Vec<Option<usize>> = (0..200_000).map(Some).collect();
        let collected = Sequential::<OptionKind>::all(effects);
        assert_eq!(collected.map(|values| values[199_999]), Some(199_999));
    }
}
