//! Alternative structure on kinds - choosing between effects.
//!
//! [`SemigroupKind`] combines two effects of the same kind by *choice*: the
//! first successful one wins. The second operand is a thunk and is only
//! built when the first one has not succeeded, so an expensive fallback
//! costs nothing on the happy path.
//!
//! [`MonoidKind`] adds the "never succeeds" effect, which is the identity of
//! that choice.
//!
//! # Laws
//!
//! ```text
//! K::combine_kind(K::empty_kind(), || x) == x
//! K::combine_kind(x, K::empty_kind)      == x
//! K::combine_kind(K::combine_kind(x, || y), || z) == K::combine_kind(x, || K::combine_kind(y, || z))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{MonoidKind, OptionKind, SemigroupKind};
//!
//! assert_eq!(OptionKind::combine_kind(None, || Some(2)), Some(2));
//! assert_eq!(OptionKind::combine_kind(Some(1), || Some(2)), Some(1));
//! assert_eq!(OptionKind::guard(false), None);
//! ```

use super::applicative::Pointed;
use super::higher::{Kind, OptionKind, ResultKind};

/// A capability for kinds where one effect can fall back to another.
pub trait SemigroupKind: Kind {
    /// Keeps `first` if it succeeds, otherwise runs the effect built by `second`.
    fn combine_kind<A, F>(first: Self::Of<A>, second: F) -> Self::Of<A>
    where
        A: Send + 'static,
        F: FnOnce() -> Self::Of<A> + Send + 'static;
}

/// A [`SemigroupKind`] with an effect that never succeeds.
pub trait MonoidKind: SemigroupKind {
    /// The identity of [`SemigroupKind::combine_kind`].
    fn empty_kind<A>() -> Self::Of<A>
    where
        A: Send + 'static;

    /// Succeeds with `()` when `condition` holds, otherwise [`MonoidKind::empty_kind`].
    #[inline]
    fn guard(condition: bool) -> Self::Of<()>
    where
        Self: Pointed,
    {
        if condition {
            Self::of(())
        } else {
            Self::empty_kind()
        }
    }

    /// Returns the first effect that succeeds, trying them from left to right.
    ///
    /// An empty vector yields [`MonoidKind::empty_kind`].
    fn combine_kind_all<A>(effects: Vec<Self::Of<A>>) -> Self::Of<A>
    where
        A: Send + 'static,
    {
        effects
            .into_iter()
            .rev()
            .fold(Self::empty_kind(), |fallback, effect| {
                Self::combine_kind(effect, move || fallback)
            })
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl SemigroupKind for OptionKind {
    #[inline]
    fn combine_kind<A, F>(first: Option<A>, second: F) -> Option<A>
    where
        A: Send + 'static,
        F: FnOnce() -> Option<A> + Send + 'static,
    {
        first.or_else(second)
    }
}

impl MonoidKind for OptionKind {
    #[inline]
    fn empty_kind<A>() -> Option<A>
    where
        A: Send + 'static,
    {
        None
    }
}

impl<E: Send + 'static> SemigroupKind for ResultKind<E> {
    #[inline]
    fn combine_kind<A, F>(first: Result<A, E>, second: F) -> Result<A, E>
    where
        A: Send + 'static,
        F: FnOnce() -> Result<A, E> + Send + 'static,
    {
        first.or_else(|_| second())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fallback_is_not_built_after_success() {
        let kept = OptionKind::combine_kind(Some(1), || -> Option<i32> {
            panic!("fallback must stay lazy")
        });
        assert_eq!(kept, Some(1));
    }

    #[rstest]
    fn result_fallback_replaces_failure() {
        let failed: Result<i32, &str> = Err("first");
        assert_eq!(ResultKind::<&str>::combine_kind(failed, || Ok(2)), Ok(2));
    }

    #[rstest]
    #[case(vec![None, Some(2), Some(3)], Some(2))]
    #[case(vec![None, None], None)]
    #[case(Vec::new(), None)]
    fn combine_kind_all_picks_first_success(
        #[case] effects: Vec<Option<i32>>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(OptionKind::combine_kind_all(effects), expected);
    }

    #[rstest]
    fn guard_maps_condition() {
        assert_eq!(OptionKind::guard(true), Some(()));
        assert_eq!(OptionKind::guard(false), None);
    }
}
