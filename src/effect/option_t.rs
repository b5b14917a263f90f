//! `OptionT` - the absence-channel transformer.
//!
//! `OptionT<M, A>` wraps `M::Of<Option<A>>`: an effect of kind `M` that,
//! when run, yields either Absent or Present with an `A`. It is the
//! counterpart of [`EitherT`](super::EitherT) for computations whose only
//! failure is "nothing there".
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::OptionT;
//! use effectual::typeclass::IdentityKind;
//!
//! let found: OptionT<IdentityKind, i32> = OptionT::some(20)
//!     .filter(|n| *n > 10)
//!     .map(|n| n + 1);
//! assert_eq!(found.run(), Some(21));
//!
//! let fallback = OptionT::<IdentityKind, i32>::none().get_or_else(|| 0);
//! assert_eq!(fallback, 0);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::either_t::EitherT;
use super::io::IO;
use super::lift::FromIO;
use crate::typeclass::{
    Applicative, Apply, Chain, Functor, Kind, Monad, MonoidKind, Pointed, SemigroupKind,
};

#[cfg(feature = "async")]
use super::async_io::AsyncIO;
#[cfg(feature = "async")]
use super::lift::FromTask;

/// An effect of kind `M` yielding `Option<A>`.
///
/// # Monad Laws
///
/// With `M` a lawful monad, `OptionT<M, _>` is a lawful monad:
///
/// 1. **Left Identity**: `OptionT::some(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(OptionT::some) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct OptionT<M, A>
where
    M: Kind,
    A: Send + 'static,
{
    inner: M::Of<Option<A>>,
}

impl<M, A> OptionT<M, A>
where
    M: Kind,
    A: Send + 'static,
{
    /// Wraps an inner effect yielding an `Option`.
    #[inline]
    pub fn new(inner: M::Of<Option<A>>) -> Self {
        Self { inner }
    }

    /// Unwraps into the inner effect.
    #[inline]
    pub fn run(self) -> M::Of<Option<A>> {
        self.inner
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<M, A> OptionT<M, A>
where
    M: Pointed,
    A: Send + 'static,
{
    /// An already completed Present.
    #[inline]
    pub fn some(value: A) -> Self {
        Self::new(M::of(Some(value)))
    }

    /// An already completed Absent.
    #[inline]
    pub fn none() -> Self {
        Self::new(M::of(None))
    }

    /// Lifts a plain `Option`.
    #[inline]
    pub fn from_option(option: Option<A>) -> Self {
        Self::new(M::of(option))
    }

    /// Lifts a `Result`, discarding the error.
    #[inline]
    pub fn from_result<E>(result: Result<A, E>) -> Self {
        Self::from_option(result.ok())
    }

    /// Present with `value` when `predicate` holds, Absent otherwise.
    ///
    /// ```rust
    /// use effectual::effect::OptionT;
    /// use effectual::typeclass::IdentityKind;
    ///
    /// let odd = OptionT::<IdentityKind, i32>::from_predicate(4, |n| n % 2 == 1);
    /// assert_eq!(odd.run(), None);
    /// ```
    pub fn from_predicate<P>(value: A, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if predicate(&value) {
            Self::some(value)
        } else {
            Self::none()
        }
    }
}

impl<M, A> OptionT<M, A>
where
    M: Functor,
    A: Send + 'static,
{
    /// Treats every outcome of `effect` as Present.
    #[inline]
    pub fn from_kind(effect: M::Of<A>) -> Self {
        Self::new(M::map(effect, Some))
    }
}

// =============================================================================
// Functor Operations
// =============================================================================

impl<M, A> OptionT<M, A>
where
    M: Functor,
    A: Send + 'static,
{
    /// Transforms the Present payload.
    pub fn map<B, F>(self, function: F) -> OptionT<M, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        OptionT::new(M::map(self.inner, move |option| option.map(function)))
    }

    /// Turns a Present failing `predicate` into Absent.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool + Send + 'static,
    {
        Self::new(M::map(self.inner, move |option| option.filter(predicate)))
    }

    /// Transforms and filters the Present payload in one step.
    pub fn filter_map<B, F>(self, function: F) -> OptionT<M, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> Option<B> + Send + 'static,
    {
        OptionT::new(M::map(self.inner, move |option| option.and_then(function)))
    }

    /// Collapses both outcomes into one payload.
    pub fn fold<B, N, S>(self, on_none: N, on_some: S) -> M::Of<B>
    where
        B: Send + 'static,
        N: FnOnce() -> B + Send + 'static,
        S: FnOnce(A) -> B + Send + 'static,
    {
        M::map(self.inner, move |option| option.map_or_else(on_none, on_some))
    }

    /// The Present payload, or the value built by `on_none`.
    pub fn get_or_else<F>(self, on_none: F) -> M::Of<A>
    where
        F: FnOnce() -> A + Send + 'static,
    {
        M::map(self.inner, move |option| option.unwrap_or_else(on_none))
    }

    /// Converts Absent into a Failure built by `on_none`.
    ///
    /// ```rust
    /// use effectual::effect::OptionT;
    /// use effectual::typeclass::IdentityKind;
    ///
    /// let missing = OptionT::<IdentityKind, i32>::none().to_either(|| "missing");
    /// assert_eq!(missing.run(), Err("missing"));
    /// ```
    pub fn to_either<E, F>(self, on_none: F) -> EitherT<M, E, A>
    where
        E: Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        EitherT::new(M::map(self.inner, move |option| option.ok_or_else(on_none)))
    }
}

// =============================================================================
// Monad Operations
// =============================================================================

impl<M, A> OptionT<M, A>
where
    M: Monad,
    A: Send + 'static,
{
    /// Continues with `function` on Present; Absent skips it.
    pub fn flat_map<B, F>(self, function: F) -> OptionT<M, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> OptionT<M, B> + Send + 'static,
    {
        OptionT::new(M::flat_map(self.inner, move |option| match option {
            Some(value) => function(value).inner,
            None => M::of(None),
        }))
    }

    /// Alias for [`OptionT::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> OptionT<M, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> OptionT<M, B> + Send + 'static,
    {
        self.flat_map(function)
    }

    /// Substitutes `alternative` when Absent.
    ///
    /// `alternative` is already built; it only runs when this is Absent.
    pub fn or_else(self, alternative: Self) -> Self {
        self.catch_all(move || alternative)
    }

    /// Substitutes the computation built by `function` when Absent.
    ///
    /// `function` is only called when this is Absent.
    pub fn catch_all<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self + Send + 'static,
    {
        Self::new(M::flat_map(self.inner, move |option| match option {
            Some(value) => M::of(Some(value)),
            None => function().inner,
        }))
    }

    /// Runs a dependent computation on Present and keeps the original payload.
    ///
    /// An Absent side computation makes the result Absent.
    pub fn tap<B, F>(self, function: F) -> Self
    where
        B: Send + 'static,
        F: FnOnce(&A) -> OptionT<M, B> + Send + 'static,
    {
        self.flat_map(move |value| function(&value).map(move |_| value))
    }

    /// Runs a side computation when Absent; the result stays Absent.
    pub fn tap_error<B, F>(self, function: F) -> Self
    where
        B: Send + 'static,
        F: FnOnce() -> OptionT<M, B> + Send + 'static,
    {
        Self::new(M::flat_map(self.inner, move |option| match option {
            Some(value) => M::of(Some(value)),
            None => M::map(function().inner, |_| None),
        }))
    }

    /// Runs an effect built from whichever outcome is present.
    pub fn match_with_effect<B, N, S>(self, on_none: N, on_some: S) -> M::Of<B>
    where
        B: Send + 'static,
        N: FnOnce() -> M::Of<B> + Send + 'static,
        S: FnOnce(A) -> M::Of<B> + Send + 'static,
    {
        M::flat_map(self.inner, move |option| match option {
            Some(value) => on_some(value),
            None => on_none(),
        })
    }

    /// The Present payload, or the result of running the effect built by `on_none`.
    pub fn get_or_else_with_effect<F>(self, on_none: F) -> M::Of<A>
    where
        F: FnOnce() -> M::Of<A> + Send + 'static,
    {
        M::flat_map(self.inner, move |option| match option {
            Some(value) => M::of(value),
            None => on_none(),
        })
    }
}

impl<M, A> OptionT<M, OptionT<M, A>>
where
    M: Monad,
    A: Send + 'static,
{
    /// Removes one layer of nesting.
    pub fn flatten(self) -> OptionT<M, A> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Applicative Operations
// =============================================================================

impl<M, A> OptionT<M, A>
where
    M: Apply,
    A: Send + 'static,
{
    /// Combines two computations with `function` using the inner kind's `zip`.
    ///
    /// Both sides always run; the result is Present only if both are.
    pub fn map2<B, C, F>(self, other: OptionT<M, B>, function: F) -> OptionT<M, C>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: FnOnce(A, B) -> C + Send + 'static,
    {
        OptionT::new(M::map2(self.inner, other.inner, move |left, right| {
            left.zip(right).map(|(a, b)| function(a, b))
        }))
    }

    /// Pairs two computations. See [`OptionT::map2`].
    pub fn zip<B>(self, other: OptionT<M, B>) -> OptionT<M, (A, B)>
    where
        B: Send + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<M, A> fmt::Debug for OptionT<M, A>
where
    M: Kind,
    A: Send + 'static,
    M::Of<Option<A>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("OptionT").field(&self.inner).finish()
    }
}

impl<M, A> Clone for OptionT<M, A>
where
    M: Kind,
    A: Send + 'static,
    M::Of<Option<A>>: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<M, A> PartialEq for OptionT<M, A>
where
    M: Kind,
    A: Send + 'static,
    M::Of<Option<A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

// =============================================================================
// Kind Tag
// =============================================================================

/// Kind tag for `OptionT<M, _>`.
pub struct OptionTKind<M>(PhantomData<fn() -> M>);

impl<M: Kind> Kind for OptionTKind<M> {
    type Of<A: Send + 'static> = OptionT<M, A>;
}

impl<M: Functor> Functor for OptionTKind<M> {
    #[inline]
    fn map<A, B, F>(fa: OptionT<M, A>, function: F) -> OptionT<M, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.map(function)
    }
}

impl<M: Pointed> Pointed for OptionTKind<M> {
    #[inline]
    fn of<A>(value: A) -> OptionT<M, A>
    where
        A: Send + 'static,
    {
        OptionT::some(value)
    }
}

impl<M: Apply> Apply for OptionTKind<M> {
    #[inline]
    fn zip<A, B>(fa: OptionT<M, A>, fb: OptionT<M, B>) -> OptionT<M, (A, B)>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        fa.zip(fb)
    }
}

/// `all` runs every inner effect with `M::all`; the result is Present only
/// if every element is.
impl<M: Applicative> Applicative for OptionTKind<M> {
    fn all<A>(effects: Vec<OptionT<M, A>>) -> OptionT<M, Vec<A>>
    where
        A: Send + 'static,
    {
        let inners = effects.into_iter().map(OptionT::run).collect();
        OptionT::new(M::map(M::all(inners), |options: Vec<Option<A>>| {
            options.into_iter().collect()
        }))
    }
}

impl<M: Monad> Chain for OptionTKind<M> {
    #[inline]
    fn flat_map<A, B, F>(fa: OptionT<M, A>, function: F) -> OptionT<M, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> OptionT<M, B> + Send + 'static,
    {
        fa.flat_map(function)
    }

    /// Hands the loop to `M`; an absent step stops the inner traversal.
    fn try_traverse_in_order<A, B, X, F>(items: Vec<A>, mut function: F) -> <OptionTKind<M> as Kind>::Of<Result<Vec<B>, X>>
    where
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> <OptionTKind<M> as Kind>::Of<Result<B, X>> + Send + 'static,
    {
        let inner = M::try_traverse_in_order::<A, B, Option<X>, _>(items, move |index, item: A| {
            M::map(function(index, item).inner, |outcome: Option<Result<B, X>>| match outcome {
                Some(Ok(value)) => Ok(value),
                Some(Err(stop)) => Err(Some(stop)),
                None => Err(None),
            })
        });
        OptionT::new(M::map(inner, |outcome: Result<Vec<B>, Option<X>>| match outcome {
            Ok(values) => Some(Ok(values)),
            Err(Some(stop)) => Some(Err(stop)),
            Err(None) => None,
        }))
    }
}

impl<M: Monad> SemigroupKind for OptionTKind<M> {
    #[inline]
    fn combine_kind<A, F>(first: OptionT<M, A>, second: F) -> OptionT<M, A>
    where
        A: Send + 'static,
        F: FnOnce() -> OptionT<M, A> + Send + 'static,
    {
        first.catch_all(second)
    }
}

impl<M: Monad> MonoidKind for OptionTKind<M> {
    #[inline]
    fn empty_kind<A>() -> OptionT<M, A>
    where
        A: Send + 'static,
    {
        OptionT::none()
    }
}

impl<M: FromIO + Functor> FromIO for OptionTKind<M> {
    #[inline]
    fn from_io<A>(io: IO<A>) -> OptionT<M, A>
    where
        A: Send + 'static,
    {
        OptionT::from_kind(M::from_io(io))
    }
}

#[cfg(feature = "async")]
impl<M: FromTask + Functor> FromTask for OptionTKind<M> {
    #[inline]
    fn from_task<A>(task: AsyncIO<A>) -> OptionT<M, A>
    where
        A: Send + 'static,
    {
        OptionT::from_kind(M::from_task(task))
    }
}

static_assertions::assert_impl_all!(OptionT<super::io::IOKind, i32>: Send);
