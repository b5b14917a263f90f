//! `EitherT` - the failure-channel transformer.
//!
//! `EitherT<M, E, A>` wraps `M::Of<Result<A, E>>`: an effect of kind `M`
//! that, when run, yields either a Failure carrying an `E` or a Success
//! carrying an `A`. Combinators thread the two outcomes through the inner
//! effect:
//!
//! - success-side combinators (`map`, `flat_map`, `tap`, ...) only run on
//!   Success and leave a Failure untouched;
//! - failure-side combinators (`map_left`, `or_else`, `tap_error`, ...) only
//!   run on Failure and leave a Success untouched.
//!
//! The inner kind decides how effects are executed. Over [`IOKind`] the
//! value is a synchronous program; over [`AsyncKind`] an asynchronous one.
//! Parallel or sequential aggregation is chosen by supplying
//! [`EitherTKind`] or [`Sequential<EitherTKind>`](crate::typeclass::Sequential).
//!
//! [`IOKind`]: super::IOKind
//! [`AsyncKind`]: super::AsyncKind
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::EitherT;
//! use effectual::typeclass::OptionKind;
//!
//! let parsed: EitherT<OptionKind, String, i32> = EitherT::right("42")
//!     .flat_map(|text: &str| EitherT::from_result(text.parse::<i32>().map_err(|e| e.to_string())))
//!     .map(|n| n + 1);
//! assert_eq!(parsed.run(), Some(Ok(43)));
//! ```
//!
//! # Resource Safety
//!
//! [`EitherT::bracket`] acquires a resource, uses it, and releases it
//! whatever the outcome of the use phase. See its documentation for the
//! exact rules.

use std::fmt;
use std::marker::PhantomData;

use super::io::IO;
use super::lift::FromIO;
use crate::typeclass::{
    Applicative, Apply, Bifunctor, Chain, Functor, Kind, Monad, Monoid, Pointed, SemigroupKind, TupleAppend,
};

#[cfg(feature = "async")]
use super::async_io::AsyncIO;
#[cfg(feature = "async")]
use super::lift::FromTask;

/// An effect of kind `M` yielding `Result<A, E>`.
///
/// # Monad Laws
///
/// With `M` a lawful monad, `EitherT<M, E, _>` is a lawful monad:
///
/// 1. **Left Identity**: `EitherT::right(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(EitherT::right) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct EitherT<M, E, A>
where
    M: Kind,
    E: Send + 'static,
    A: Send + 'static,
{
    inner: M::Of<Result<A, E>>,
}

impl<M, E, A> EitherT<M, E, A>
where
    M: Kind,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Wraps an inner effect yielding a `Result`.
    #[inline]
    pub fn new(inner: M::Of<Result<A, E>>) -> Self {
        Self { inner }
    }

    /// Unwraps into the inner effect.
    #[inline]
    pub fn run(self) -> M::Of<Result<A, E>> {
        self.inner
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<M, E, A> EitherT<M, E, A>
where
    M: Pointed,
    E: Send + 'static,
    A: Send + 'static,
{
    /// An already completed Success.
    #[inline]
    pub fn right(value: A) -> Self {
        Self::new(M::of(Ok(value)))
    }

    /// An already completed Failure.
    #[inline]
    pub fn left(error: E) -> Self {
        Self::new(M::of(Err(error)))
    }

    /// Lifts a plain `Result`.
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        Self::new(M::of(result))
    }

    /// Lifts an `Option`, building the failure with `on_none` when absent.
    ///
    /// ```rust
    /// use effectual::effect::EitherT;
    /// use effectual::typeclass::IdentityKind;
    ///
    /// let missing: EitherT<IdentityKind, &str, i32> = EitherT::from_option(None, || "missing");
    /// assert_eq!(missing.run(), Err("missing"));
    /// ```
    pub fn from_option<F>(option: Option<A>, on_none: F) -> Self
    where
        F: FnOnce() -> E,
    {
        Self::from_result(option.ok_or_else(on_none))
    }

    /// A Success when `value` satisfies `predicate`, otherwise a Failure
    /// built from it by `on_false`.
    ///
    /// ```rust
    /// use effectual::effect::EitherT;
    /// use effectual::typeclass::IdentityKind;
    ///
    /// let even = |n: i32| EitherT::<IdentityKind, String, i32>::from_predicate(n, |n| n % 2 == 0, |n| format!("{n} is odd"));
    /// assert_eq!(even(4).run(), Ok(4));
    /// assert_eq!(even(7).run(), Err("7 is odd".to_string()));
    /// ```
    pub fn from_predicate<P, F>(value: A, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(A) -> E,
    {
        if predicate(&value) {
            Self::right(value)
        } else {
            Self::left(on_false(value))
        }
    }

    /// Turns an `Option`-returning function into one returning `EitherT`.
    ///
    /// The returned function can be handed straight to the traversal engine.
    pub fn from_option_k<X, F, G>(mut function: F, mut on_none: G) -> impl FnMut(X) -> Self + Send + 'static
    where
        X: 'static,
        F: FnMut(X) -> Option<A> + Send + 'static,
        G: FnMut() -> E + Send + 'static,
    {
        move |input| Self::from_option(function(input), &mut on_none)
    }

    /// Turns a `Result`-returning function into one returning `EitherT`.
    pub fn from_result_k<X, F>(mut function: F) -> impl FnMut(X) -> Self + Send + 'static
    where
        X: 'static,
        F: FnMut(X) -> Result<A, E> + Send + 'static,
    {
        move |input| Self::from_result(function(input))
    }
}

impl<M, E> EitherT<M, E, ()>
where
    M: Pointed,
    E: Send + 'static,
{
    /// The empty scope that starts a do-notation chain.
    ///
    /// Each [`bind`](EitherT::bind) or [`bind_par`](EitherT::bind_par)
    /// appends one payload to the scope tuple.
    ///
    /// ```rust
    /// use effectual::effect::EitherT;
    /// use effectual::typeclass::IdentityKind;
    ///
    /// let total = EitherT::<IdentityKind, String, ()>::do_()
    ///     .bind(|_| EitherT::right(2))
    ///     .bind(|&(width,)| EitherT::right(width * 3))
    ///     .map(|(width, height)| width * height);
    /// assert_eq!(total.run(), Ok(12));
    /// ```
    #[inline]
    pub fn do_() -> Self {
        Self::right(())
    }
}

impl<M, E, A> EitherT<M, E, A>
where
    M: Functor,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Treats every outcome of `effect` as Success.
    #[inline]
    pub fn right_kind(effect: M::Of<A>) -> Self {
        Self::new(M::map(effect, Ok))
    }

    /// Treats every outcome of `effect` as Failure.
    #[inline]
    pub fn left_kind(effect: M::Of<E>) -> Self {
        Self::new(M::map(effect, Err))
    }
}

// =============================================================================
// Functor Operations
// =============================================================================

impl<M, E, A> EitherT<M, E, A>
where
    M: Functor,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Transforms the Success payload.
    pub fn map<B, F>(self, function: F) -> EitherT<M, E, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        EitherT::new(M::map(self.inner, move |result| result.map(function)))
    }

    /// Transforms the Failure payload.
    pub fn map_left<G, F>(self, function: F) -> EitherT<M, G, A>
    where
        G: Send + 'static,
        F: FnOnce(E) -> G + Send + 'static,
    {
        EitherT::new(M::map(self.inner, move |result| result.map_err(function)))
    }

    /// Transforms whichever payload is present.
    pub fn map_both<G, B, L, R>(self, on_left: L, on_right: R) -> EitherT<M, G, B>
    where
        G: Send + 'static,
        B: Send + 'static,
        L: FnOnce(E) -> G + Send + 'static,
        R: FnOnce(A) -> B + Send + 'static,
    {
        EitherT::new(M::map(self.inner, move |result| match result {
            Ok(value) => Ok(on_right(value)),
            Err(error) => Err(on_left(error)),
        }))
    }

    /// Exchanges the Failure and Success sides.
    pub fn swap(self) -> EitherT<M, A, E> {
        EitherT::new(M::map(self.inner, |result| match result {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        }))
    }

    /// Turns a Success failing `predicate` into a Failure built by `on_false`.
    ///
    /// ```rust
    /// use effectual::effect::EitherT;
    /// use effectual::typeclass::IdentityKind;
    ///
    /// let small: EitherT<IdentityKind, String, i32> = EitherT::right(3);
    /// let checked = small.filter_or_else(|n| *n > 5, |n| format!("{n} is too small"));
    /// assert_eq!(checked.run(), Err("3 is too small".to_string()));
    /// ```
    pub fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool + Send + 'static,
        F: FnOnce(A) -> E + Send + 'static,
    {
        Self::new(M::map(self.inner, move |result| match result {
            Ok(value) => {
                if predicate(&value) {
                    Ok(value)
                } else {
                    Err(on_false(value))
                }
            }
            Err(error) => Err(error),
        }))
    }

    /// Collapses both outcomes into one payload.
    pub fn fold<B, L, R>(self, on_left: L, on_right: R) -> M::Of<B>
    where
        B: Send + 'static,
        L: FnOnce(E) -> B + Send + 'static,
        R: FnOnce(A) -> B + Send + 'static,
    {
        M::map(self.inner, move |result| match result {
            Ok(value) => on_right(value),
            Err(error) => on_left(error),
        })
    }

    /// The Success payload, or one built from the Failure.
    pub fn get_or_else<F>(self, on_left: F) -> M::Of<A>
    where
        F: FnOnce(E) -> A + Send + 'static,
    {
        M::map(self.inner, move |result| result.unwrap_or_else(on_left))
    }

    /// Collapses the Failure into the Success type.
    ///
    /// ```rust
    /// use effectual::effect::EitherT;
    /// use effectual::typeclass::IdentityKind;
    ///
    /// let failed: EitherT<IdentityKind, u8, u32> = EitherT::left(7);
    /// assert_eq!(failed.to_union(), 7);
    /// ```
    pub fn to_union(self) -> M::Of<A>
    where
        E: Into<A>,
    {
        M::map(self.inner, |result: Result<A, E>| result.unwrap_or_else(Into::into))
    }

    /// Continues with an `Option`-returning step; `None` becomes the Failure
    /// built by `on_none`.
    pub fn flat_map_option_k<B, F, G>(self, function: F, on_none: G) -> EitherT<M, E, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> Option<B> + Send + 'static,
        G: FnOnce() -> E + Send + 'static,
    {
        EitherT::new(M::map(self.inner, move |result: Result<A, E>| {
            result.and_then(|value| function(value).ok_or_else(on_none))
        }))
    }

    /// Continues with a `Result`-returning step.
    pub fn flat_map_result_k<B, F>(self, function: F) -> EitherT<M, E, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> Result<B, E> + Send + 'static,
    {
        EitherT::new(M::map(self.inner, move |result: Result<A, E>| result.and_then(function)))
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// The left and right halves of a partitioned `EitherT`, in that order.
///
/// Both halves come out of the same run of the inner effect. A half that did
/// not receive the payload holds the `on_empty` Failure; a Failure of the
/// input appears in both halves.
pub type Partitioned<E, B, C> = (Result<B, E>, Result<C, E>);

impl<M, E, A> EitherT<M, E, A>
where
    M: Functor,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Keeps a Success satisfying `predicate`; any other Success becomes the
    /// Failure built by `on_empty`.
    pub fn filter<P, F>(self, predicate: P, on_empty: F) -> Self
    where
        P: FnOnce(&A) -> bool + Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        self.filter_or_else(predicate, move |_| on_empty())
    }

    /// Maps a Success through `function`; when it yields `None` the Failure
    /// is built from the original payload by `on_none`.
    ///
    /// ```rust
    /// use effectual::effect::EitherT;
    /// use effectual::typeclass::IdentityKind;
    ///
    /// let text: EitherT<IdentityKind, String, &str> = EitherT::right("x1");
    /// let parsed = text.filter_map(|raw| raw.parse::<i32>().ok(), |raw| format!("{raw} is not a number"));
    /// assert_eq!(parsed.run(), Err("x1 is not a number".to_string()));
    /// ```
    pub fn filter_map<B, F, G>(self, function: F, on_none: G) -> EitherT<M, E, B>
    where
        B: Send + 'static,
        F: FnOnce(&A) -> Option<B> + Send + 'static,
        G: FnOnce(A) -> E + Send + 'static,
    {
        EitherT::new(M::map(self.inner, move |result: Result<A, E>| {
            result.and_then(|value| match function(&value) {
                Some(mapped) => Ok(mapped),
                None => Err(on_none(value)),
            })
        }))
    }

    /// Routes a Success to the right half when it satisfies `predicate` and
    /// to the left half otherwise. See [`Partitioned`].
    pub fn partition<P, F>(self, predicate: P, on_empty: F) -> M::Of<Partitioned<E, A, A>>
    where
        E: Clone,
        P: FnOnce(&A) -> bool + Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        self.partition_map(
            move |value| if predicate(&value) { Ok(value) } else { Err(value) },
            on_empty,
        )
    }

    /// Routes a Success by the outcome of `function`: `Err` payloads go to
    /// the left half and `Ok` payloads to the right. See [`Partitioned`].
    ///
    /// ```rust
    /// use effectual::effect::EitherT;
    /// use effectual::typeclass::IdentityKind;
    ///
    /// let size: EitherT<IdentityKind, String, usize> = EitherT::right(12);
    /// let split = size.partition_map(
    ///     |n| if n > 10 { Ok(n) } else { Err(n) },
    ///     || "empty".to_string(),
    /// );
    /// assert_eq!(split, (Err("empty".to_string()), Ok(12)));
    /// ```
    pub fn partition_map<B, C, F, G>(self, function: F, on_empty: G) -> M::Of<Partitioned<E, B, C>>
    where
        E: Clone,
        B: Send + 'static,
        C: Send + 'static,
        F: FnOnce(A) -> Result<C, B> + Send + 'static,
        G: FnOnce() -> E + Send + 'static,
    {
        M::map(self.inner, move |result: Result<A, E>| separate_outcome(result, function, on_empty))
    }
}

impl<M, E, A> EitherT<M, E, Option<A>>
where
    M: Functor,
    E: Monoid + Send + 'static,
    A: Send + 'static,
{
    /// Drops a `None` payload, leaving the empty Failure in its place.
    pub fn compact(self) -> EitherT<M, E, A> {
        EitherT::new(M::map(self.inner, |result: Result<Option<A>, E>| {
            result.and_then(|value| value.ok_or_else(E::empty))
        }))
    }
}

impl<M, E, B, C> EitherT<M, E, Result<C, B>>
where
    M: Functor,
    E: Monoid + Clone + Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
{
    /// Splits a `Result` payload into halves, filling the half that did not
    /// receive it with the empty Failure. See [`Partitioned`].
    pub fn separate(self) -> M::Of<Partitioned<E, B, C>> {
        M::map(self.inner, |result: Result<Result<C, B>, E>| {
            separate_outcome(result, |routed| routed, E::empty)
        })
    }
}

fn separate_outcome<E, A, B, C, F, G>(result: Result<A, E>, route: F, on_empty: G) -> Partitioned<E, B, C>
where
    E: Clone,
    F: FnOnce(A) -> Result<C, B>,
    G: FnOnce() -> E,
{
    match result.map(route) {
        Ok(Ok(right)) => (Err(on_empty()), Ok(right)),
        Ok(Err(left)) => (Ok(left), Err(on_empty())),
        Err(error) => (Err(error.clone()), Err(error)),
    }
}

// =============================================================================
// Monad Operations
// =============================================================================

impl<M, E, A> EitherT<M, E, A>
where
    M: Monad,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Continues with `function` on Success; a Failure skips it.
    pub fn flat_map<B, F>(self, function: F) -> EitherT<M, E, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> EitherT<M, E, B> + Send + 'static,
    {
        EitherT::new(M::flat_map(self.inner, move |result| match result {
            Ok(value) => function(value).inner,
            Err(error) => M::of(Err(error)),
        }))
    }

    /// Alias for [`EitherT::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> EitherT<M, E, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> EitherT<M, E, B> + Send + 'static,
    {
        self.flat_map(function)
    }

    /// Recovers from a Failure with `function`; a Success skips it.
    ///
    /// The recovery may change the failure type.
    pub fn or_else<G, F>(self, function: F) -> EitherT<M, G, A>
    where
        G: Send + 'static,
        F: FnOnce(E) -> EitherT<M, G, A> + Send + 'static,
    {
        EitherT::new(M::flat_map(self.inner, move |result| match result {
            Ok(value) => M::of(Ok(value)),
            Err(error) => function(error).inner,
        }))
    }

    /// Alias for [`EitherT::or_else`].
    #[inline]
    pub fn catch_all<G, F>(self, function: F) -> EitherT<M, G, A>
    where
        G: Send + 'static,
        F: FnOnce(E) -> EitherT<M, G, A> + Send + 'static,
    {
        self.or_else(function)
    }

    /// Runs a dependent computation on Success and keeps the original payload.
    ///
    /// A Failure of the side computation becomes the result.
    pub fn tap<B, F>(self, function: F) -> Self
    where
        B: Send + 'static,
        F: FnOnce(&A) -> EitherT<M, E, B> + Send + 'static,
    {
        self.flat_map(move |value| function(&value).map(move |_| value))
    }

    /// Runs a side computation on Failure and keeps the original Failure.
    ///
    /// The outcome of the side computation is discarded whether it succeeds
    /// or fails, so control flow is unchanged. On Success `function` is
    /// never called.
    ///
    /// ```rust
    /// use effectual::effect::EitherT;
    /// use effectual::typeclass::IdentityKind;
    ///
    /// let failed: EitherT<IdentityKind, &str, i32> = EitherT::left("boom");
    /// let kept = failed.tap_error(|_| EitherT::<IdentityKind, &str, ()>::right(()));
    /// assert_eq!(kept.run(), Err("boom"));
    /// ```
    pub fn tap_error<B, F>(self, function: F) -> Self
    where
        B: Send + 'static,
        F: FnOnce(&E) -> EitherT<M, E, B> + Send + 'static,
    {
        Self::new(M::flat_map(self.inner, move |result| match result {
            Ok(value) => M::of(Ok(value)),
            Err(error) => M::map(function(&error).inner, move |_| Err(error)),
        }))
    }

    /// Runs an effect built from whichever outcome is present.
    pub fn match_with_effect<B, L, R>(self, on_left: L, on_right: R) -> M::Of<B>
    where
        B: Send + 'static,
        L: FnOnce(E) -> M::Of<B> + Send + 'static,
        R: FnOnce(A) -> M::Of<B> + Send + 'static,
    {
        M::flat_map(self.inner, move |result| match result {
            Ok(value) => on_right(value),
            Err(error) => on_left(error),
        })
    }

    /// The Success payload, or the result of running an effect built from the Failure.
    pub fn get_or_else_with_effect<F>(self, on_left: F) -> M::Of<A>
    where
        F: FnOnce(E) -> M::Of<A> + Send + 'static,
    {
        M::flat_map(self.inner, move |result| match result {
            Ok(value) => M::of(value),
            Err(error) => on_left(error),
        })
    }

    /// Acquires a resource, uses it and releases it.
    ///
    /// - If `acquire` fails, that Failure is the result; neither `use_` nor
    ///   `release` runs.
    /// - Otherwise `use_` borrows the resource, then `release` runs exactly
    ///   once with the resource and the outcome of `use_`, whether that
    ///   outcome is a Success or a Failure.
    /// - If `release` fails, its Failure is the result. Otherwise the
    ///   outcome of `use_` is the result.
    ///
    /// `use_` only borrows the resource while it builds its computation, so
    /// the computation it returns must own whatever it needs from it.
    /// `release` receives the resource by value. Under the sequential
    /// composition used here, `release` always starts after `use_` has
    /// completed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::{EitherT, IO, IOKind};
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let releases = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&releases);
    ///
    /// let program = EitherT::<IOKind, String, _>::bracket(
    ///     EitherT::right("handle".to_string()),
    ///     |_handle: &String| EitherT::<IOKind, String, i32>::left("boom".to_string()),
    ///     move |_handle, _outcome| {
    ///         EitherT::right_kind(IO::new(move || {
    ///             counter.fetch_add(1, Ordering::SeqCst);
    ///         }))
    ///     },
    /// );
    ///
    /// assert_eq!(program.run().run_unsafe(), Err("boom".to_string()));
    /// assert_eq!(releases.load(Ordering::SeqCst), 1);
    /// ```
    pub fn bracket<Res, U, R>(acquire: EitherT<M, E, Res>, use_: U, release: R) -> Self
    where
        Res: Send + 'static,
        U: FnOnce(&Res) -> Self + Send + 'static,
        R: FnOnce(Res, &Result<A, E>) -> EitherT<M, E, ()> + Send + 'static,
    {
        Self::new(M::flat_map(acquire.inner, move |acquired| match acquired {
            Err(error) => M::of(Err(error)),
            Ok(resource) => {
                let used = use_(&resource).inner;
                M::flat_map(used, move |outcome| {
                    let released = release(resource, &outcome).inner;
                    M::map(released, move |release_outcome| match release_outcome {
                        Ok(()) => outcome,
                        Err(release_error) => {
                            tracing::debug!(
                                target: "effectual",
                                use_succeeded = outcome.is_ok(),
                                "bracket release failed; its failure replaces the use result"
                            );
                            Err(release_error)
                        }
                    })
                })
            }
        }))
    }
}

impl<M, E, A> EitherT<M, E, EitherT<M, E, A>>
where
    M: Monad,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Removes one layer of nesting.
    pub fn flatten(self) -> EitherT<M, E, A> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Applicative Operations
// =============================================================================

impl<M, E, A> EitherT<M, E, A>
where
    M: Apply,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Combines two computations with `function` using the inner kind's `zip`.
    ///
    /// Both sides always run. When both fail, the left Failure wins.
    pub fn map2<B, C, F>(self, other: EitherT<M, E, B>, function: F) -> EitherT<M, E, C>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: FnOnce(A, B) -> C + Send + 'static,
    {
        EitherT::new(M::map2(self.inner, other.inner, move |left, right| {
            match (left, right) {
                (Ok(a), Ok(b)) => Ok(function(a, b)),
                (Err(error), _) | (_, Err(error)) => Err(error),
            }
        }))
    }

    /// Pairs two computations. See [`EitherT::map2`].
    pub fn zip<B>(self, other: EitherT<M, E, B>) -> EitherT<M, E, (A, B)>
    where
        B: Send + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Do Notation
// =============================================================================

impl<M, E, A> EitherT<M, E, A>
where
    M: Functor,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Starts a scope holding the payload as its only field.
    #[inline]
    pub fn tupled(self) -> EitherT<M, E, (A,)> {
        self.map(|value| (value,))
    }

    /// Starts a scope of a caller-defined shape, such as a struct whose
    /// fields later steps fill in.
    #[inline]
    pub fn bind_to<S, F>(self, wrap: F) -> EitherT<M, E, S>
    where
        S: Send + 'static,
        F: FnOnce(A) -> S + Send + 'static,
    {
        self.map(wrap)
    }
}

impl<M, E, A> EitherT<M, E, A>
where
    M: Monad,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Runs a step that may read the scope and appends its payload to it.
    ///
    /// A Failure of the step ends the chain.
    pub fn bind<B, F>(self, function: F) -> EitherT<M, E, A::Output>
    where
        A: TupleAppend<B>,
        A::Output: Send + 'static,
        B: Send + 'static,
        F: FnOnce(&A) -> EitherT<M, E, B> + Send + 'static,
    {
        self.flat_map(move |scope| function(&scope).map(move |value| scope.append(value)))
    }
}

impl<M, E, A> EitherT<M, E, A>
where
    M: Apply,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Appends the payload of an independent computation to the scope.
    ///
    /// `other` is combined with the inner kind's `zip`, so over a parallel
    /// kind it runs alongside the computation that built the scope.
    ///
    /// ```rust
    /// use effectual::effect::EitherT;
    /// use effectual::typeclass::IdentityKind;
    ///
    /// let pair = EitherT::<IdentityKind, String, ()>::do_()
    ///     .bind_par(EitherT::right('a'))
    ///     .bind_par(EitherT::right(1));
    /// assert_eq!(pair.run(), Ok(('a', 1)));
    /// ```
    pub fn bind_par<B>(self, other: EitherT<M, E, B>) -> EitherT<M, E, A::Output>
    where
        A: TupleAppend<B>,
        A::Output: Send + 'static,
        B: Send + 'static,
    {
        self.map2(other, <A as TupleAppend<B>>::append)
    }

    /// Alias for [`EitherT::bind_par`].
    #[inline]
    pub fn ap_t<B>(self, other: EitherT<M, E, B>) -> EitherT<M, E, A::Output>
    where
        A: TupleAppend<B>,
        A::Output: Send + 'static,
        B: Send + 'static,
    {
        self.bind_par(other)
    }
}

impl<M, E, A> fmt::Debug for EitherT<M, E, A>
where
    M: Kind,
    E: Send + 'static,
    A: Send + 'static,
    M::Of<Result<A, E>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("EitherT").field(&self.inner).finish()
    }
}

impl<M, E, A> Clone for EitherT<M, E, A>
where
    M: Kind,
    E: Send + 'static,
    A: Send + 'static,
    M::Of<Result<A, E>>: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<M, E, A> PartialEq for EitherT<M, E, A>
where
    M: Kind,
    E: Send + 'static,
    A: Send + 'static,
    M::Of<Result<A, E>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

// =============================================================================
// Kind Tags
// =============================================================================

/// Kind tag for `EitherT<M, E, _>`.
pub struct EitherTKind<M, E>(PhantomData<fn() -> (M, E)>);

impl<M: Kind, E: Send + 'static> Kind for EitherTKind<M, E> {
    type Of<A: Send + 'static> = EitherT<M, E, A>;
}

impl<M: Functor, E: Send + 'static> Functor for EitherTKind<M, E> {
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

impl<M: Pointed, E: Send + 'static> Pointed for EitherTKind<M, E> {
    #[inline]
    fn of<A>(value: A) -> EitherT<M, E, A>
    where
        A: Send + 'static,
    {
        EitherT::right(value)
    }
}

impl<M: Apply, E: Send + 'static> Apply for EitherTKind<M, E> {
    #[inline]
    fn zip<A, B>(fa: EitherT<M, E, A>, fb: EitherT<M, E, B>) -> EitherT<M, E, (A, B)>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        fa.zip(fb)
    }
}

/// `all` runs every inner effect with `M::all`, then reports the
/// lowest-index Failure, or every Success in input order.
impl<M: Applicative, E: Send + 'static> Applicative for EitherTKind<M, E> {
    fn all<A>(effects: Vec<EitherT<M, E, A>>) -> EitherT<M, E, Vec<A>>
    where
        A: Send + 'static,
    {
        let inners = effects.into_iter().map(EitherT::run).collect();
        EitherT::new(M::map(M::all(inners), |results: Vec<Result<A, E>>| {
            results.into_iter().collect()
        }))
    }
}

impl<M: Monad, E: Send + 'static> Chain for EitherTKind<M, E> {
    #[inline]
    fn flat_map<A, B, F>(fa: EitherT<M, E, A>, function: F) -> EitherT<M, E, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> EitherT<M, E, B> + Send + 'static,
    {
        fa.flat_map(function)
    }

    /// Hands the loop to `M`, carrying a Failure of this layer as a stop
    /// condition of the inner traversal.
    fn try_traverse_in_order<A, B, X, F>(items: Vec<A>, mut function: F) -> <EitherTKind<M, E> as Kind>::Of<Result<Vec<B>, X>>
    where
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> <EitherTKind<M, E> as Kind>::Of<Result<B, X>> + Send + 'static,
    {
        let inner = M::try_traverse_in_order::<A, B, Result<X, E>, _>(items, move |index, item: A| {
            M::map(function(index, item).inner, |outcome: Result<Result<B, X>, E>| match outcome {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(stop)) => Err(Ok(stop)),
                Err(error) => Err(Err(error)),
            })
        });
        EitherT::new(M::map(inner, |outcome: Result<Vec<B>, Result<X, E>>| match outcome {
            Ok(values) => Ok(Ok(values)),
            Err(Ok(stop)) => Ok(Err(stop)),
            Err(Err(error)) => Err(error),
        }))
    }
}

/// The first Success wins; the second computation is only built after the
/// first one has failed.
impl<M: Monad, E: Send + 'static> SemigroupKind for EitherTKind<M, E> {
    fn combine_kind<A, F>(first: EitherT<M, E, A>, second: F) -> EitherT<M, E, A>
    where
        A: Send + 'static,
        F: FnOnce() -> EitherT<M, E, A> + Send + 'static,
    {
        first.or_else(move |_| second())
    }
}

impl<M, E> FromIO for EitherTKind<M, E>
where
    M: FromIO + Functor,
    E: Send + 'static,
{
    #[inline]
    fn from_io<A>(io: IO<A>) -> EitherT<M, E, A>
    where
        A: Send + 'static,
    {
        EitherT::right_kind(M::from_io(io))
    }
}

#[cfg(feature = "async")]
impl<M, E> FromTask for EitherTKind<M, E>
where
    M: FromTask + Functor,
    E: Send + 'static,
{
    #[inline]
    fn from_task<A>(task: AsyncIO<A>) -> EitherT<M, E, A>
    where
        A: Send + 'static,
    {
        EitherT::right_kind(M::from_task(task))
    }
}

/// Bifunctor tag for `EitherT<M, _, _>`.
pub struct EitherTBifunctor<M>(PhantomData<fn() -> M>);

impl<M: Functor> Bifunctor for EitherTBifunctor<M> {
    type Of<E: Send + 'static, A: Send + 'static> = EitherT<M, E, A>;

    #[inline]
    fn map_both<E, A, G, B, L, R>(fea: EitherT<M, E, A>, on_left: L, on_right: R) -> EitherT<M, G, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        G: Send + 'static,
        B: Send + 'static,
        L: FnOnce(E) -> G + Send + 'static,
        R: FnOnce(A) -> B + Send + 'static,
    {
        fea.map_both(on_left, on_right)
    }
}

static_assertions::assert_impl_all!(EitherT<super::io::IOKind, String, i32>: Send);
