//! Reader - computations that read a shared environment.
//!
//! `ReaderT<R, M, A>` wraps a function `R -> M::Of<A>`: given an environment
//! of type `R` it builds an effect of kind `M`. [`Reader<R, A>`] is the plain
//! case over [`IdentityKind`], where running yields the value directly.
//!
//! Composition threads the environment implicitly. Combining two readers
//! with [`ReaderTKind`]'s `zip` hands each side a clone of the environment
//! and delegates to `M::zip`, so a reader over an asynchronous kind keeps
//! that kind's concurrency.
//!
//! # Laws
//!
//! - Ask Retrieval: `Reader::ask().run(r) == r`
//! - Local Identity: `m.local(|r| r) == m`
//! - Local Composition: `m.local(f).local(g) == m.local(|r| f(g(r)))`
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! let address: Reader<Config, String> = Reader::asks(|config: Config| config.host)
//!     .map2(Reader::asks(|config: Config| config.port), |host, port| format!("{host}:{port}"));
//!
//! let config = Config { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::io::IO;
use super::lift::FromIO;
use crate::typeclass::{Applicative, Apply, Chain, Functor, IdentityKind, Kind, Pointed};

#[cfg(feature = "async")]
use super::async_io::AsyncIO;
#[cfg(feature = "async")]
use super::lift::FromTask;

/// A function from an environment `R` to an effect of kind `M`.
pub struct ReaderT<R, M, A>
where
    R: Send + 'static,
    M: Kind,
    A: Send + 'static,
{
    run_function: Box<dyn FnOnce(R) -> M::Of<A> + Send>,
}

/// A reader whose result is a plain value.
pub type Reader<R, A> = ReaderT<R, IdentityKind, A>;

impl<R, M, A> ReaderT<R, M, A>
where
    R: Send + 'static,
    M: Kind,
    A: Send + 'static,
{
    /// Wraps `function` without calling it.
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(R) -> M::Of<A> + Send + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Supplies the environment.
    pub fn run(self, environment: R) -> M::Of<A> {
        (self.run_function)(environment)
    }

    /// An effect that ignores the environment.
    pub fn lift(effect: M::Of<A>) -> Self {
        Self::new(move |_| effect)
    }

    /// Runs this reader against an environment derived from an outer one.
    ///
    /// ```rust
    /// use effectual::effect::Reader;
    ///
    /// let length: Reader<String, usize> = Reader::asks(|text: String| text.len());
    /// let from_number: Reader<u32, usize> = length.local(|n: u32| n.to_string());
    /// assert_eq!(from_number.run(12345), 5);
    /// ```
    pub fn local<Outer, F>(self, modifier: F) -> ReaderT<Outer, M, A>
    where
        Outer: Send + 'static,
        F: FnOnce(Outer) -> R + Send + 'static,
    {
        ReaderT::new(move |outer| self.run(modifier(outer)))
    }
}

impl<R, M> ReaderT<R, M, R>
where
    R: Send + 'static,
    M: Pointed,
{
    /// Yields the environment itself.
    pub fn ask() -> Self {
        Self::new(M::of)
    }
}

impl<R, M, A> ReaderT<R, M, A>
where
    R: Send + 'static,
    M: Pointed,
    A: Send + 'static,
{
    /// Yields `value` whatever the environment.
    pub fn pure(value: A) -> Self {
        Self::new(move |_| M::of(value))
    }

    /// Yields a projection of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: FnOnce(R) -> A + Send + 'static,
    {
        Self::new(move |environment| M::of(projection(environment)))
    }
}

impl<R, M, A> ReaderT<R, M, A>
where
    R: Send + 'static,
    M: Functor,
    A: Send + 'static,
{
    /// Transforms the result.
    pub fn map<B, F>(self, function: F) -> ReaderT<R, M, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        ReaderT::new(move |environment| M::map(self.run(environment), function))
    }
}

impl<R, M, A> ReaderT<R, M, A>
where
    R: Clone + Send + 'static,
    M: Chain,
    A: Send + 'static,
{
    /// Runs this reader, then the reader built from its result, against the same environment.
    pub fn flat_map<B, F>(self, function: F) -> ReaderT<R, M, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> ReaderT<R, M, B> + Send + 'static,
    {
        ReaderT::new(move |environment: R| {
            let shared = environment.clone();
            M::flat_map(self.run(environment), move |value| function(value).run(shared))
        })
    }
}

impl<R, M, A> ReaderT<R, M, A>
where
    R: Clone + Send + 'static,
    M: Apply,
    A: Send + 'static,
{
    /// Combines two readers with `function` using the inner kind's `zip`.
    pub fn map2<B, C, F>(self, other: ReaderT<R, M, B>, function: F) -> ReaderT<R, M, C>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: FnOnce(A, B) -> C + Send + 'static,
    {
        ReaderT::new(move |environment: R| {
            let left = self.run(environment.clone());
            M::map2(left, other.run(environment), function)
        })
    }
}

impl<R, M, A> fmt::Debug for ReaderT<R, M, A>
where
    R: Send + 'static,
    M: Kind,
    A: Send + 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ReaderT(<function>)")
    }
}

// =============================================================================
// Kind Tag
// =============================================================================

/// Kind tag for `ReaderT<R, M, _>`.
pub struct ReaderTKind<R, M>(PhantomData<fn() -> (R, M)>);

impl<R: Send + 'static, M: Kind> Kind for ReaderTKind<R, M> {
    type Of<A: Send + 'static> = ReaderT<R, M, A>;
}

impl<R: Send + 'static, M: Functor> Functor for ReaderTKind<R, M> {
    #[inline]
    fn map<A, B, F>(fa: ReaderT<R, M, A>, function: F) -> ReaderT<R, M, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.map(function)
    }
}

impl<R: Send + 'static, M: Pointed> Pointed for ReaderTKind<R, M> {
    #[inline]
    fn of<A>(value: A) -> ReaderT<R, M, A>
    where
        A: Send + 'static,
    {
        ReaderT::pure(value)
    }
}

impl<R: Clone + Send + 'static, M: Apply> Apply for ReaderTKind<R, M> {
    fn zip<A, B>(fa: ReaderT<R, M, A>, fb: ReaderT<R, M, B>) -> ReaderT<R, M, (A, B)>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        ReaderT::new(move |environment: R| M::zip(fa.run(environment.clone()), fb.run(environment)))
    }
}

impl<R: Clone + Send + 'static, M: Applicative> Applicative for ReaderTKind<R, M> {
    fn all<A>(effects: Vec<ReaderT<R, M, A>>) -> ReaderT<R, M, Vec<A>>
    where
        A: Send + 'static,
    {
        ReaderT::new(move |environment: R| {
            M::all(
                effects
                    .into_iter()
                    .map(|reader| reader.run(environment.clone()))
                    .collect(),
            )
        })
    }
}

impl<R: Clone + Send + 'static, M: Chain + Pointed> Chain for ReaderTKind<R, M> {
    #[inline]
    fn flat_map<A, B, F>(fa: ReaderT<R, M, A>, function: F) -> ReaderT<R, M, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> ReaderT<R, M, B> + Send + 'static,
    {
        fa.flat_map(function)
    }

    fn try_traverse_in_order<A, B, X, F>(items: Vec<A>, mut function: F) -> <ReaderTKind<R, M> as Kind>::Of<Result<Vec<B>, X>>
    where
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> <ReaderTKind<R, M> as Kind>::Of<Result<B, X>> + Send + 'static,
    {
        ReaderT::new(move |environment: R| {
            M::try_traverse_in_order(items, move |index, item: A| function(index, item).run(environment.clone()))
        })
    }
}

impl<R: Send + 'static, M: FromIO> FromIO for ReaderTKind<R, M> {
    #[inline]
    fn from_io<A>(io: IO<A>) -> ReaderT<R, M, A>
    where
        A: Send + 'static,
    {
        ReaderT::lift(M::from_io(io))
    }
}

#[cfg(feature = "async")]
impl<R: Send + 'static, M: FromTask> FromTask for ReaderTKind<R, M> {
    #[inline]
    fn from_task<A>(task: AsyncIO<A>) -> ReaderT<R, M, A>
    where
        A: Send + 'static,
    {
        ReaderT::lift(M::from_task(task))
    }
}
