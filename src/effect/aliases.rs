//! Named compositions of the base effects and the transformers.
//!
//! | Alias | Expands to |
//! |-------|------------|
//! | [`IOEither<E, A>`] | `EitherT<IOKind, E, A>` |
//! | [`IOOption<A>`] | `OptionT<IOKind, A>` |
//! | [`TaskEither<E, A>`] | `EitherT<AsyncKind, E, A>` |
//! | [`TaskOption<A>`] | `OptionT<AsyncKind, A>` |
//! | [`ReaderTask<R, A>`] | `ReaderT<R, AsyncKind, A>` |
//! | [`ReaderTaskEither<R, E, A>`] | `ReaderT<R, EitherTKind<AsyncKind, E>, A>` |
//!
//! Each alias has a matching kind tag alias (`TaskEitherKind<E>`, ...) for
//! use with the generic engines. The `Task*` aliases need the `async`
//! feature.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::IOEither;
//!
//! let parsed: IOEither<String, i32> =
//!     IOEither::try_catch(|| "42".parse::<i32>(), |error| error.to_string());
//! assert_eq!(parsed.map(|n| n + 1).run().run_unsafe(), Ok(43));
//! ```

use super::either_t::{EitherT, EitherTKind};
use super::io::{IO, IOKind};
use super::option_t::{OptionT, OptionTKind};

#[cfg(feature = "async")]
use std::future::Future;
#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use super::async_io::{AsyncIO, AsyncKind};
#[cfg(feature = "async")]
use super::error::TimeoutError;
#[cfg(feature = "async")]
use super::reader::{ReaderT, ReaderTKind};

/// A synchronous computation that may fail with `E`.
pub type IOEither<E, A> = EitherT<IOKind, E, A>;
/// Kind tag for [`IOEither`].
pub type IOEitherKind<E> = EitherTKind<IOKind, E>;

/// A synchronous computation that may produce nothing.
pub type IOOption<A> = OptionT<IOKind, A>;
/// Kind tag for [`IOOption`].
pub type IOOptionKind = OptionTKind<IOKind>;

/// An asynchronous computation that may fail with `E`.
#[cfg(feature = "async")]
pub type TaskEither<E, A> = EitherT<AsyncKind, E, A>;
/// Kind tag for [`TaskEither`]. Its `zip` and `all` are concurrent.
#[cfg(feature = "async")]
pub type TaskEitherKind<E> = EitherTKind<AsyncKind, E>;

/// An asynchronous computation that may produce nothing.
#[cfg(feature = "async")]
pub type TaskOption<A> = OptionT<AsyncKind, A>;
/// Kind tag for [`TaskOption`].
#[cfg(feature = "async")]
pub type TaskOptionKind = OptionTKind<AsyncKind>;

/// An asynchronous computation reading an environment `R`.
#[cfg(feature = "async")]
pub type ReaderTask<R, A> = ReaderT<R, AsyncKind, A>;
/// Kind tag for [`ReaderTask`].
#[cfg(feature = "async")]
pub type ReaderTaskKind<R> = ReaderTKind<R, AsyncKind>;

/// An asynchronous computation reading an environment `R` that may fail with `E`.
#[cfg(feature = "async")]
pub type ReaderTaskEither<R, E, A> = ReaderT<R, EitherTKind<AsyncKind, E>, A>;
/// Kind tag for [`ReaderTaskEither`].
#[cfg(feature = "async")]
pub type ReaderTaskEitherKind<R, E> = ReaderTKind<R, EitherTKind<AsyncKind, E>>;

// =============================================================================
// IOEither
// =============================================================================

impl<E, A> EitherT<IOKind, E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Runs a fallible closure when the effect runs, mapping its error with `on_error`.
    pub fn try_catch<X, F, G>(action: F, on_error: G) -> Self
    where
        F: FnOnce() -> Result<A, X> + Send + 'static,
        G: FnOnce(X) -> E + Send + 'static,
    {
        Self::new(IO::new(move || action().map_err(on_error)))
    }
}

// =============================================================================
// TaskEither
// =============================================================================

#[cfg(feature = "async")]
impl<E, A> EitherT<AsyncKind, E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Runs a fallible future when the effect runs, mapping its error with `on_error`.
    ///
    /// ```rust
    /// use effectual::effect::TaskEither;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let failed: TaskEither<String, u8> =
    ///     TaskEither::try_catch(|| async { "300".parse::<u8>() }, |error| error.to_string());
    /// assert!(failed.run().await.is_err());
    /// # });
    /// ```
    pub fn try_catch<X, F, Fut, G>(action: F, on_error: G) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<A, X>> + Send + 'static,
        G: FnOnce(X) -> E + Send + 'static,
    {
        Self::new(AsyncIO::new(move || async move { action().await.map_err(on_error) }))
    }

    /// Lifts a synchronous [`IOEither`]; it runs when this effect is polled.
    pub fn from_io_either(io_either: IOEither<E, A>) -> Self {
        Self::new(AsyncIO::from_io(io_either.run()))
    }

    /// Converts a [`TaskOption`], building the failure with `on_none` when absent.
    pub fn from_task_option<F>(task_option: TaskOption<A>, on_none: F) -> Self
    where
        F: FnOnce() -> E + Send + 'static,
    {
        task_option.to_either(on_none)
    }

    /// Fails with the error built by `on_timeout` if this does not complete within `duration`.
    pub fn timeout<F>(self, duration: Duration, on_timeout: F) -> Self
    where
        F: FnOnce(TimeoutError) -> E + Send + 'static,
    {
        Self::new(
            self.run()
                .timeout_result(duration)
                .fmap(move |outcome| outcome.unwrap_or_else(|elapsed| Err(on_timeout(elapsed)))),
        )
    }
}

// =============================================================================
// TaskOption
// =============================================================================

#[cfg(feature = "async")]
impl<A: Send + 'static> OptionT<AsyncKind, A> {
    /// Runs a fallible future when the effect runs; an error becomes Absent.
    pub fn try_catch<X, F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<A, X>> + Send + 'static,
    {
        Self::new(AsyncIO::new(move || async move { action().await.ok() }))
    }

    /// Drops the failure of a [`TaskEither`].
    pub fn from_task_either<E: Send + 'static>(task_either: TaskEither<E, A>) -> Self {
        Self::new(task_either.run().fmap(Result::ok))
    }
}
