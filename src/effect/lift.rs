//! Lifting synchronous and asynchronous computations into other kinds.
//!
//! [`FromIO`] embeds an [`IO`] into any kind that can run one, and
//! [`FromTask`] does the same for [`AsyncIO`]. The transformers implement
//! both whenever their inner kind does, so a value built from `IO` can be
//! used directly inside an `EitherT` over `AsyncIO`.
//!
//! # Logging
//!
//! [`FromIO::log`] and [`FromIO::log_error`] emit a `tracing` event with
//! target `effectual` when the returned effect *runs*. Building the effect
//! logs nothing.
//!
//! ```rust
//! use effectual::effect::{FromIO, IOKind};
//!
//! let announce = IOKind::log("starting");
//! // nothing has been logged yet
//! announce.run_unsafe();
//! ```

#[cfg(feature = "async")]
use std::time::Duration;

use super::io::{IO, IOKind};
use crate::typeclass::{Kind, Sequential};

#[cfg(feature = "async")]
use super::async_io::{AsyncIO, AsyncKind};
#[cfg(feature = "async")]
use crate::typeclass::Chain;

/// A capability for kinds that can run a synchronous [`IO`].
pub trait FromIO: Kind {
    /// Embeds `io`; it runs when the resulting effect runs.
    fn from_io<A>(io: IO<A>) -> Self::Of<A>
    where
        A: Send + 'static;

    /// An effect emitting `message` at `INFO` level when run.
    fn log<S>(message: S) -> Self::Of<()>
    where
        S: Into<String>,
    {
        let message = message.into();
        Self::from_io(IO::new(move || {
            tracing::info!(target: "effectual", "{message}");
        }))
    }

    /// An effect emitting `message` at `ERROR` level when run.
    fn log_error<S>(message: S) -> Self::Of<()>
    where
        S: Into<String>,
    {
        let message = message.into();
        Self::from_io(IO::new(move || {
            tracing::error!(target: "effectual", "{message}");
        }))
    }
}

/// A capability for kinds that can run an [`AsyncIO`].
#[cfg(feature = "async")]
pub trait FromTask: FromIO {
    /// Embeds `task`; it runs when the resulting effect runs.
    fn from_task<A>(task: AsyncIO<A>) -> Self::Of<A>
    where
        A: Send + 'static;

    /// An effect that completes after `duration`.
    fn sleep(duration: Duration) -> Self::Of<()> {
        Self::from_task(AsyncIO::sleep(duration))
    }

    /// Waits `duration`, then runs `fa`.
    fn delay<A>(fa: Self::Of<A>, duration: Duration) -> Self::Of<A>
    where
        Self: Chain,
        A: Send + 'static,
    {
        Self::flat_map(Self::sleep(duration), move |()| fa)
    }
}

impl FromIO for IOKind {
    #[inline]
    fn from_io<A>(io: IO<A>) -> IO<A>
    where
        A: Send + 'static,
    {
        io
    }
}

#[cfg(feature = "async")]
impl FromIO for AsyncKind {
    #[inline]
    fn from_io<A>(io: IO<A>) -> AsyncIO<A>
    where
        A: Send + 'static,
    {
        AsyncIO::from_io(io)
    }
}

#[cfg(feature = "async")]
impl FromTask for AsyncKind {
    #[inline]
    fn from_task<A>(task: AsyncIO<A>) -> AsyncIO<A>
    where
        A: Send + 'static,
    {
        task
    }
}

impl<K: FromIO> FromIO for Sequential<K> {
    #[inline]
    fn from_io<A>(io: IO<A>) -> K::Of<A>
    where
        A: Send + 'static,
    {
        K::from_io(io)
    }
}

#[cfg(feature = "async")]
impl<K: FromTask> FromTask for Sequential<K> {
    #[inline]
    fn from_task<A>(task: AsyncIO<A>) -> K::Of<A>
    where
        A: Send + 'static,
    {
        K::from_task(task)
    }
}
