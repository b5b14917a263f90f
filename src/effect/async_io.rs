//! `AsyncIO` - deferred asynchronous side effects.
//!
//! `AsyncIO<A>` describes an asynchronous computation producing an `A`.
//! Nothing runs until the value is awaited; `AsyncIO` implements [`Future`]
//! directly through `pin_project_lite`, so `.await` is the way to run it.
//!
//! # Evaluation Semantics
//!
//! | Constructor | When the work happens |
//! |-------------|-----------------------|
//! | `AsyncIO::pure(value)` | already done; `fmap` on it applies the function immediately |
//! | `AsyncIO::new(\|\| async { .. })` | on first poll |
//! | `AsyncIO::from_future(fut)` | on first poll |
//!
//! `flat_map` always defers its continuation to run time, even over a pure
//! value, so a continuation that performs side effects is never run while
//! a pipeline is being built.
//!
//! # Concurrency
//!
//! [`AsyncIO::par`] and [`AsyncIO::par_all`] poll their operands concurrently
//! on the awaiting task (`tokio::join!` / `join_all`); no task is spawned and
//! no thread is used. Results are positional whatever order the operands
//! complete in. [`AsyncKind`] uses these for `zip` and `all`, which makes it
//! the parallel discipline; `Sequential<AsyncKind>` is the sequential one.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::AsyncIO;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let answer = AsyncIO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| AsyncIO::new(move || async move { x + 1 }));
//! assert_eq!(answer.await, 21);
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use pin_project_lite::pin_project;

use super::error::TimeoutError;
use super::io::IO;
use crate::typeclass::{Applicative, Apply, Chain, Functor, Kind, Pointed};

type BoxedFuture<A> = Pin<Box<dyn Future<Output = A> + Send>>;
type Thunk<A> = Box<dyn FnOnce() -> BoxedFuture<A> + Send>;

pin_project! {
    /// A deferred asynchronous computation producing an `A`.
    ///
    /// # Monad Laws
    ///
    /// 1. **Left Identity**: `AsyncIO::pure(a).flat_map(f) == f(a)`
    /// 2. **Right Identity**: `m.flat_map(AsyncIO::pure) == m`
    /// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
    pub struct AsyncIO<A> {
        #[pin]
        state: AsyncIOState<A>,
    }
}

pin_project! {
    /// Lifecycle of an `AsyncIO`.
    ///
    /// `Defer` becomes `Running` on first poll; `Pure` and `Running` become
    /// `Completed` once they yield their value.
    #[project = AsyncIOStateProj]
    enum AsyncIOState<A> {
        Pure {
            value: Option<A>,
        },
        Defer {
            thunk: Option<Thunk<A>>,
        },
        Running {
            #[pin]
            future: BoxedFuture<A>,
        },
        Completed,
    }
}

impl<A> Future for AsyncIO<A> {
    type Output = A;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<A> {
        let mut this = self.project();
        loop {
            match this.state.as_mut().project() {
                AsyncIOStateProj::Pure { value } => {
                    let Some(result) = value.take() else {
                        panic!("AsyncIO polled after completion");
                    };
                    this.state.set(AsyncIOState::Completed);
                    return Poll::Ready(result);
                }
                AsyncIOStateProj::Defer { thunk } => {
                    let Some(thunk) = thunk.take() else {
                        panic!("AsyncIO deferred thunk already consumed");
                    };
                    this.state.set(AsyncIOState::Running { future: thunk() });
                }
                AsyncIOStateProj::Running { future } => {
                    let Poll::Ready(result) = future.poll(context) else {
                        return Poll::Pending;
                    };
                    this.state.set(AsyncIOState::Completed);
                    return Poll::Ready(result);
                }
                AsyncIOStateProj::Completed => panic!("AsyncIO polled after completion"),
            }
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: Send + 'static> AsyncIO<A> {
    /// Wraps an async closure; it is called on first poll.
    ///
    /// ```rust
    /// use effectual::effect::AsyncIO;
    /// use std::time::Duration;
    ///
    /// let slow = AsyncIO::new(|| async {
    ///     tokio::time::sleep(Duration::from_millis(5)).await;
    ///     42
    /// });
    /// # drop(slow);
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            state: AsyncIOState::Defer {
                thunk: Some(Box::new(move || Box::pin(action()))),
            },
        }
    }

    /// Wraps a future that has not been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            state: AsyncIOState::Defer {
                thunk: Some(Box::new(move || Box::pin(future))),
            },
        }
    }

    /// An already completed computation.
    pub const fn pure(value: A) -> Self {
        Self {
            state: AsyncIOState::Pure { value: Some(value) },
        }
    }

    /// Runs a synchronous `IO` when this value is polled.
    pub fn from_io(io: IO<A>) -> Self {
        Self::new(move || async move { io.run_unsafe() })
    }

    fn into_pure(self) -> Result<A, Self> {
        match self {
            Self {
                state: AsyncIOState::Pure { value: Some(value) },
            } => Ok(value),
            other => Err(other),
        }
    }
}

// =============================================================================
// Functor / Monad Operations
// =============================================================================

impl<A: Send + 'static> AsyncIO<A> {
    /// Transforms the result.
    ///
    /// Over a pure value the function is applied immediately.
    pub fn fmap<B, F>(self, function: F) -> AsyncIO<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        match self.into_pure() {
            Ok(value) => AsyncIO::pure(function(value)),
            Err(deferred) => AsyncIO::new(move || async move { function(deferred.await) }),
        }
    }

    /// Runs this computation, then the one built from its result.
    pub fn flat_map<B, F>(self, function: F) -> AsyncIO<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> AsyncIO<B> + Send + 'static,
    {
        AsyncIO::new(move || async move { function(self.await).await })
    }

    /// Alias for [`AsyncIO::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> AsyncIO<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> AsyncIO<B> + Send + 'static,
    {
        self.flat_map(function)
    }

    /// Runs this computation, discards its result and runs `next`.
    pub fn then<B>(self, next: AsyncIO<B>) -> AsyncIO<B>
    where
        B: Send + 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Runs `self` to completion, then `other`, and combines the results.
    ///
    /// Use [`AsyncIO::par`] to run both at once.
    pub fn map2<B, C, F>(self, other: AsyncIO<B>, function: F) -> AsyncIO<C>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: FnOnce(A, B) -> C + Send + 'static,
    {
        AsyncIO::new(move || async move {
            let first = self.await;
            let second = other.await;
            function(first, second)
        })
    }

    /// Sequential pairing. See [`AsyncIO::map2`].
    pub fn product<B>(self, other: AsyncIO<B>) -> AsyncIO<(A, B)>
    where
        B: Send + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Concurrency
// =============================================================================

impl<A: Send + 'static> AsyncIO<A> {
    /// Polls both computations concurrently and pairs their results.
    ///
    /// ```rust
    /// use effectual::effect::AsyncIO;
    /// use std::time::Duration;
    ///
    /// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
    /// let slow = AsyncIO::pure("slow").delay(Duration::from_millis(20));
    /// let fast = AsyncIO::pure("fast").delay(Duration::from_millis(10));
    /// assert_eq!(slow.par(fast).await, ("slow", "fast"));
    /// # });
    /// ```
    pub fn par<B>(self, other: AsyncIO<B>) -> AsyncIO<(A, B)>
    where
        B: Send + 'static,
    {
        AsyncIO::new(move || async move { tokio::join!(self, other) })
    }

    /// Polls every computation concurrently; element `i` of the result
    /// comes from `effects[i]`.
    pub fn par_all(effects: Vec<Self>) -> AsyncIO<Vec<A>> {
        if effects.is_empty() {
            return AsyncIO::pure(Vec::new());
        }
        AsyncIO::new(move || futures::future::join_all(effects))
    }
}

// =============================================================================
// Time
// =============================================================================

impl AsyncIO<()> {
    /// Completes after `duration` without blocking the thread.
    pub fn sleep(duration: Duration) -> Self {
        Self::new(move || tokio::time::sleep(duration))
    }
}

impl<A: Send + 'static> AsyncIO<A> {
    /// Waits `duration`, then runs `self`.
    pub fn delay(self, duration: Duration) -> Self {
        AsyncIO::sleep(duration).then(self)
    }

    /// `Some(result)` if `self` completes within `duration`, otherwise `None`.
    pub fn timeout(self, duration: Duration) -> AsyncIO<Option<A>> {
        AsyncIO::new(move || async move { tokio::time::timeout(duration, self).await.ok() })
    }

    /// Like [`AsyncIO::timeout`], reporting the exceeded duration.
    pub fn timeout_result(self, duration: Duration) -> AsyncIO<Result<A, TimeoutError>> {
        AsyncIO::new(move || async move {
            tokio::time::timeout(duration, self)
                .await
                .map_err(|_| TimeoutError { duration })
        })
    }

    /// Converts into a blocking `IO` that drives `self` on a private
    /// current-thread runtime.
    ///
    /// Running the returned `IO` from inside an async context panics, as
    /// with any nested `block_on`.
    pub fn to_sync(self) -> IO<io::Result<A>> {
        IO::new(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            Ok(runtime.block_on(self))
        })
    }
}

impl<A> fmt::Debug for AsyncIO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("AsyncIO(<deferred>)")
    }
}

// =============================================================================
// Kind Tag
// =============================================================================

/// Kind tag for [`AsyncIO`].
///
/// `zip` and `all` poll their operands concurrently. Wrap in
/// [`Sequential`](crate::typeclass::Sequential) for left-to-right execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsyncKind;

impl Kind for AsyncKind {
    type Of<A: Send + 'static> = AsyncIO<A>;
}

impl Functor for AsyncKind {
    #[inline]
    fn map<A, B, F>(fa: AsyncIO<A>, function: F) -> AsyncIO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.fmap(function)
    }
}

impl Pointed for AsyncKind {
    #[inline]
    fn of<A>(value: A) -> AsyncIO<A>
    where
        A: Send + 'static,
    {
        AsyncIO::pure(value)
    }
}

impl Apply for AsyncKind {
    #[inline]
    fn zip<A, B>(fa: AsyncIO<A>, fb: AsyncIO<B>) -> AsyncIO<(A, B)>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        fa.par(fb)
    }
}

impl Applicative for AsyncKind {
    #[inline]
    fn all<A>(effects: Vec<AsyncIO<A>>) -> AsyncIO<Vec<A>>
    where
        A: Send + 'static,
    {
        AsyncIO::par_all(effects)
    }
}

impl Chain for AsyncKind {
    #[inline]
    fn flat_map<A, B, F>(fa: AsyncIO<A>, function: F) -> AsyncIO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> AsyncIO<B> + Send + 'static,
    {
        fa.flat_map(function)
    }

    /// Awaits each step inside one future, so the depth of the poll stack
    /// does not grow with the input.
    fn try_traverse_in_order<A, B, X, F>(items: Vec<A>, mut function: F) -> AsyncIO<Result<Vec<B>, X>>
    where
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> AsyncIO<Result<B, X>> + Send + 'static,
    {
        AsyncIO::new(move || async move {
            let mut buffer = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                match function(index, item).await {
                    Ok(value) => buffer.push(value),
                    Err(error) => return Err(error),
                }
            }
            Ok(buffer)
        })
    }
}

static_assertions::assert_impl_all!(AsyncIO<i32>: Send);
