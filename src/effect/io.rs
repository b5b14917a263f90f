//! IO - deferred synchronous side effects.
//!
//! `IO<A>` *describes* a computation producing an `A` and possibly touching
//! the outside world. Nothing happens until [`IO::run_unsafe`] is called,
//! which should happen at the edge of the program. `IO` is one-shot: running
//! it consumes it.
//!
//! [`IOKind`] is the kind tag for `IO`, so generic code written against
//! [`Monad`](crate::typeclass::Monad) and the transformers can run over it.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::IO;
//!
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use effectual::effect::IO;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! let executed = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&executed);
//! let io = IO::new(move || {
//!     flag.store(true, Ordering::SeqCst);
//!     42
//! });
//!
//! assert!(!executed.load(Ordering::SeqCst));
//! assert_eq!(io.run_unsafe(), 42);
//! assert!(executed.load(Ordering::SeqCst));
//! ```

use std::fmt;
use std::time::Duration;

use crate::typeclass::{Applicative, Apply, Chain, Functor, Kind, Pointed};

/// A deferred synchronous computation producing an `A`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    run_io: Box<dyn FnOnce() -> A + Send>,
}

impl<A: Send + 'static> IO<A> {
    /// Wraps `action` without running it.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// An action that returns `value` and does nothing else.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Runs the action.
    ///
    /// Named `run_unsafe` because it breaks referential transparency, not
    /// because it is memory-unsafe.
    pub fn run_unsafe(self) -> A {
        (self.run_io)()
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Runs this action, then the action built from its result.
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> IO<B> + Send + 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Alias for [`IO::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> IO<B> + Send + 'static,
    {
        self.flat_map(function)
    }

    /// Runs this action, discards its result and runs `next`.
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: Send + 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Runs both actions left to right and combines their results.
    ///
    /// ```rust
    /// use effectual::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: FnOnce(A, B) -> C + Send + 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }

    /// Runs both actions left to right and pairs their results.
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: Send + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl IO<()> {
    /// An action printing `message` to standard output.
    ///
    /// ```rust,no_run
    /// use effectual::effect::IO;
    ///
    /// IO::print_line("Hello, World!").run_unsafe();
    /// ```
    pub fn print_line<S>(message: S) -> Self
    where
        S: fmt::Display + Send + 'static,
    {
        Self::new(move || println!("{message}"))
    }

    /// An action blocking the current thread for `duration`.
    ///
    /// Use [`AsyncIO::sleep`](crate::effect::AsyncIO::sleep) inside async code.
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || std::thread::sleep(duration))
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IO(<deferred>)")
    }
}

// =============================================================================
// Kind Tag
// =============================================================================

/// Kind tag for [`IO`]. Application runs left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IOKind;

impl Kind for IOKind {
    type Of<A: Send + 'static> = IO<A>;
}

impl Functor for IOKind {
    #[inline]
    fn map<A, B, F>(fa: IO<A>, function: F) -> IO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.fmap(function)
    }
}

impl Pointed for IOKind {
    #[inline]
    fn of<A>(value: A) -> IO<A>
    where
        A: Send + 'static,
    {
        IO::pure(value)
    }
}

impl Apply for IOKind {
    #[inline]
    fn zip<A, B>(fa: IO<A>, fb: IO<B>) -> IO<(A, B)>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        fa.product(fb)
    }
}

impl Applicative for IOKind {
    fn all<A>(effects: Vec<IO<A>>) -> IO<Vec<A>>
    where
        A: Send + 'static,
    {
        IO::new(move || effects.into_iter().map(IO::run_unsafe).collect())
    }
}

impl Chain for IOKind {
    #[inline]
    fn flat_map<A, B, F>(fa: IO<A>, function: F) -> IO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> IO<B> + Send + 'static,
    {
        fa.flat_map(function)
    }

    fn try_traverse_in_order<A, B, X, F>(items: Vec<A>, mut function: F) -> IO<Result<Vec<B>, X>>
    where
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> IO<Result<B, X>> + Send + 'static,
    {
        IO::new(move || {
            let mut buffer = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                match function(index, item).run_unsafe() {
                    Ok(value) => buffer.push(value),
                    Err(error) => return Err(error),
                }
            }
            Ok(buffer)
        })
    }
}

static_assertions::assert_impl_all!(IO<i32>: Send);
static_assertions::assert_impl_all!(IO<String>: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Monad;
    use rstest::rstest;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[rstest]
    fn map2_runs_left_then_right() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let (left_log, right_log) = (Arc::clone(&order), Arc::clone(&order));
        let left = IO::new(move || left_log.lock().push("left"));
        let right = IO::new(move || right_log.lock().push("right"));
        left.map2(right, |(), ()| ()).run_unsafe();
        assert_eq!(*order.lock(), vec!["left", "right"]);
    }

    #[rstest]
    fn then_discards_first_result() {
        assert_eq!(IO::pure(10).then(IO::pure("next")).run_unsafe(), "next");
    }

    #[rstest]
    fn all_collects_in_order() {
        let collected = IOKind::all(vec![IO::pure(1), IO::new(|| 2), IO::pure(3)]);
        assert_eq!(collected.run_unsafe(), vec![1, 2, 3]);
    }

    #[rstest]
    fn traversal_over_io_defers_every_element() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let traversal = IOKind::traverse_array(vec![1, 2, 3], move |n: i32| {
            let counter = Arc::clone(&counter);
            IO::new(move || {
                *counter.lock() += 1;
                n * 2
            })
        });
        assert_eq!(*calls.lock(), 0);
        assert_eq!(traversal.run_unsafe(), vec![2, 4, 6]);
        assert_eq!(*calls.lock(), 3);
    }

    #[rstest]
    fn in_order_loop_stops_running_after_failure() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let traversal = IOKind::try_traverse_in_order(vec![1, 2, 3, 4], move |index, n: i32| {
            let counter = Arc::clone(&counter);
            IO::new(move || {
                *counter.lock() += 1;
                if n == 2 { Err(index) } else { Ok(n) }
            })
        });
        assert_eq!(traversal.run_unsafe(), Err(1));
        assert_eq!(*calls.lock(), 2);
    }

    #[rstest]
    fn long_traversal_runs_in_one_frame() {
        let items: Vec<usize> = (0..150_000).collect();
        let traversal = IOKind::traverse_array(items, |n: usize| IO::new(move || n + 1));
        let values = traversal.run_unsafe();
        assert_eq!(values.len(), 150_000);
        assert_eq!(values.last(), Some(&150_000));
    }
}
