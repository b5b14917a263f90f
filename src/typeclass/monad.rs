//! Monad type class - sequencing dependent computations.
//!
//! [`Chain`] adds `flat_map` to a [`Functor`]: the continuation receives the
//! payload of the first effect and decides which effect runs next. This is
//! the only place where ordering between two effects is fixed, and the only
//! place where a failure-bearing kind can stop a computation early.
//!
//! [`Monad`] is `Applicative + Chain` and is implemented automatically for
//! every kind providing both.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! K::flat_map(K::of(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! K::flat_map(m, K::of) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! K::flat_map(K::flat_map(m, f), g) == K::flat_map(m, |x| K::flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Chain, OptionKind};
//!
//! let parsed = OptionKind::flat_map(Some("42"), |text: &str| text.parse::<i32>().ok());
//! assert_eq!(parsed, Some(42));
//! ```

use super::applicative::{Applicative, Pointed};
use super::functor::Functor;
use super::higher::{IdentityKind, Kind, OptionKind, ResultKind};
use super::traversable;

/// A capability for kinds that can sequence a dependent computation.
pub trait Chain: Functor {
    /// Runs `fa`, feeds its payload to `function` and runs the result.
    ///
    /// On a failure-bearing kind `function` is never invoked once `fa` has
    /// failed, and the failure is propagated unchanged.
    fn flat_map<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Self::Of<B> + Send + 'static;

    /// Removes one layer of nesting.
    #[inline]
    fn flatten<A>(ffa: Self::Of<Self::Of<A>>) -> Self::Of<A>
    where
        A: Send + 'static,
    {
        Self::flat_map(ffa, |inner| inner)
    }

    /// Runs a dependent effect for its side effects and keeps the original payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Chain, OptionKind};
    ///
    /// assert_eq!(OptionKind::tap(Some(3), |_| Some("ignored")), Some(3));
    /// assert_eq!(OptionKind::tap(Some(3), |_| None::<()>), None);
    /// ```
    #[inline]
    fn tap<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<A>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(&A) -> Self::Of<B> + Send + 'static,
    {
        Self::flat_map(fa, move |value: A| {
            let next = function(&value);
            Self::map(next, move |_| value)
        })
    }

    /// Runs `function` over `items` one element at a time, stopping at the
    /// first `Err` payload or the first failure of the kind itself.
    ///
    /// This is the loop behind the sequential traversal family. The default
    /// threads one `flat_map` continuation per element. Kinds whose
    /// `flat_map` runs eagerly or synchronously override it with a plain
    /// loop, so the stack depth does not grow with the input length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Chain, OptionKind};
    ///
    /// let halted = OptionKind::try_traverse_in_order(vec![1, 2, 3], |index, n: i32| {
    ///     Some(if n < 2 { Ok(index) } else { Err(format!("stopped at {n}")) })
    /// });
    /// assert_eq!(halted, Some(Err("stopped at 2".to_string())));
    /// ```
    fn try_traverse_in_order<A, B, X, F>(items: Vec<A>, function: F) -> Self::Of<Result<Vec<B>, X>>
    where
        Self: Pointed + Sized,
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> Self::Of<Result<B, X>> + Send + 'static,
    {
        traversable::chain_in_order::<Self, A, B, X, F>(items, function)
    }
}

/// A capability for kinds that are both [`Applicative`] and [`Chain`].
///
/// Implemented automatically. Besides the laws of both parents it provides
/// the sequential discipline of the array traversal engine.
pub trait Monad: Applicative + Chain {
    /// Applies `function` to every element, one after the other.
    ///
    /// See [`traversable::traverse_array`].
    fn traverse_array<A, B, F>(items: Vec<A>, function: F) -> Self::Of<Vec<B>>
    where
        Self: Sized,
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(A) -> Self::Of<B> + Send + 'static,
    {
        traversable::traverse_array::<Self, A, B, F>(items, function)
    }

    /// Like [`Monad::traverse_array`], also passing the element index.
    fn traverse_array_with_index<A, B, F>(items: Vec<A>, function: F) -> Self::Of<Vec<B>>
    where
        Self: Sized,
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(usize, A) -> Self::Of<B> + Send + 'static,
    {
        traversable::traverse_array_with_index::<Self, A, B, F>(items, function)
    }

    /// Runs already-built effects one after the other.
    fn sequence_array<A>(effects: Vec<Self::Of<A>>) -> Self::Of<Vec<A>>
    where
        Self: Sized,
        A: Send + 'static,
    {
        traversable::sequence_array::<Self, A>(effects)
    }
}

impl<K: Applicative + Chain> Monad for K {}

/// Lifts a plain value into `K` and continues with `function`.
///
/// Equivalent to `K::flat_map(K::of(value), function)`, which by left
/// identity is `function(value)`.
#[inline]
pub fn bind_pure<K, A, B, F>(value: A, function: F) -> K::Of<B>
where
    K: Pointed + Chain,
    A: Send + 'static,
    B: Send + 'static,
    F: FnOnce(A) -> K::Of<B> + Send + 'static,
{
    K::flat_map(K::of(value), function)
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Chain for IdentityKind {
    #[inline]
    fn flat_map<A, B, F>(fa: A, function: F) -> B
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        function(fa)
    }

    fn try_traverse_in_order<A, B, X, F>(items: Vec<A>, mut function: F) -> Result<Vec<B>, X>
    where
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> Result<B, X> + Send + 'static,
    {
        let mut buffer = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            buffer.push(function(index, item)?);
        }
        Ok(buffer)
    }
}

impl Chain for OptionKind {
    #[inline]
    fn flat_map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Option<B> + Send + 'static,
    {
        fa.and_then(function)
    }

    fn try_traverse_in_order<A, B, X, F>(items: Vec<A>, mut function: F) -> Option<Result<Vec<B>, X>>
    where
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> Option<Result<B, X>> + Send + 'static,
    {
        let mut buffer = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match function(index, item)? {
                Ok(value) => buffer.push(value),
                Err(error) => return Some(Err(error)),
            }
        }
        Some(Ok(buffer))
    }
}

impl<E: Send + 'static> Chain for ResultKind<E> {
    #[inline]
    fn flat_map<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Result<B, E> + Send + 'static,
    {
        fa.and_then(function)
    }

    fn try_traverse_in_order<A, B, X, F>(
        items: Vec<A>,
        mut function: F,
    ) -> <ResultKind<E> as Kind>::Of<Result<Vec<B>, X>>
    where
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> <ResultKind<E> as Kind>::Of<Result<B, X>> + Send + 'static,
    {
        let mut buffer = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match function(index, item)? {
                Ok(value) => buffer.push(value),
                Err(error) => return Ok(Err(error)),
            }
        }
        Ok(Ok(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_identity_holds_for_option() {
        let function = |n: i32| if n > 0 { Some(n * 2) } else { None };
        assert_eq!(OptionKind::flat_map(OptionKind::of(5), function), function(5));
    }

    #[rstest]
    fn result_flat_map_short_circuits() {
        let failed: Result<i32, String> = Err("stop".to_string());
        let chained = ResultKind::<String>::flat_map(failed, |_| -> Result<i32, String> {
            panic!("continuation must not run after a failure")
        });
        assert_eq!(chained, Err("stop".to_string()));
    }

    #[rstest]
    fn flatten_removes_one_layer() {
        assert_eq!(OptionKind::flatten(Some(Some(1))), Some(1));
        assert_eq!(OptionKind::flatten(Some(None::<i32>)), None);
    }

    #[rstest]
    fn bind_pure_is_function_application() {
        let result = bind_pure::<ResultKind<String>, _, _, _>(20, |n: i32| Ok(n + 1));
        assert_eq!(result, Ok(21));
    }

    #[rstest]
    #[case(Ok(Ok(vec![0, 1, 2])), vec![1, 2, 3])]
    #[case(Ok(Err("payload 5")), vec![1, 5, 9])]
    #[case(Err("kind 0"), vec![0, 5, 9])]
    fn result_in_order_loop_distinguishes_failures(
        #[case] expected: Result<Result<Vec<usize>, &'static str>, &'static str>,
        #[case] items: Vec<i32>,
    ) {
        let traversed = ResultKind::<&str>::try_traverse_in_order(items, |index, n: i32| match n {
            0 => Err("kind 0"),
            5 => Ok(Err("payload 5")),
            _ => Ok(Ok(index)),
        });
        assert_eq!(traversed, expected);
    }

    #[rstest]
    fn identity_in_order_loop_stops_at_first_err() {
        let mut seen = Vec::new();
        let traversed = IdentityKind::try_traverse_in_order(vec![3, 4, 5], move |_, n: i32| {
            seen.push(n);
            if n == 4 { Err(seen.clone()) } else { Ok(n) }
        });
        assert_eq!(traversed, Err(vec![3, 4]));
    }
}
