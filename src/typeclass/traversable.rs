//! Array traversal engine.
//!
//! Applies an effect-producing function to every element of a vector and
//! aggregates the results into a single effect carrying a vector. Two
//! evaluation disciplines are provided:
//!
//! | Discipline | Capability | Element function invoked | Failure |
//! |------------|------------|--------------------------|---------|
//! | sequential | [`Monad`] | inside the continuation of the previous element | later elements are never invoked |
//! | parallel | [`Applicative`] | for every element, up front | decided by [`Applicative::all`] of the kind |
//!
//! Both disciplines share the same contract:
//!
//! - element `i` of the result is the payload produced for element `i` of
//!   the input, regardless of completion order;
//! - an empty input yields `K::of(Vec::new())` and never calls the function;
//! - a single element is mapped straight into a one-element vector.
//!
//! The sequential discipline is driven by [`Chain::try_traverse_in_order`].
//! Eager and synchronous kinds run it as a plain loop, `AsyncKind` as a loop
//! inside one future, and the transformers hand it down to their inner kind,
//! so inputs of any length run in constant stack depth on those kinds.
//!
//! Which discipline a parallel traversal actually gets is a property of the
//! kind: `AsyncKind` polls all element effects concurrently, while
//! `Sequential<AsyncKind>` runs them in order.
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{traverse_array, traverse_array_par, OptionKind, ResultKind};
//!
//! let parsed = traverse_array::<ResultKind<String>, _, _, _>(vec!["1", "2"], |text: &str| {
//!     text.parse::<i32>().map_err(|error| error.to_string())
//! });
//! assert_eq!(parsed, Ok(vec![1, 2]));
//!
//! let halves = traverse_array_par::<OptionKind, _, _, _>(vec![2, 3, 4], |n: i32| {
//!     (n % 2 == 0).then_some(n / 2)
//! });
//! assert_eq!(halves, None);
//! ```

use std::convert::Infallible;
use std::vec::IntoIter;

use super::applicative::{Applicative, Pointed};
use super::monad::{Chain, Monad};

// =============================================================================
// Sequential Discipline
// =============================================================================

/// Traverses `items` in order, passing each element's index to `function`.
///
/// The function for element `i + 1` is invoked only after the effect of
/// element `i` has completed successfully. A failure stops the traversal;
/// the remaining elements are never passed to `function`.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::{traverse_array_with_index, OptionKind};
///
/// let labelled = traverse_array_with_index::<OptionKind, _, _, _>(
///     vec!["a", "b"],
///     |index, item: &str| Some(format!("{index}:{item}")),
/// );
/// assert_eq!(labelled, Some(vec!["0:a".to_string(), "1:b".to_string()]));
/// ```
pub fn traverse_array_with_index<M, A, B, F>(mut items: Vec<A>, mut function: F) -> M::Of<Vec<B>>
where
    M: Monad,
    A: Send + 'static,
    B: Send + 'static,
    F: FnMut(usize, A) -> M::Of<B> + Send + 'static,
{
    match items.len() {
        0 => M::of(Vec::new()),
        1 => match items.pop() {
            Some(head) => M::map(function(0, head), |value: B| vec![value]),
            None => M::of(Vec::new()),
        },
        _ => in_order::<M, A, B, F>(items, function),
    }
}

/// Runs element functions that cannot fail on their own through
/// [`Chain::try_traverse_in_order`].
pub(crate) fn in_order<M, A, B, F>(items: Vec<A>, mut function: F) -> M::Of<Vec<B>>
where
    M: Chain + Pointed,
    A: Send + 'static,
    B: Send + 'static,
    F: FnMut(usize, A) -> M::Of<B> + Send + 'static,
{
    let collected = M::try_traverse_in_order::<A, B, Infallible, _>(items, move |index, item| {
        M::map(function(index, item), Ok::<B, Infallible>)
    });
    M::map(collected, |outcome: Result<Vec<B>, Infallible>| {
        let Ok(values) = outcome;
        values
    })
}

/// The default in-order loop: one `flat_map` continuation per element,
/// with a private buffer threaded through them.
pub(crate) fn chain_in_order<M, A, B, X, F>(items: Vec<A>, function: F) -> M::Of<Result<Vec<B>, X>>
where
    M: Chain + Pointed,
    A: Send + 'static,
    B: Send + 'static,
    X: Send + 'static,
    F: FnMut(usize, A) -> M::Of<Result<B, X>> + Send + 'static,
{
    let buffer = Vec::with_capacity(items.len());
    continue_in_order::<M, A, B, X, F>(items.into_iter(), 0, buffer, function)
}

fn continue_in_order<M, A, B, X, F>(
    mut remaining: IntoIter<A>,
    index: usize,
    mut buffer: Vec<B>,
    mut function: F,
) -> M::Of<Result<Vec<B>, X>>
where
    M: Chain + Pointed,
    A: Send + 'static,
    B: Send + 'static,
    X: Send + 'static,
    F: FnMut(usize, A) -> M::Of<Result<B, X>> + Send + 'static,
{
    match remaining.next() {
        None => M::of(Ok(buffer)),
        Some(item) => M::flat_map(function(index, item), move |outcome: Result<B, X>| match outcome {
            Ok(value) => {
                buffer.push(value);
                continue_in_order::<M, A, B, X, F>(remaining, index + 1, buffer, function)
            }
            Err(error) => M::of(Err(error)),
        }),
    }
}

/// Traverses `items` in order. See [`traverse_array_with_index`].
pub fn traverse_array<M, A, B, F>(items: Vec<A>, mut function: F) -> M::Of<Vec<B>>
where
    M: Monad,
    A: Send + 'static,
    B: Send + 'static,
    F: FnMut(A) -> M::Of<B> + Send + 'static,
{
    traverse_array_with_index::<M, A, B, _>(items, move |_, item| function(item))
}

/// Runs already-built effects in order and collects their payloads.
pub fn sequence_array<M, A>(effects: Vec<M::Of<A>>) -> M::Of<Vec<A>>
where
    M: Monad,
    A: Send + 'static,
{
    traverse_array::<M, M::Of<A>, A, _>(effects, |effect| effect)
}

// =============================================================================
// Parallel Discipline
// =============================================================================

/// Traverses `items` with the kind's native aggregation, passing indices.
///
/// `function` is invoked for every element before anything runs; the
/// resulting effects are handed to [`Applicative::all`]. For asynchronous
/// kinds they are started without waiting on each other, so side effects
/// may be observed in any order while the result stays index-stable.
pub fn traverse_array_with_index_par<K, A, B, F>(items: Vec<A>, mut function: F) -> K::Of<Vec<B>>
where
    K: Applicative,
    A: Send + 'static,
    B: Send + 'static,
    F: FnMut(usize, A) -> K::Of<B>,
{
    let length = items.len();
    let mut effects = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| function(index, item));
    match length {
        0 => K::of(Vec::new()),
        1 => match effects.next() {
            Some(effect) => K::map(effect, |value| vec![value]),
            None => K::of(Vec::new()),
        },
        _ => K::all(effects.collect()),
    }
}

/// Traverses `items` with the kind's native aggregation.
/// See [`traverse_array_with_index_par`].
pub fn traverse_array_par<K, A, B, F>(items: Vec<A>, mut function: F) -> K::Of<Vec<B>>
where
    K: Applicative,
    A: Send + 'static,
    B: Send + 'static,
    F: FnMut(A) -> K::Of<B>,
{
    traverse_array_with_index_par::<K, A, B, _>(items, move |_, item| function(item))
}

/// Aggregates already-built effects with the kind's native aggregation.
pub fn sequence_array_par<K, A>(effects: Vec<K::Of<A>>) -> K::Of<Vec<A>>
where
    K: Applicative,
    A: Send + 'static,
{
    traverse_array_par::<K, K::Of<A>, A, _>(effects, |effect| effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionKind, ResultKind};
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn empty_input_never_invokes_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let result = traverse_array::<OptionKind, i32, i32, _>(Vec::new(), move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            Some(n)
        });
        assert_eq!(result, Some(Vec::new()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn sequential_stops_at_first_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let result = traverse_array::<ResultKind<String>, _, _, _>(vec![1, 2, 3, 4], move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            if n == 2 { Err(format!("bad {n}")) } else { Ok(n) }
        });
        assert_eq!(result, Err("bad 2".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn parallel_invokes_every_element() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let result = traverse_array_par::<ResultKind<String>, _, _, _>(vec![1, 2, 3, 4], move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            if n % 2 == 0 { Err(format!("bad {n}")) } else { Ok(n) }
        });
        assert_eq!(result, Err("bad 2".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[rstest]
    #[case(vec![7])]
    #[case(vec![1, 2, 3])]
    fn index_correspondence_holds(#[case] items: Vec<i32>) {
        let expected: Vec<(usize, i32)> = items.iter().copied().enumerate().collect();
        let sequential = traverse_array_with_index::<OptionKind, _, _, _>(items.clone(), |i, n| {
            Some((i, n))
        });
        let parallel =
            traverse_array_with_index_par::<OptionKind, _, _, _>(items, |i, n| Some((i, n)));
        assert_eq!(sequential, Some(expected.clone()));
        assert_eq!(parallel, Some(expected));
    }

    #[rstest]
    fn sequence_collects_in_order() {
        let effects: Vec<Result<i32, ()>> = vec![Ok(3), Ok(1), Ok(2)];
        assert_eq!(sequence_array::<ResultKind<()>, _>(effects.clone()), Ok(vec![3, 1, 2]));
        assert_eq!(sequence_array_par::<ResultKind<()>, _>(effects), Ok(vec![3, 1, 2]));
    }

    #[rstest]
    fn continuation_loop_matches_native_loop() {
        let step = |index: usize, n: i32| Some(if n < 0 { Err(index) } else { Ok(n * 2) });
        for items in [vec![], vec![1, 2, 3], vec![4, -1, 6]] {
            assert_eq!(
                chain_in_order::<OptionKind, _, _, _, _>(items.clone(), step),
                OptionKind::try_traverse_in_order(items, step)
            );
        }
    }

    #[rstest]
    #[case(200_000)]
    fn long_inputs_run_in_constant_stack_depth(#[case] length: usize) {
        let items: Vec<usize> = (0..length).collect();
        let expected = items.clone();
        assert_eq!(traverse_array::<OptionKind, _, _, _>(items.clone(), Some), Some(expected.clone()));
        assert_eq!(
            sequence_array::<ResultKind<String>, _>(items.into_iter().map(Ok).collect()),
            Ok(expected)
        );
    }
}
