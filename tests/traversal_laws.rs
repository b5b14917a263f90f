#![cfg(feature = "effect")]
//! Property-based tests for the array traversal engine.
//!
//! - Index correspondence: element `i` of the output is `f(xs[i])`
//! - Empty input: yields an empty vector and never calls `f`
//! - Short circuit: the sequential discipline stops invoking `f` at the
//!   first failure
//! - Agreement: `Sequential<K>` and `K` produce the same results on pure
//!   element functions
//! - Long inputs: both disciplines handle inputs of 100,000 elements and more
//!   without growing the stack per element

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use effectual::effect::{EitherT, IO, IOEither, IOEitherKind, IOKind, IOOption, IOOptionKind};
use effectual::typeclass::{
    Applicative, Monad, OptionKind, ResultKind, Sequential, sequence_array, sequence_array_par,
    traverse_array, traverse_array_par, traverse_array_with_index, traverse_array_with_index_par,
};
use proptest::prelude::*;
use rstest::rstest;

fn checked(n: i32) -> Result<i32, String> {
    if n % 7 == 0 {
        Err(format!("{n} is a multiple of 7"))
    } else {
        Ok(n.wrapping_mul(3))
    }
}

// =============================================================================
// Index Correspondence
// =============================================================================

proptest! {
    #[test]
    fn prop_sequential_index_correspondence(items in prop::collection::vec(any::<i32>(), 0..40)) {
        let expected: Vec<i64> = items.iter().map(|n| i64::from(*n) * 2).collect();
        let traversed = traverse_array::<OptionKind, _, _, _>(items, |n: i32| Some(i64::from(n) * 2));
        prop_assert_eq!(traversed, Some(expected));
    }

    #[test]
    fn prop_parallel_index_correspondence(items in prop::collection::vec(any::<i32>(), 0..40)) {
        let expected: Vec<i64> = items.iter().map(|n| i64::from(*n) * 2).collect();
        let traversed = traverse_array_par::<OptionKind, _, _, _>(items, |n: i32| Some(i64::from(n) * 2));
        prop_assert_eq!(traversed, Some(expected));
    }

    #[test]
    fn prop_with_index_passes_position(items in prop::collection::vec(any::<u8>(), 0..40)) {
        let expected: Vec<(usize, u8)> = items.iter().copied().enumerate().collect();
        let sequential = traverse_array_with_index::<IOKind, _, _, _>(items.clone(), |index, item| {
            IO::pure((index, item))
        });
        let parallel = traverse_array_with_index_par::<IOKind, _, _, _>(items, |index, item| {
            IO::pure((index, item))
        });
        prop_assert_eq!(sequential.run_unsafe(), expected.clone());
        prop_assert_eq!(parallel.run_unsafe(), expected);
    }

    #[test]
    fn prop_sequence_matches_traverse_with_identity(items in prop::collection::vec(any::<i16>(), 0..30)) {
        let effects: Vec<Result<i16, ()>> = items.iter().copied().map(Ok).collect();
        prop_assert_eq!(sequence_array::<ResultKind<()>, _>(effects.clone()), Ok(items.clone()));
        prop_assert_eq!(sequence_array_par::<ResultKind<()>, _>(effects), Ok(items));
    }
}

// =============================================================================
// Failure Handling
// =============================================================================

proptest! {
    #[test]
    fn prop_sequential_short_circuits(items in prop::collection::vec(-50i32..50, 1..30)) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let traversed = IOEitherKind::<String>::traverse_array(items.clone(), move |n: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            IOEither::from_result(checked(n))
        });

        let outcome = traversed.run().run_unsafe();
        match items.iter().position(|n| n % 7 == 0) {
            Some(index) => {
                prop_assert_eq!(outcome, Err(format!("{} is a multiple of 7", items[index])));
                prop_assert_eq!(calls.load(Ordering::SeqCst), index + 1);
            }
            None => {
                prop_assert_eq!(outcome, items.iter().copied().map(checked).collect::<Result<Vec<_>, _>>());
                prop_assert_eq!(calls.load(Ordering::SeqCst), items.len());
            }
        }
    }

    #[test]
    fn prop_parallel_reports_lowest_index_failure(items in prop::collection::vec(-50i32..50, 1..30)) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let traversed = IOEitherKind::<String>::traverse_array_par(items.clone(), move |n: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            IOEither::from_result(checked(n))
        });

        let expected: Result<Vec<i32>, String> = items.iter().copied().map(checked).collect();
        prop_assert_eq!(traversed.run().run_unsafe(), expected);
        prop_assert_eq!(calls.load(Ordering::SeqCst), items.len());
    }
}

// =============================================================================
// Discipline Agreement
// =============================================================================

proptest! {
    #[test]
    fn prop_sequential_adapter_agrees_with_native(items in prop::collection::vec(-50i32..50, 0..30)) {
        let native = IOEitherKind::<String>::traverse_array_par(items.clone(), |n: i32| IOEither::from_result(checked(n)));
        let ordered = Sequential::<IOEitherKind<String>>::traverse_array_par(items, |n: i32| {
            IOEither::from_result(checked(n))
        });
        prop_assert_eq!(native.run().run_unsafe(), ordered.run().run_unsafe());
    }

    #[test]
    fn prop_option_t_traversal_is_absent_iff_any_element_is(items in prop::collection::vec(0u8..20, 0..30)) {
        let traversed = IOOptionKind::traverse_array_par(items.clone(), |n: u8| {
            IOOption::from_predicate(n, |n| *n != 13)
        });
        let expected = if items.contains(&13) { None } else { Some(items) };
        prop_assert_eq!(traversed.run().run_unsafe(), expected);
    }
}

// =============================================================================
// Empty Input
// =============================================================================

#[rstest]
fn empty_input_yields_empty_vector_for_both_disciplines() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (sequential_counter, parallel_counter) = (Arc::clone(&calls), Arc::clone(&calls));

    let sequential = IOEitherKind::<String>::traverse_array(Vec::<i32>::new(), move |n| {
        sequential_counter.fetch_add(1, Ordering::SeqCst);
        EitherT::right(n)
    });
    let parallel = IOEitherKind::<String>::traverse_array_par(Vec::<i32>::new(), move |n| {
        parallel_counter.fetch_add(1, Ordering::SeqCst);
        EitherT::right(n)
    });

    assert_eq!(sequential.run().run_unsafe(), Ok(Vec::new()));
    assert_eq!(parallel.run().run_unsafe(), Ok(Vec::new()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn single_element_is_wrapped_in_vector() {
    assert_eq!(
        traverse_array::<ResultKind<String>, _, _, _>(vec![4], checked),
        Ok(vec![12])
    );
    assert_eq!(
        traverse_array_par::<ResultKind<String>, _, _, _>(vec![14], checked),
        Err("14 is a multiple of 7".to_string())
    );
}

// =============================================================================
// Long Inputs
// =============================================================================

const LONG: usize = 150_000;

#[rstest]
fn long_option_traversal_in_both_disciplines() {
    let items: Vec<usize> = (0..LONG).collect();
    let sequential = traverse_array::<OptionKind, _, _, _>(items.clone(), |n: usize| Some(n + 1));
    assert_eq!(sequential.as_ref().map(Vec::len), Some(LONG));
    assert_eq!(sequential.and_then(|values| values.last().copied()), Some(LONG));

    let gapped = traverse_array::<OptionKind, _, _, _>(items.clone(), |n: usize| (n != LONG - 1).then_some(n));
    assert_eq!(gapped, None);

    let parallel = traverse_array_par::<OptionKind, _, _, _>(items, |n: usize| Some(n + 1));
    assert_eq!(parallel.map(|values| values.len()), Some(LONG));
}

#[rstest]
fn long_io_either_traversal_in_both_disciplines() {
    let items: Vec<usize> = (0..LONG).collect();
    let sequential = IOEitherKind::<String>::traverse_array(items.clone(), |n: usize| {
        IOEither::right_kind(IO::new(move || n * 2))
    });
    let values = sequential.run().run_unsafe();
    assert_eq!(values.as_ref().map(Vec::len), Ok(LONG));
    assert_eq!(values.map(|values| values[LONG - 1]), Ok((LONG - 1) * 2));

    let parallel = IOEitherKind::<String>::traverse_array_par(items, |n: usize| {
        IOEither::right_kind(IO::new(move || n * 2))
    });
    assert_eq!(parallel.run().run_unsafe().map(|values| values.len()), Ok(LONG));
}

#[rstest]
fn long_io_either_traversal_stops_at_late_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let traversal = IOEitherKind::<String>::traverse_array_with_index((0..LONG).collect(), move |index, n: usize| {
        let counter = Arc::clone(&counter);
        EitherT::new(IO::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            if index == LONG - 10 { Err(format!("element {n} failed")) } else { Ok(n) }
        }))
    });
    assert_eq!(traversal.run().run_unsafe(), Err(format!("element {} failed", LONG - 10)));
    assert_eq!(calls.load(Ordering::SeqCst), LONG - 9);
}

#[rstest]
fn long_sequence_through_sequential_adapter() {
    let effects: Vec<IOEither<String, usize>> = (0..LONG)
        .map(|n| IOEither::right_kind(IO::new(move || n)))
        .collect();
    let collected = Sequential::<IOEitherKind<String>>::sequence_array_par(effects);
    let values = collected.run().run_unsafe();
    assert_eq!(values.map(|values| values.iter().sum::<usize>()), Ok(LONG * (LONG - 1) / 2));
}

#[rstest]
fn long_sequence_over_io_option() {
    let effects: Vec<IOOption<usize>> = (0..LONG).map(IOOption::some).collect();
    let collected = sequence_array::<IOOptionKind, _>(effects);
    assert_eq!(collected.run().run_unsafe().map(|values| values.len()), Some(LONG));
}

