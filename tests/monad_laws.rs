#![cfg(feature = "effect")]
//! Property-based tests for the Monad laws of every effect instantiation.
//!
//! - Left Identity: `of(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(of) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! Each law is checked once, generically, and instantiated per kind with a
//! function that runs the effect to an observable value.

use effectual::effect::{
    EitherT, EitherTKind, IO, IOKind, OptionT, OptionTKind, Reader, ReaderTKind, State, StateKind,
    Writer, WriterKind,
};
use effectual::typeclass::{IdentityKind, Kind, Monad, OptionKind, ResultKind, Sequential};
use proptest::prelude::*;

fn left_identity<K, O, R>(value: i32, function: fn(i32) -> K::Of<i32>, observe: R) -> (O, O)
where
    K: Monad,
    R: Fn(K::Of<i32>) -> O,
{
    (observe(K::flat_map(K::of(value), function)), observe(function(value)))
}

fn right_identity<K, O, R>(effect: fn() -> K::Of<i32>, observe: R) -> (O, O)
where
    K: Monad,
    R: Fn(K::Of<i32>) -> O,
{
    (observe(K::flat_map(effect(), K::of)), observe(effect()))
}

fn associativity<K, O, R>(
    effect: fn() -> K::Of<i32>,
    first: fn(i32) -> K::Of<i32>,
    second: fn(i32) -> K::Of<i32>,
    observe: R,
) -> (O, O)
where
    K: Monad,
    R: Fn(K::Of<i32>) -> O,
{
    let left = K::flat_map(K::flat_map(effect(), first), second);
    let right = K::flat_map(effect(), move |x| K::flat_map(first(x), second));
    (observe(left), observe(right))
}

fn check_all<K, O, R>(
    value: i32,
    effect: fn() -> K::Of<i32>,
    first: fn(i32) -> K::Of<i32>,
    second: fn(i32) -> K::Of<i32>,
    observe: R,
) -> Result<(), TestCaseError>
where
    K: Monad,
    O: PartialEq + std::fmt::Debug,
    R: Fn(K::Of<i32>) -> O + Copy,
{
    let (left, right) = left_identity::<K, O, R>(value, first, observe);
    prop_assert_eq!(left, right);
    let (left, right) = right_identity::<K, O, R>(effect, observe);
    prop_assert_eq!(left, right);
    let (left, right) = associativity::<K, O, R>(effect, first, second, observe);
    prop_assert_eq!(left, right);
    Ok(())
}

fn identity<A>(value: A) -> A {
    value
}

// =============================================================================
// Standard Kinds
// =============================================================================

proptest! {
    #[test]
    fn prop_option_laws(value: i32) {
        check_all::<OptionKind, _, _>(
            value,
            || Some(3),
            |n| if n % 2 == 0 { Some(n / 2) } else { None },
            |n| Some(n.wrapping_add(1)),
            identity,
        )?;
    }

    #[test]
    fn prop_result_laws(value: i32) {
        check_all::<ResultKind<String>, _, _>(
            value,
            || Err("initial".to_string()),
            |n| if n > 0 { Ok(n.wrapping_mul(2)) } else { Err(format!("{n}")) },
            |n| Ok(n.wrapping_sub(7)),
            identity,
        )?;
    }

    #[test]
    fn prop_identity_laws(value: i32) {
        check_all::<IdentityKind, _, _>(value, || 11, |n| n.wrapping_mul(3), |n| n ^ 5, identity)?;
    }

    #[test]
    fn prop_io_laws(value: i32) {
        check_all::<IOKind, _, _>(
            value,
            || IO::new(|| 9),
            |n| IO::new(move || n.wrapping_add(4)),
            |n| IO::pure(n.wrapping_mul(-1)),
            |io: <IOKind as Kind>::Of<i32>| io.run_unsafe(),
        )?;
    }
}

// =============================================================================
// Transformers
// =============================================================================

proptest! {
    #[test]
    fn prop_either_t_laws(value: i32) {
        check_all::<EitherTKind<IOKind, String>, _, _>(
            value,
            || EitherT::right(1),
            |n| if n % 3 == 0 { EitherT::left(format!("divisible: {n}")) } else { EitherT::right(n.wrapping_add(1)) },
            |n| EitherT::right(n.wrapping_mul(2)),
            |effect: EitherT<IOKind, String, i32>| effect.run().run_unsafe(),
        )?;
    }

    #[test]
    fn prop_either_t_sequential_laws(value: i32) {
        check_all::<Sequential<EitherTKind<OptionKind, String>>, _, _>(
            value,
            || EitherT::left("start".to_string()),
            |n| EitherT::right(n.wrapping_sub(1)),
            |n| if n < 0 { EitherT::new(None) } else { EitherT::right(n) },
            EitherT::run,
        )?;
    }

    #[test]
    fn prop_option_t_laws(value: i32) {
        check_all::<OptionTKind<IOKind>, _, _>(
            value,
            || OptionT::some(8),
            |n| OptionT::from_predicate(n, |n| *n % 2 == 0),
            |n| OptionT::some(n.wrapping_add(100)),
            |effect: OptionT<IOKind, i32>| effect.run().run_unsafe(),
        )?;
    }
}

// =============================================================================
// Reader / State / Writer
// =============================================================================

proptest! {
    #[test]
    fn prop_reader_laws(value: i32, environment: i32) {
        check_all::<ReaderTKind<i32, IdentityKind>, _, _>(
            value,
            Reader::ask,
            |n| Reader::asks(move |environment: i32| n.wrapping_add(environment)),
            |n| Reader::pure(n.wrapping_mul(2)),
            move |reader: Reader<i32, i32>| reader.run(environment),
        )?;
    }

    #[test]
    fn prop_state_laws(value: i32, initial: i32) {
        check_all::<StateKind<i32>, _, _>(
            value,
            State::get,
            |n| State::new(move |state: i32| (n.wrapping_add(state), state.wrapping_add(1))),
            |n| State::put(n).then(State::pure(n)),
            move |state: State<i32, i32>| state.run(initial),
        )?;
    }

    #[test]
    fn prop_writer_laws(value: i32) {
        check_all::<WriterKind<Vec<i32>>, _, _>(
            value,
            || Writer::new(1, vec![1]),
            |n| Writer::new(n.wrapping_add(1), vec![n]),
            |n| Writer::new(n, vec![n, n]),
            Writer::run,
        )?;
    }
}
