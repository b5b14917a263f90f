#![cfg(feature = "typeclass")]
//! Partitioning collections of outcomes with `Compactable` and `Filterable`.

use effectual::typeclass::{Compactable, Filterable, OptionKind, VecKind};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn separate_five_results_preserves_order() {
    let outcomes: Vec<Result<i32, &str>> = vec![Err("first"), Ok(1), Err("second"), Ok(2), Err("third")];

    let (failures, successes) = VecKind::separate(outcomes);

    assert_eq!(failures, vec!["first", "second", "third"]);
    assert_eq!(successes, vec![1, 2]);
}

#[rstest]
#[case(Some(Ok(3)), (None, Some(3)))]
#[case(Some(Err("e")), (Some("e"), None))]
#[case(None, (None, None))]
fn option_separate_routes_one_side(
    #[case] outcome: Option<Result<i32, &'static str>>,
    #[case] expected: (Option<&'static str>, Option<i32>),
) {
    assert_eq!(OptionKind::separate(outcome), expected);
}

#[rstest]
fn partition_map_splits_by_parse_outcome() {
    let (rejected, parsed) = VecKind::partition_map(vec!["1", "x", "3"], |text: &str| {
        text.parse::<i32>().map_err(|_| text.to_string())
    });
    assert_eq!(rejected, vec!["x".to_string()]);
    assert_eq!(parsed, vec![1, 3]);
}

proptest! {
    #[test]
    fn prop_separate_is_exhaustive_and_disjoint(flags in prop::collection::vec(any::<(bool, i16)>(), 0..50)) {
        let outcomes: Vec<Result<i16, i16>> = flags
            .iter()
            .map(|&(success, value)| if success { Ok(value) } else { Err(value) })
            .collect();

        let (failures, successes) = VecKind::separate(outcomes.clone());

        prop_assert_eq!(failures.len() + successes.len(), outcomes.len());
        let expected_failures: Vec<i16> = outcomes.iter().filter_map(|o| o.err()).collect();
        let expected_successes: Vec<i16> = outcomes.iter().filter_map(|o| o.ok()).collect();
        prop_assert_eq!(failures, expected_failures);
        prop_assert_eq!(successes, expected_successes);
    }

    #[test]
    fn prop_compact_keeps_present_in_order(items in prop::collection::vec(any::<Option<u8>>(), 0..50)) {
        let expected: Vec<u8> = items.iter().flatten().copied().collect();
        prop_assert_eq!(VecKind::compact(items), expected);
    }

    #[test]
    fn prop_partition_is_complementary(items in prop::collection::vec(any::<i32>(), 0..50)) {
        let (odd, even) = VecKind::partition(items.clone(), |n: &i32| n % 2 == 0);
        prop_assert!(odd.iter().all(|n| n % 2 != 0));
        prop_assert!(even.iter().all(|n| n % 2 == 0));
        prop_assert_eq!(odd.len() + even.len(), items.len());
        prop_assert_eq!(VecKind::filter(items, |n: &i32| n % 2 == 0), even);
    }
}
