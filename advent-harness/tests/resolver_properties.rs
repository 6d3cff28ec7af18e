//! Property-based tests for part resolution over declared tables

use advent_harness::{Answer, PartSpec, RunnerError, SolveError, resolve, resolve_all};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn noop(_: &mut ()) -> Result<Answer, SolveError> {
    Ok(Answer::new(0))
}

/// Build a table declaring the given part numbers in the given order.
fn table(numbers: &[u8]) -> Vec<PartSpec<()>> {
    numbers.iter().map(|&n| PartSpec::new(n, noop)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any set of declared part numbers, in any declaration order,
    /// `resolve_all` returns exactly one entry per number in strictly
    /// ascending order.
    #[test]
    fn resolve_all_is_ascending_and_complete(
        numbers in prop::collection::btree_set(1u8..=30, 0..8)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    ) {
        let declared: BTreeSet<u8> = numbers.iter().copied().collect();
        let specs = table(&numbers);

        let resolved: Vec<u8> = resolve_all(&specs).iter().map(|s| s.number).collect();

        prop_assert_eq!(resolved.len(), declared.len());
        prop_assert!(resolved.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(resolved.into_iter().collect::<BTreeSet<_>>(), declared);
    }

    /// `resolve` succeeds exactly for declared numbers and fails with
    /// `PartNotFound` for everything else.
    #[test]
    fn resolve_matches_declared_numbers(
        numbers in prop::collection::btree_set(1u8..=30, 0..8)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle(),
        requested in 1u8..=40
    ) {
        let specs = table(&numbers);

        match resolve(&specs, requested) {
            Ok(spec) => {
                prop_assert!(numbers.contains(&requested));
                prop_assert_eq!(spec.number, requested);
            }
            Err(RunnerError::PartNotFound(missing)) => {
                prop_assert!(!numbers.contains(&requested));
                prop_assert_eq!(missing, requested);
            }
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }
}
