//! Drives the registered solutions through the registry, the file store
//! and the validation operations, the same way the CLI does.

use advent_harness::{ExecutionTimer, RegistryBuilder};
use advent_store::FileStore;
use tempfile::TempDir;

// Link the solutions so their plugin submissions are collected.
use advent_solutions as _;

#[test]
fn plugins_are_discoverable() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let day_1 = registry.lookup(2024, 1).expect("2024 day 1 registered");
    assert_eq!(day_1.part_numbers(), vec![1, 2]);
    assert!(registry.lookup(2024, 2).is_some());
    assert!(registry.lookup(2024, 25).is_none());
}

#[test]
fn tag_filtering_selects_a_subset() {
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"grid"))
        .unwrap()
        .build();

    assert!(registry.lookup(2024, 2).is_some());
    assert!(registry.lookup(2024, 1).is_none());
}

#[test]
fn day_1_validates_against_stored_answers() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path(), 2024, 1);
    store.put_input(0, "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n").unwrap();
    store.put_answers(0, &["11", "31"]).unwrap();

    let mut timer = ExecutionTimer::new();
    let mut runner = registry.create_runner(2024, 1, &store, &mut timer).unwrap();
    assert!(runner.fully_validate_all_test_cases(false).unwrap());
}

#[test]
fn day_1_mismatch_fails_validation() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path(), 2024, 1);
    store.put_input(0, "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n").unwrap();
    store.put_answers(0, &["11", "32"]).unwrap();

    let mut timer = ExecutionTimer::new();
    let mut runner = registry.create_runner(2024, 1, &store, &mut timer).unwrap();
    assert!(!runner.validate_all_parts(0, false).unwrap());
}

#[test]
fn day_2_banner_compares_with_multiline_expectation() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path(), 2024, 2);
    store.put_input(0, "2 2\n0222112222120000\n").unwrap();
    // Only part 1 has a recorded answer; part 2 passes vacuously.
    store.put_answers(0, &["4"]).unwrap();

    let mut timer = ExecutionTimer::new();
    let mut runner = registry.create_runner(2024, 2, &store, &mut timer).unwrap();
    assert!(runner.validate_all_parts(0, false).unwrap());
}
