//! End-to-end behavior of the puzzle runner: load-before-solve ordering,
//! lazy input loading, validation verdicts and short-circuiting.

use advent_harness::{
    Answer, ExecutionTimer, MemoryStore, ParseError, PartSpec, Puzzle, PuzzleRunner, RunnerError,
    SolveError, StoreError,
};
use std::sync::atomic::{AtomicUsize, Ordering};

// Each fixture's counters are touched by exactly one test; tests run in
// parallel within this binary.

struct CountingLoad;

static LOAD_CALLS: AtomicUsize = AtomicUsize::new(0);

impl Puzzle for CountingLoad {
    type State = String;

    const PARTS: &'static [PartSpec<Self::State>] =
        &[PartSpec::new(1, |state| Ok(Answer::new(state.len())))];

    fn load(input: &str) -> Result<Self::State, ParseError> {
        LOAD_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(input.to_string())
    }
}

#[test]
fn input_loads_at_most_once_per_runner() {
    let store = MemoryStore::new()
        .with_input(0, "abc")
        .with_input(1, "defgh");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<CountingLoad>::new(2024, 1, &store, &mut timer);

    let first = runner.solve_part(1, 0, false).unwrap();
    let second = runner.solve_part(1, 0, false).unwrap();
    assert_eq!(first.to_string(), "3");
    assert_eq!(second.to_string(), "3");
    assert_eq!(LOAD_CALLS.load(Ordering::SeqCst), 1);

    // State stays bound to this runner instance even when a later call
    // names a different test case.
    let third = runner.solve_part(1, 1, false).unwrap();
    assert_eq!(third.to_string(), "3");
    assert_eq!(LOAD_CALLS.load(Ordering::SeqCst), 1);
}

struct ScrambledDeclaration;

impl Puzzle for ScrambledDeclaration {
    type State = ();

    const PARTS: &'static [PartSpec<Self::State>] = &[
        PartSpec::new(3, |_| Ok(Answer::new("third"))),
        PartSpec::new(1, |_| Ok(Answer::new("first"))),
        PartSpec::new(2, |_| Ok(Answer::new("second"))),
    ];

    fn load(_input: &str) -> Result<Self::State, ParseError> {
        Ok(())
    }
}

#[test]
fn solve_all_parts_runs_in_ascending_part_order() {
    let store = MemoryStore::new().with_input(0, "");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<ScrambledDeclaration>::new(2024, 2, &store, &mut timer);

    let answers = runner.solve_all_parts(0, false).unwrap();
    let rendered: Vec<String> = answers.iter().map(|a| a.to_string()).collect();
    assert_eq!(rendered, vec!["first", "second", "third"]);
}

struct TwoParts;

impl Puzzle for TwoParts {
    type State = ();

    const PARTS: &'static [PartSpec<Self::State>] = &[
        PartSpec::new(1, |_| Ok(Answer::new("one"))),
        PartSpec::new(2, |_| Ok(Answer::new("two"))),
    ];

    fn load(_input: &str) -> Result<Self::State, ParseError> {
        Ok(())
    }
}

#[test]
fn undeclared_part_is_part_not_found() {
    let store = MemoryStore::new().with_input(0, "");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<TwoParts>::new(2024, 3, &store, &mut timer);

    assert!(matches!(
        runner.solve_part(5, 0, false),
        Err(RunnerError::PartNotFound(5))
    ));
}

struct VacuousCounting;

static VACUOUS_SOLVES: AtomicUsize = AtomicUsize::new(0);

impl Puzzle for VacuousCounting {
    type State = ();

    const PARTS: &'static [PartSpec<Self::State>] = &[PartSpec::new(1, |_| {
        VACUOUS_SOLVES.fetch_add(1, Ordering::SeqCst);
        Ok(Answer::new("whatever"))
    })];

    fn load(_input: &str) -> Result<Self::State, ParseError> {
        Ok(())
    }
}

#[test]
fn missing_expectation_passes_without_solving() {
    let store = MemoryStore::new().with_input(0, "");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<VacuousCounting>::new(2024, 4, &store, &mut timer);

    assert!(runner.validate_part(1, 0, false).unwrap());
    assert_eq!(VACUOUS_SOLVES.load(Ordering::SeqCst), 0);
}

struct ShortCircuit;

static PART_TWO_SOLVES: AtomicUsize = AtomicUsize::new(0);

impl Puzzle for ShortCircuit {
    type State = ();

    const PARTS: &'static [PartSpec<Self::State>] = &[
        PartSpec::new(1, |_| Ok(Answer::new("actual"))),
        PartSpec::new(2, |_| {
            PART_TWO_SOLVES.fetch_add(1, Ordering::SeqCst);
            Ok(Answer::new("two"))
        }),
    ];

    fn load(_input: &str) -> Result<Self::State, ParseError> {
        Ok(())
    }
}

#[test]
fn validate_all_parts_short_circuits_on_first_failure() {
    let store = MemoryStore::new()
        .with_input(0, "")
        .with_expected(0, 1, "something else")
        .with_expected(0, 2, "two");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<ShortCircuit>::new(2024, 5, &store, &mut timer);

    assert!(!runner.validate_all_parts(0, false).unwrap());
    assert_eq!(PART_TWO_SOLVES.load(Ordering::SeqCst), 0);
}

struct MixedCase;

impl Puzzle for MixedCase {
    type State = ();

    const PARTS: &'static [PartSpec<Self::State>] =
        &[PartSpec::new(1, |_| Ok(Answer::new("abcd")))];

    fn load(_input: &str) -> Result<Self::State, ParseError> {
        Ok(())
    }
}

#[test]
fn validation_compares_case_insensitively() {
    let store = MemoryStore::new()
        .with_input(0, "")
        .with_expected(0, 1, "ABCD");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<MixedCase>::new(2024, 6, &store, &mut timer);

    assert!(runner.validate_part(1, 0, false).unwrap());
}

#[test]
fn validation_fails_on_real_mismatch() {
    let store = MemoryStore::new()
        .with_input(0, "")
        .with_expected(0, 1, "abce");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<MixedCase>::new(2024, 6, &store, &mut timer);

    assert!(!runner.validate_part(1, 0, false).unwrap());
}

struct ConstantAnswer;

static CONSTANT_SOLVES: AtomicUsize = AtomicUsize::new(0);

impl Puzzle for ConstantAnswer {
    type State = ();

    const PARTS: &'static [PartSpec<Self::State>] = &[PartSpec::new(1, |_| {
        CONSTANT_SOLVES.fetch_add(1, Ordering::SeqCst);
        Ok(Answer::new("ok"))
    })];

    fn load(_input: &str) -> Result<Self::State, ParseError> {
        Ok(())
    }
}

#[test]
fn fully_validate_stops_at_first_failing_test_case() {
    let store = MemoryStore::new()
        .with_input(0, "")
        .with_input(1, "")
        .with_input(2, "")
        .with_expected(0, 1, "ok")
        .with_expected(1, 1, "different")
        .with_expected(2, 1, "ok");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<ConstantAnswer>::new(2024, 7, &store, &mut timer);

    assert!(!runner.fully_validate_all_test_cases(false).unwrap());
    // Test cases 0 and 1 ran; 2 was never evaluated.
    assert_eq!(CONSTANT_SOLVES.load(Ordering::SeqCst), 2);
}

struct PrintingPart;

impl Puzzle for PrintingPart {
    type State = ();

    const PARTS: &'static [PartSpec<Self::State>] = &[
        PartSpec::new(1, |_| Ok(Answer::new("quiet"))),
        PartSpec::printing(2, |_| {
            println!("diagnostic output from the puzzle itself");
            Ok(Answer::new("loud"))
        }),
    ];

    fn load(_input: &str) -> Result<Self::State, ParseError> {
        Ok(())
    }
}

#[test]
fn live_printing_is_restored_after_a_printing_part() {
    let store = MemoryStore::new().with_input(0, "");
    let mut timer = ExecutionTimer::new();
    assert!(timer.live_printing());

    let mut runner = PuzzleRunner::<PrintingPart>::new(2024, 8, &store, &mut timer);
    runner.solve_all_parts(0, true).unwrap();

    assert!(timer.live_printing());
    assert!(!timer.is_measuring());
}

struct Memoizing;

#[derive(Default)]
struct MemoState {
    cached: Option<i64>,
}

impl Puzzle for Memoizing {
    type State = MemoState;

    const PARTS: &'static [PartSpec<Self::State>] = &[
        PartSpec::new(1, |state| {
            state.cached = Some(10);
            Ok(Answer::new(1))
        }),
        PartSpec::new(2, |state| Ok(Answer::new(state.cached.unwrap_or(0)))),
    ];

    fn load(_input: &str) -> Result<Self::State, ParseError> {
        Ok(MemoState::default())
    }
}

#[test]
fn parts_share_mutable_state_in_order() {
    let store = MemoryStore::new().with_input(0, "");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<Memoizing>::new(2024, 9, &store, &mut timer);

    let answers = runner.solve_all_parts(0, false).unwrap();
    let rendered: Vec<String> = answers.iter().map(|a| a.to_string()).collect();
    assert_eq!(rendered, vec!["1", "10"]);
}

struct Faulty;

impl Puzzle for Faulty {
    type State = ();

    const PARTS: &'static [PartSpec<Self::State>] = &[PartSpec::new(1, |_| {
        Err(SolveError::Other("deliberate failure".to_string()))
    })];

    fn load(_input: &str) -> Result<Self::State, ParseError> {
        Ok(())
    }
}

#[test]
fn solver_faults_propagate_unchanged() {
    let store = MemoryStore::new().with_input(0, "");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<Faulty>::new(2024, 10, &store, &mut timer);

    assert!(matches!(
        runner.solve_part(1, 0, false),
        Err(RunnerError::Solve(SolveError::Other(_)))
    ));
}

struct UnparsableInput;

impl Puzzle for UnparsableInput {
    type State = ();

    const PARTS: &'static [PartSpec<Self::State>] = &[PartSpec::new(1, |_| Ok(Answer::new(0)))];

    fn load(_input: &str) -> Result<Self::State, ParseError> {
        Err(ParseError::InvalidFormat("not what I wanted".to_string()))
    }
}

#[test]
fn loader_failures_propagate_as_load_errors() {
    let store = MemoryStore::new().with_input(0, "garbage");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<UnparsableInput>::new(2024, 11, &store, &mut timer);

    assert!(matches!(
        runner.solve_part(1, 0, false),
        Err(RunnerError::Load(ParseError::InvalidFormat(_)))
    ));
}

#[test]
fn missing_input_surfaces_store_error() {
    let store = MemoryStore::new();
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<TwoParts>::new(2024, 12, &store, &mut timer);

    assert!(matches!(
        runner.solve_part(1, 3, false),
        Err(RunnerError::Store(StoreError::MissingInput(3)))
    ));
}
