//! Advent Puzzle Harness
//!
//! A framework for running and validating advent-style puzzle solutions
//! across multiple years and days. Each puzzle is a unit with a parsed
//! input state and an ordered table of numbered part solvers; the harness
//! loads input lazily, times each phase without corrupting a unit's own
//! console output, and validates computed answers against recorded
//! expectations across one or more test cases.
//!
//! # Overview
//!
//! This library provides:
//! - The [`Puzzle`] trait: input parsing plus an explicit part table
//! - [`PuzzleRunner`]: load-before-solve sequencing, per-phase timing and
//!   answer validation with short-circuiting
//! - [`ExecutionTimer`]: an instrumentation context with live elapsed-time
//!   printing and a save/restore discipline around parts that print
//! - A registry and plugin system for managing many puzzles
//!
//! # Quick Example
//!
//! ```
//! use advent_harness::{
//!     Answer, ExecutionTimer, MemoryStore, ParseError, PartSpec, Puzzle, PuzzleRunner,
//! };
//!
//! struct Day1;
//!
//! impl Puzzle for Day1 {
//!     type State = Vec<i64>;
//!
//!     const PARTS: &'static [PartSpec<Self::State>] = &[
//!         PartSpec::new(1, |nums| Ok(Answer::new(nums.iter().sum::<i64>()))),
//!     ];
//!
//!     fn load(input: &str) -> Result<Self::State, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! let store = MemoryStore::new()
//!     .with_input(0, "1\n2\n3")
//!     .with_expected(0, 1, "6");
//! let mut timer = ExecutionTimer::new();
//! let mut runner = PuzzleRunner::<Day1>::new(2024, 1, &store, &mut timer);
//!
//! assert!(runner.validate_part(1, 0, false).unwrap());
//! ```
//!
//! # Key Concepts
//!
//! ## Part tables
//!
//! A unit declares its parts as an explicit table of [`PartSpec`] entries.
//! Tables need not be contiguous or declared in order; the harness always
//! resolves them in ascending part-number order, and asking for an
//! undeclared number fails with [`RunnerError::PartNotFound`].
//!
//! ## Timing and console output
//!
//! A part (or loader) flagged as printing its own console output runs with
//! live timing output suppressed, restored afterwards, so the two streams
//! never interleave. The measured duration is still reported once the
//! phase stops.
//!
//! ## Validation
//!
//! Expected answers live in a [`PuzzleStore`]. A missing expectation is a
//! vacuous pass; a recorded one is compared case-insensitively against the
//! canonicalized computed answer. `validate_all_parts` and
//! `fully_validate_all_test_cases` short-circuit on the first failure.
//!
//! ## Plugin System and Derive Macro
//!
//! Use `#[derive(AutoRegisterPuzzle)]` to register puzzles automatically:
//! ```ignore
//! #[derive(AutoRegisterPuzzle)]
//! #[puzzle(year = 2024, day = 1, tags = ["easy"])]
//! struct Day1;
//! ```

mod answer;
mod error;
mod puzzle;
mod registry;
mod resolver;
mod runner;
mod store;
mod timer;

// Re-export public API
pub use answer::{Answer, canonical_string};
pub use error::{
    ParseError, RegistrationError, RegistryError, RunnerError, SolveError, StoreError,
};
pub use puzzle::{PartSpec, Puzzle};
pub use registry::{
    PuzzleInfo, PuzzlePlugin, PuzzleRegistry, RegisterablePuzzle, RegistryBuilder,
};
pub use resolver::{resolve, resolve_all};
pub use runner::{DynRunner, PuzzleRunner};
pub use store::{MemoryStore, PuzzleStore};
pub use timer::{ExecutionTimer, Phase, format_duration};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use advent_harness_macros::AutoRegisterPuzzle;
