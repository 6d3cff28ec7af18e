//! Core puzzle trait and part table types

use crate::answer::Answer;
use crate::error::{ParseError, SolveError};

/// One entry in a puzzle's part table.
///
/// Ties a positive part number to its solver function and records whether
/// the solver writes to the console itself. Tables do not have to be
/// declared sorted or contiguous; the resolver orders them by number.
pub struct PartSpec<S> {
    /// The part number (1, 2, ...)
    pub number: u8,
    /// Solver operation for this part
    pub solve: fn(&mut S) -> Result<Answer, SolveError>,
    /// Whether the solver prints its own console output while running.
    /// Live timing output is suppressed for such parts so the two streams
    /// do not interleave.
    pub prints: bool,
}

impl<S> PartSpec<S> {
    /// A part whose solver produces no console output of its own.
    pub const fn new(number: u8, solve: fn(&mut S) -> Result<Answer, SolveError>) -> Self {
        assert!(number > 0, "part numbers start at 1");
        Self {
            number,
            solve,
            prints: false,
        }
    }

    /// A part whose solver writes interactive output to the console.
    pub const fn printing(number: u8, solve: fn(&mut S) -> Result<Answer, SolveError>) -> Self {
        assert!(number > 0, "part numbers start at 1");
        Self {
            number,
            solve,
            prints: true,
        }
    }
}

/// Core trait that all puzzle units implement.
///
/// A unit declares its parsed input state, how to build it from raw input
/// text, and an ordered table of part solvers operating on that state. The
/// state is built at most once per runner instance and shared mutably
/// across all parts solved against it, so parts can memoize work other
/// parts reuse.
///
/// # Example
///
/// ```
/// use advent_harness::{Answer, ParseError, PartSpec, Puzzle, SolveError};
///
/// struct Day1;
///
/// impl Puzzle for Day1 {
///     type State = Vec<i64>;
///
///     const PARTS: &'static [PartSpec<Self::State>] = &[
///         PartSpec::new(1, |nums| Ok(Answer::new(nums.iter().sum::<i64>()))),
///         PartSpec::new(2, |nums| Ok(Answer::new(nums.iter().product::<i64>()))),
///     ];
///
///     fn load(input: &str) -> Result<Self::State, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait Puzzle {
    /// Parsed input state shared mutably across all parts.
    type State: 'static;

    /// Part table: the unit's solvable parts, each tied to a part number.
    const PARTS: &'static [PartSpec<Self::State>];

    /// Whether `load` writes its own console output. Live timing output is
    /// suppressed for the input phase when set.
    const LOADER_PRINTS: bool = false;

    /// Build the input state from raw puzzle input text.
    fn load(input: &str) -> Result<Self::State, ParseError>;
}
