//! Solution execution and validation orchestration

use crate::answer::{Answer, canonical_string};
use crate::error::RunnerError;
use crate::puzzle::{PartSpec, Puzzle};
use crate::resolver;
use crate::store::PuzzleStore;
use crate::timer::{ExecutionTimer, Phase};

/// Two-state cell for the lazily built input state: checked and populated
/// at most once per runner instance.
enum LazyState<S> {
    Unloaded,
    Loaded(S),
}

impl<S> LazyState<S> {
    fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Orchestration context for one puzzle unit.
///
/// Borrows the unit's storage collaborator and an execution timer, and owns
/// the unit's input state, built lazily on the first solve and shared
/// across every part and test case solved against this instance. A runner
/// assumes exclusive access for the duration of each call; it is not meant
/// to be driven concurrently.
///
/// # Example
///
/// ```
/// use advent_harness::{
///     Answer, ExecutionTimer, MemoryStore, ParseError, PartSpec, Puzzle, PuzzleRunner,
/// };
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
///
/// let store = MemoryStore::new()
///     .with_input(0, "1\n2\n3")
///     .with_expected(0, 1, "6");
/// let mut timer = ExecutionTimer::new();
/// let mut runner = PuzzleRunner::<Day1>::new(2024, 1, &store, &mut timer);
///
/// let answer = runner.solve_part(1, 0, false).unwrap();
/// assert_eq!(answer.to_string(), "6");
/// assert!(runner.validate_part(1, 0, false).unwrap());
/// ```
pub struct PuzzleRunner<'r, P: Puzzle> {
    year: u16,
    day: u8,
    store: &'r dyn PuzzleStore,
    timer: &'r mut ExecutionTimer,
    state: LazyState<P::State>,
}

impl<'r, P: Puzzle> PuzzleRunner<'r, P> {
    /// Create a runner for one unit instance.
    pub fn new(
        year: u16,
        day: u8,
        store: &'r dyn PuzzleStore,
        timer: &'r mut ExecutionTimer,
    ) -> Self {
        Self {
            year,
            day,
            store,
            timer,
            state: LazyState::Unloaded,
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Declared part numbers in ascending order.
    pub fn part_numbers(&self) -> Vec<u8> {
        resolver::resolve_all(P::PARTS)
            .iter()
            .map(|spec| spec.number)
            .collect()
    }

    /// Solve every declared part in ascending part-number order.
    ///
    /// Input state is loaded first if this runner has not loaded it yet,
    /// timed as the `Input` phase when `display_times` is set. Each part is
    /// then timed and labeled individually. Answers come back in part
    /// order.
    pub fn solve_all_parts(
        &mut self,
        test_case: u32,
        display_times: bool,
    ) -> Result<Vec<Answer>, RunnerError> {
        self.ensure_loaded(test_case, display_times)?;
        let specs = resolver::resolve_all(P::PARTS);
        let mut answers = Vec::with_capacity(specs.len());
        for spec in specs {
            answers.push(self.run_part(spec, display_times)?);
        }
        Ok(answers)
    }

    /// Solve exactly one part.
    ///
    /// Fails with [`RunnerError::PartNotFound`] when the part table has no
    /// entry for `part`.
    pub fn solve_part(
        &mut self,
        part: u8,
        test_case: u32,
        display_times: bool,
    ) -> Result<Answer, RunnerError> {
        let spec = resolver::resolve(P::PARTS, part)?;
        self.ensure_loaded(test_case, display_times)?;
        self.run_part(spec, display_times)
    }

    /// Validate one part against its recorded expected answer.
    ///
    /// When no expected answer is recorded for (part, test case) the part
    /// is vacuously valid and its solver is not invoked. Otherwise the
    /// computed answer is canonicalized and compared case-insensitively.
    pub fn validate_part(
        &mut self,
        part: u8,
        test_case: u32,
        display_times: bool,
    ) -> Result<bool, RunnerError> {
        let Some(expected) = self.store.expected_answer(test_case, part)? else {
            return Ok(true);
        };
        let answer = self.solve_part(part, test_case, display_times)?;
        Ok(expected.eq_ignore_ascii_case(&canonical_string(&answer)))
    }

    /// Validate every declared part in ascending order, stopping at the
    /// first failure without solving the remaining parts.
    pub fn validate_all_parts(
        &mut self,
        test_case: u32,
        display_times: bool,
    ) -> Result<bool, RunnerError> {
        for spec in resolver::resolve_all(P::PARTS) {
            if !self.validate_part(spec.number, test_case, display_times)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Validate every part of every test case the store knows, in store
    /// order, stopping at the first failing test case.
    pub fn fully_validate_all_test_cases(
        &mut self,
        display_times: bool,
    ) -> Result<bool, RunnerError> {
        for test_case in self.store.test_case_ids()? {
            if !self.validate_all_parts(test_case, display_times)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Populate the input state cell if this runner has not yet loaded it.
    fn ensure_loaded(&mut self, test_case: u32, display_times: bool) -> Result<(), RunnerError> {
        if self.state.is_loaded() {
            return Ok(());
        }
        let raw = self.store.raw_input(test_case)?;
        let timer = &mut *self.timer;
        let state = timer
            .time_phase(display_times, P::LOADER_PRINTS, Phase::Input, || {
                P::load(&raw)
            })
            .map_err(RunnerError::Load)?;
        self.state = LazyState::Loaded(state);
        Ok(())
    }

    /// Run one resolved part against the loaded state.
    fn run_part(
        &mut self,
        spec: &PartSpec<P::State>,
        display_times: bool,
    ) -> Result<Answer, RunnerError> {
        let timer = &mut *self.timer;
        let LazyState::Loaded(state) = &mut self.state else {
            unreachable!("input state is loaded before any part runs");
        };
        timer
            .time_phase(display_times, spec.prints, Phase::Part(spec.number), || {
                (spec.solve)(state)
            })
            .map_err(RunnerError::Solve)
    }
}

/// Type-erased interface for driving any puzzle runner uniformly.
///
/// Front ends hold `Box<dyn DynRunner>` values created through the
/// registry so they never name concrete puzzle types.
pub trait DynRunner {
    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Declared part numbers in ascending order.
    fn part_numbers(&self) -> Vec<u8>;

    /// See [`PuzzleRunner::solve_all_parts`].
    fn solve_all_parts(
        &mut self,
        test_case: u32,
        display_times: bool,
    ) -> Result<Vec<Answer>, RunnerError>;

    /// See [`PuzzleRunner::solve_part`].
    fn solve_part(
        &mut self,
        part: u8,
        test_case: u32,
        display_times: bool,
    ) -> Result<Answer, RunnerError>;

    /// See [`PuzzleRunner::validate_part`].
    fn validate_part(
        &mut self,
        part: u8,
        test_case: u32,
        display_times: bool,
    ) -> Result<bool, RunnerError>;

    /// See [`PuzzleRunner::validate_all_parts`].
    fn validate_all_parts(
        &mut self,
        test_case: u32,
        display_times: bool,
    ) -> Result<bool, RunnerError>;

    /// See [`PuzzleRunner::fully_validate_all_test_cases`].
    fn fully_validate_all_test_cases(&mut self, display_times: bool) -> Result<bool, RunnerError>;
}

impl<P: Puzzle> DynRunner for PuzzleRunner<'_, P> {
    fn year(&self) -> u16 {
        PuzzleRunner::year(self)
    }

    fn day(&self) -> u8 {
        PuzzleRunner::day(self)
    }

    fn part_numbers(&self) -> Vec<u8> {
        PuzzleRunner::part_numbers(self)
    }

    fn solve_all_parts(
        &mut self,
        test_case: u32,
        display_times: bool,
    ) -> Result<Vec<Answer>, RunnerError> {
        PuzzleRunner::solve_all_parts(self, test_case, display_times)
    }

    fn solve_part(
        &mut self,
        part: u8,
        test_case: u32,
        display_times: bool,
    ) -> Result<Answer, RunnerError> {
        PuzzleRunner::solve_part(self, part, test_case, display_times)
    }

    fn validate_part(
        &mut self,
        part: u8,
        test_case: u32,
        display_times: bool,
    ) -> Result<bool, RunnerError> {
        PuzzleRunner::validate_part(self, part, test_case, display_times)
    }

    fn validate_all_parts(
        &mut self,
        test_case: u32,
        display_times: bool,
    ) -> Result<bool, RunnerError> {
        PuzzleRunner::validate_all_parts(self, test_case, display_times)
    }

    fn fully_validate_all_test_cases(&mut self, display_times: bool) -> Result<bool, RunnerError> {
        PuzzleRunner::fully_validate_all_test_cases(self, display_times)
    }
}
