//! Puzzle registry for looking up units and creating runners

use crate::error::{RegistrationError, RegistryError};
use crate::runner::{DynRunner, PuzzleRunner};
use crate::store::PuzzleStore;
use crate::timer::ExecutionTimer;
use std::collections::HashMap;

/// Metadata about a registered puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInfo {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Declared part numbers in ascending order
    pub parts: Vec<u8>,
}

/// Type-erased interface for puzzles that can be registered and turned
/// into runners.
///
/// Any `Puzzle` type gets this for free through a blanket impl, which is
/// what lets zero-sized marker structs be collected as `&'static dyn`
/// plugin entries.
pub trait RegisterablePuzzle: Sync {
    /// Declared part numbers in ascending order.
    fn part_numbers(&self) -> Vec<u8>;

    /// Create a runner bound to the given store and timer.
    fn create_runner<'r>(
        &self,
        year: u16,
        day: u8,
        store: &'r dyn PuzzleStore,
        timer: &'r mut ExecutionTimer,
    ) -> Box<dyn DynRunner + 'r>;
}

impl<P> RegisterablePuzzle for P
where
    P: crate::puzzle::Puzzle + Sync + 'static,
{
    fn part_numbers(&self) -> Vec<u8> {
        crate::resolver::resolve_all(P::PARTS)
            .iter()
            .map(|spec| spec.number)
            .collect()
    }

    fn create_runner<'r>(
        &self,
        year: u16,
        day: u8,
        store: &'r dyn PuzzleStore,
        timer: &'r mut ExecutionTimer,
    ) -> Box<dyn DynRunner + 'r> {
        Box::new(PuzzleRunner::<P>::new(year, day, store, timer))
    }
}

/// Plugin entry for automatic puzzle registration.
///
/// Submitted through `inventory`, usually by the `AutoRegisterPuzzle`
/// derive:
///
/// ```ignore
/// inventory::submit! {
///     PuzzlePlugin {
///         year: 2024,
///         day: 1,
///         puzzle: &Day1,
///         tags: &["2024", "easy"],
///     }
/// }
/// ```
pub struct PuzzlePlugin {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The puzzle marker (type-erased)
    pub puzzle: &'static dyn RegisterablePuzzle,
    /// Optional tags for filtering (e.g. "easy", "grid", "2024")
    pub tags: &'static [&'static str],
}

inventory::collect!(PuzzlePlugin);

/// Builder for constructing a [`PuzzleRegistry`] with duplicate detection.
pub struct RegistryBuilder {
    puzzles: HashMap<(u16, u8), &'static dyn RegisterablePuzzle>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            puzzles: HashMap::new(),
        }
    }

    /// Register a puzzle for a specific year and day.
    ///
    /// Returns an error if a puzzle is already registered for the
    /// year-day combination.
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        puzzle: &'static dyn RegisterablePuzzle,
    ) -> Result<Self, RegistrationError> {
        if self.puzzles.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicatePuzzle(year, day));
        }
        self.puzzles.insert((year, day), puzzle);
        Ok(self)
    }

    /// Register every collected puzzle plugin.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the puzzle plugins matching the given filter predicate.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_harness::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.year == 2024)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&PuzzlePlugin) -> bool,
    {
        for plugin in inventory::iter::<PuzzlePlugin>() {
            if filter(plugin) {
                self = self.register(plugin.year, plugin.day, plugin.puzzle)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder into an immutable registry.
    pub fn build(self) -> PuzzleRegistry {
        PuzzleRegistry {
            puzzles: self.puzzles,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry mapping (year, day) to registered puzzles.
pub struct PuzzleRegistry {
    puzzles: HashMap<(u16, u8), &'static dyn RegisterablePuzzle>,
}

impl PuzzleRegistry {
    /// Look up the puzzle registered for a year and day, if any.
    pub fn lookup(&self, year: u16, day: u8) -> Option<&'static dyn RegisterablePuzzle> {
        self.puzzles.get(&(year, day)).copied()
    }

    /// Create a runner for a specific year and day.
    pub fn create_runner<'r>(
        &self,
        year: u16,
        day: u8,
        store: &'r dyn PuzzleStore,
        timer: &'r mut ExecutionTimer,
    ) -> Result<Box<dyn DynRunner + 'r>, RegistryError> {
        let puzzle = self
            .lookup(year, day)
            .ok_or(RegistryError::NotFound(year, day))?;
        Ok(puzzle.create_runner(year, day, store, timer))
    }

    /// Iterate over metadata for every registered puzzle, unordered.
    pub fn iter_info(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.puzzles.iter().map(|(&(year, day), puzzle)| PuzzleInfo {
            year,
            day,
            parts: puzzle.part_numbers(),
        })
    }

    /// Number of registered puzzles.
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Whether the registry has no puzzles.
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}
