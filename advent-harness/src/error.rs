//! Error types for the harness library

use thiserror::Error;

/// Error type for parsing raw puzzle input into unit state
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type raised by a part's own solving logic
///
/// The harness never inspects or recovers from these; they surface to the
/// caller unchanged.
#[derive(Debug, Error)]
pub enum SolveError {
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Other solving errors
    #[error("Solve error: {0}")]
    Other(String),
}

/// Error type for input/output storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No raw input is recorded for the requested test case
    #[error("No input recorded for test case {0}")]
    MissingInput(u32),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for runner operations
///
/// `PartNotFound` is a configuration error in the puzzle unit; `Load` and
/// `Solve` are unit-author faults passed through unchanged. A validation
/// mismatch is never an error, it is the `false` verdict.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The requested part number has no entry in the unit's part table
    #[error("Part {0} is not defined for this puzzle")]
    PartNotFound(u8),
    /// Error occurred while loading input state
    #[error("Load error: {0}")]
    Load(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
    /// Error occurred in the storage collaborator
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a puzzle for a year-day combination that already exists
    #[error("Duplicate puzzle registration for year {0} day {1}")]
    DuplicatePuzzle(u16, u8),
}

/// Error type for registry lookups
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// No puzzle registered for the given year and day
    #[error("No puzzle registered for year {0} day {1}")]
    NotFound(u16, u8),
}
