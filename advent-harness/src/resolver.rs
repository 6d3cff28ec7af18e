//! Part resolution over a unit's part table
//!
//! Callers request "all parts" or "exactly part N" without hardcoding a
//! maximum; some puzzles define two parts, others more, and the numbers in
//! a table need not be contiguous.

use crate::error::RunnerError;
use crate::puzzle::PartSpec;

/// Resolve every part in the table, ordered by ascending part number
/// regardless of declaration order.
pub fn resolve_all<S>(table: &[PartSpec<S>]) -> Vec<&PartSpec<S>> {
    let mut parts: Vec<_> = table.iter().collect();
    parts.sort_by_key(|spec| spec.number);
    debug_assert!(
        parts.windows(2).all(|pair| pair[0].number < pair[1].number),
        "part table declares the same part number twice"
    );
    parts
}

/// Resolve the single part with the requested number.
pub fn resolve<S>(table: &[PartSpec<S>], part: u8) -> Result<&PartSpec<S>, RunnerError> {
    table
        .iter()
        .find(|spec| spec.number == part)
        .ok_or(RunnerError::PartNotFound(part))
}
