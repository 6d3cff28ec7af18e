//! Input/output storage interface consumed by the runner
//!
//! A store is bound to one puzzle unit and supplies its raw input text and
//! recorded expected answers per test case. Test case 0 is the primary
//! input; higher indices are sample/test inputs.

use crate::error::StoreError;
use std::collections::BTreeMap;

/// Storage collaborator for one puzzle unit.
pub trait PuzzleStore {
    /// Raw puzzle input text for a test case.
    fn raw_input(&self, test_case: u32) -> Result<String, StoreError>;

    /// Recorded expected answer for (test case, part), if any.
    ///
    /// `None` means "no assertion configured"; validation treats it as a
    /// vacuous pass.
    fn expected_answer(&self, test_case: u32, part: u8) -> Result<Option<String>, StoreError>;

    /// All test case identities known to this store, in validation order.
    fn test_case_ids(&self) -> Result<Vec<u32>, StoreError>;
}

/// In-memory store, mainly for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inputs: BTreeMap<u32, String>,
    expected: BTreeMap<(u32, u8), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record raw input for a test case.
    pub fn with_input(mut self, test_case: u32, input: impl Into<String>) -> Self {
        self.inputs.insert(test_case, input.into());
        self
    }

    /// Record an expected answer for (test case, part).
    pub fn with_expected(mut self, test_case: u32, part: u8, answer: impl Into<String>) -> Self {
        self.expected.insert((test_case, part), answer.into());
        self
    }
}

impl PuzzleStore for MemoryStore {
    fn raw_input(&self, test_case: u32) -> Result<String, StoreError> {
        self.inputs
            .get(&test_case)
            .cloned()
            .ok_or(StoreError::MissingInput(test_case))
    }

    fn expected_answer(&self, test_case: u32, part: u8) -> Result<Option<String>, StoreError> {
        Ok(self.expected.get(&(test_case, part)).cloned())
    }

    fn test_case_ids(&self) -> Result<Vec<u32>, StoreError> {
        Ok(self.inputs.keys().copied().collect())
    }
}
