//! File-system backed puzzle input and expected-answer storage
//!
//! Implements the harness's [`PuzzleStore`] interface over a directory
//! tree, one store instance per (year, day):
//!
//! ```text
//! {root}/inputs/{year}/day{day:02}.txt         raw input, test case 0
//! {root}/inputs/{year}/day{day:02}_t{n}.txt    raw input, test case n
//! {root}/answers/{year}/day{day:02}.txt        expected answers, case 0
//! {root}/answers/{year}/day{day:02}_t{n}.txt   expected answers, case n
//! ```
//!
//! An answers file holds one line per part, in part order. A missing
//! file, a missing line, or a blank line means "no assertion" for that
//! part, which the harness validates as a vacuous pass.

use advent_harness::{PuzzleStore, StoreError};
use std::fs;
use std::io;
use std::path::PathBuf;

/// File-based store for one puzzle unit.
pub struct FileStore {
    inputs_dir: PathBuf,
    answers_dir: PathBuf,
    day: u8,
}

impl FileStore {
    /// Create a store rooted at `root` for a specific year and day.
    pub fn new(root: impl Into<PathBuf>, year: u16, day: u8) -> Self {
        let root = root.into();
        Self {
            inputs_dir: root.join("inputs").join(year.to_string()),
            answers_dir: root.join("answers").join(year.to_string()),
            day,
        }
    }

    /// Path of the raw input file for a test case.
    pub fn input_path(&self, test_case: u32) -> PathBuf {
        self.inputs_dir.join(self.file_name(test_case))
    }

    /// Path of the expected-answers file for a test case.
    pub fn answers_path(&self, test_case: u32) -> PathBuf {
        self.answers_dir.join(self.file_name(test_case))
    }

    fn file_name(&self, test_case: u32) -> String {
        if test_case == 0 {
            format!("day{:02}.txt", self.day)
        } else {
            format!("day{:02}_t{}.txt", self.day, test_case)
        }
    }

    /// Store raw input for a test case, creating directories as needed.
    pub fn put_input(&self, test_case: u32, input: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.inputs_dir)?;
        fs::write(self.input_path(test_case), input)?;
        Ok(())
    }

    /// Store expected answers for a test case, one entry per part in part
    /// order. Leave an entry blank to record "no assertion" for that part.
    pub fn put_answers(&self, test_case: u32, answers: &[&str]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.answers_dir)?;
        let mut contents = answers.join("\n");
        contents.push('\n');
        fs::write(self.answers_path(test_case), contents)?;
        Ok(())
    }
}

impl PuzzleStore for FileStore {
    fn raw_input(&self, test_case: u32) -> Result<String, StoreError> {
        match fs::read_to_string(self.input_path(test_case)) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::MissingInput(test_case))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn expected_answer(&self, test_case: u32, part: u8) -> Result<Option<String>, StoreError> {
        let contents = match fs::read_to_string(self.answers_path(test_case)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let Some(index) = (part as usize).checked_sub(1) else {
            return Ok(None);
        };
        Ok(contents
            .lines()
            .nth(index)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from))
    }

    fn test_case_ids(&self) -> Result<Vec<u32>, StoreError> {
        let mut ids = Vec::new();
        if self.input_path(0).exists() {
            ids.push(0);
        }

        let entries = match fs::read_dir(&self.inputs_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ids),
            Err(e) => return Err(e.into()),
        };

        let prefix = format!("day{:02}_t", self.day);
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(id) = name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(".txt"))
                .and_then(|id| id.parse::<u32>().ok())
            {
                ids.push(id);
            }
        }

        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }
}
