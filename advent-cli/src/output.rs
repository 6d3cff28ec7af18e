//! Output formatting for run outcomes

use advent_harness::format_duration;
use std::time::Instant;

/// What one work item produced.
pub enum WorkResult {
    /// Computed answers as (part, rendered answer) pairs
    Answers(Vec<(u8, String)>),
    /// Validation verdict
    Verdict(bool),
    /// The work item failed before producing a result
    Error(String),
}

/// Outcome of running one (year, day) work item.
pub struct WorkOutcome {
    pub year: u16,
    pub day: u8,
    pub result: WorkResult,
}

impl WorkOutcome {
    /// Whether this outcome counts as a success for the exit code.
    pub fn is_success(&self) -> bool {
        match &self.result {
            WorkResult::Answers(_) => true,
            WorkResult::Verdict(passed) => *passed,
            WorkResult::Error(_) => false,
        }
    }
}

/// Output formatter for work outcomes
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print a section header for a year's work items
    pub fn print_year_header(&self, year: u16) {
        if !self.quiet {
            println!("=== {year} ===");
        }
    }

    /// Format and print a single outcome
    pub fn print_outcome(&self, outcome: &WorkOutcome) {
        if self.quiet {
            self.print_quiet(outcome);
        } else {
            self.print_full(outcome);
        }
    }

    /// Print in quiet mode (just answers and verdicts)
    fn print_quiet(&self, outcome: &WorkOutcome) {
        match &outcome.result {
            WorkResult::Answers(answers) => {
                for (_, answer) in answers {
                    println!("{answer}");
                }
            }
            WorkResult::Verdict(passed) => {
                println!("{}", if *passed { "pass" } else { "fail" })
            }
            WorkResult::Error(message) => eprintln!("Error: {message}"),
        }
    }

    /// Print full output with year/day prefixes
    fn print_full(&self, outcome: &WorkOutcome) {
        let prefix = format!("{}/{:02}", outcome.year, outcome.day);
        match &outcome.result {
            WorkResult::Answers(answers) => {
                for (part, answer) in answers {
                    // Banner-style answers span lines; keep them unindented
                    // so the glyphs stay readable.
                    if answer.contains('\n') {
                        println!("{prefix} Part {part}:");
                        println!("{answer}");
                    } else {
                        println!("{prefix} Part {part}: {answer}");
                    }
                }
            }
            WorkResult::Verdict(true) => println!("{prefix}: ✓ all recorded answers match"),
            WorkResult::Verdict(false) => println!("{prefix}: ✗ validation failed"),
            WorkResult::Error(message) => eprintln!("{prefix}: Error - {message}"),
        }
    }

    /// Print a summary after all outcomes
    pub fn print_summary(&self, outcomes: &[WorkOutcome]) {
        if self.quiet {
            return;
        }

        let total = outcomes.len();
        let successes = outcomes.iter().filter(|o| o.is_success()).count();
        let failures = total - successes;

        println!();
        println!("--- Summary ---");
        println!("Puzzles: {successes} succeeded, {failures} failed");
        println!(
            "Elapsed wall-clock time: {}",
            format_duration(self.start_time.elapsed())
        );
    }
}
