//! Example demonstrating per-phase timing and live-print suppression
//!
//! Part 1 is a quiet computation: while it runs, the timer rewrites the
//! elapsed time in place. Part 2 prints its own diagnostics, so it is
//! declared with `PartSpec::printing` and the timer suppresses live output
//! for that phase, reporting only the final duration afterwards.
//!
//! Run with: cargo run --example printing_part

use advent_harness::{
    Answer, ExecutionTimer, MemoryStore, ParseError, PartSpec, Puzzle, PuzzleRunner,
};
use std::thread;
use std::time::Duration;

pub struct SlowDay;

impl Puzzle for SlowDay {
    type State = Vec<u64>;

    const PARTS: &'static [PartSpec<Self::State>] = &[
        PartSpec::new(1, |nums| {
            // Pretend this takes a while so the live ticker is visible.
            thread::sleep(Duration::from_millis(400));
            Ok(Answer::new(nums.iter().sum::<u64>()))
        }),
        PartSpec::printing(2, |nums| {
            for (i, n) in nums.iter().enumerate() {
                println!("considering candidate {}: {}", i, n);
                thread::sleep(Duration::from_millis(100));
            }
            Ok(Answer::new(nums.iter().max().copied().unwrap_or(0)))
        }),
    ];

    fn load(input: &str) -> Result<Self::State, ParseError> {
        input
            .lines()
            .map(|line| {
                line.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("Expected integer: {}", line)))
            })
            .collect()
    }
}

fn main() {
    let store = MemoryStore::new().with_input(0, "17\n4\n25\n9");
    let mut timer = ExecutionTimer::new();
    let mut runner = PuzzleRunner::<SlowDay>::new(2023, 5, &store, &mut timer);

    println!("Solving with execution times displayed:\n");
    match runner.solve_all_parts(0, true) {
        Ok(answers) => {
            println!();
            for (part, answer) in runner.part_numbers().iter().zip(&answers) {
                println!("Part {}: {}", part, answer);
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
