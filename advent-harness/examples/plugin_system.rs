//! Example demonstrating the plugin system and builder pattern
//!
//! Shows the inventory-based plugin system for automatic puzzle
//! registration, along with the fluent builder API and tag filtering.
//!
//! Run with: cargo run --example plugin_system

use advent_harness::{
    Answer, AutoRegisterPuzzle, ExecutionTimer, MemoryStore, ParseError, PartSpec, Puzzle,
    PuzzlePlugin, RegistryBuilder,
};

// ============================================================================
// Day 1: registered through the derive macro (RECOMMENDED)
// ============================================================================

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2023, day = 1, tags = ["easy", "2023"])]
pub struct SumDay;

impl Puzzle for SumDay {
    type State = Vec<i64>;

    const PARTS: &'static [PartSpec<Self::State>] = &[
        PartSpec::new(1, |nums| Ok(Answer::new(nums.iter().sum::<i64>()))),
        PartSpec::new(2, |nums| {
            Ok(Answer::new(nums.iter().max().copied().unwrap_or(0)))
        }),
    ];

    fn load(input: &str) -> Result<Self::State, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat(format!("Expected integer: {}", line)))
            })
            .collect()
    }
}

// ============================================================================
// Day 2: registered through manual inventory::submit! (for comparison)
// ============================================================================

pub struct ProductDay;

impl Puzzle for ProductDay {
    type State = Vec<i64>;

    const PARTS: &'static [PartSpec<Self::State>] = &[PartSpec::new(1, |nums| {
        Ok(Answer::new(nums.iter().product::<i64>()))
    })];

    fn load(input: &str) -> Result<Self::State, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat(format!("Expected integer: {}", line)))
            })
            .collect()
    }
}

inventory::submit! {
    PuzzlePlugin {
        year: 2023,
        day: 2,
        puzzle: &ProductDay,
        tags: &["hard", "2023"],
    }
}

fn main() {
    println!("=== Plugin System and Builder Pattern Example ===\n");

    let store = MemoryStore::new().with_input(0, "1\n2\n3\n4\n5");
    let mut timer = ExecutionTimer::new();

    // Scenario 1: register ALL plugins
    println!("--- Scenario 1: Register All Plugins ---");
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    for (year, day) in [(2023u16, 1u8), (2023, 2)] {
        if let Ok(mut runner) = registry.create_runner(year, day, &store, &mut timer) {
            if let Ok(answers) = runner.solve_all_parts(0, false) {
                for (part, answer) in runner.part_numbers().iter().zip(&answers) {
                    println!("{} Day {} Part {}: {}", year, day, part, answer);
                }
            }
        }
    }

    // Scenario 2: register only "easy" puzzles
    println!("\n--- Scenario 2: Register Only 'Easy' Puzzles ---");
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"easy"))
        .expect("Failed to register plugins")
        .build();

    match registry.lookup(2023, 1) {
        Some(_) => println!("2023 Day 1 registered (expected - it's 'easy')"),
        None => println!("2023 Day 1 not registered (unexpected!)"),
    }
    match registry.lookup(2023, 2) {
        Some(_) => println!("2023 Day 2 registered (unexpected!)"),
        None => println!("2023 Day 2 not registered (expected - it's 'hard')"),
    }

    // Scenario 3: mix manual registration with plugin registration
    println!("\n--- Scenario 3: Mix Manual and Plugin Registration ---");
    let registry = RegistryBuilder::new()
        .register(2022, 1, &ProductDay)
        .expect("Failed to register manual puzzle")
        .register_plugins(|plugin| plugin.year == 2023)
        .expect("Failed to register plugins")
        .build();

    for (year, day) in [(2022u16, 1u8), (2023, 1)] {
        if let Ok(mut runner) = registry.create_runner(year, day, &store, &mut timer) {
            if let Ok(answer) = runner.solve_part(1, 0, false) {
                println!("{} Day {} Part 1: {}", year, day, answer);
            }
        }
    }
}
