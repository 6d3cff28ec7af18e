//! Advent CLI - command-line interface for running and validating
//! registered puzzle solutions

mod cli;
mod error;
mod output;

// Import advent-solutions to link the puzzle plugins
use advent_solutions as _;

use advent_harness::{ExecutionTimer, PuzzleInfo, PuzzleRegistry, RegistryBuilder};
use advent_store::FileStore;
use clap::Parser;
use cli::Args;
use error::CliError;
use itertools::Itertools;
use output::{OutputFormatter, WorkOutcome, WorkResult};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<bool, CliError> {
    let registry = build_registry(&args.tags)?;
    let work_items = collect_work_items(&registry, &args);
    if work_items.is_empty() {
        println!("No puzzles found matching the specified filters.");
        return Ok(true);
    }

    let store_root = expand_tilde(&args.store_dir);
    // Quiet mode leaves only answers on stdout; timing output would
    // defeat the point.
    let display_times = !args.no_times && !args.quiet;
    let formatter = OutputFormatter::new(args.quiet);
    let mut timer = ExecutionTimer::new();
    let mut outcomes = Vec::new();

    // Work items run strictly in (year, day) order; parts and test cases
    // are ordered by the runner itself.
    for (year, group) in &work_items.iter().chunk_by(|info| info.year) {
        formatter.print_year_header(year);
        for info in group {
            let outcome = run_work_item(&registry, info, &args, &store_root, display_times, &mut timer);
            formatter.print_outcome(&outcome);
            outcomes.push(outcome);
        }
    }

    formatter.print_summary(&outcomes);
    Ok(outcomes.iter().all(WorkOutcome::is_success))
}

/// Build the registry from collected plugins, filtered by tags
fn build_registry(tags: &[String]) -> Result<PuzzleRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

/// Collect registered puzzles matching the year/day/part filters, in
/// (year, day) order
fn collect_work_items(registry: &PuzzleRegistry, args: &Args) -> Vec<PuzzleInfo> {
    let mut items: Vec<PuzzleInfo> = registry
        .iter_info()
        .filter(|info| args.year.is_none_or(|y| info.year == y))
        .filter(|info| args.day.is_none_or(|d| info.day == d))
        .filter(|info| args.part.is_none_or(|p| info.parts.contains(&p)))
        .collect();
    items.sort_by_key(|info| (info.year, info.day));
    items
}

/// Run one (year, day) work item, capturing failures as outcomes rather
/// than aborting the batch
fn run_work_item(
    registry: &PuzzleRegistry,
    info: &PuzzleInfo,
    args: &Args,
    store_root: &Path,
    display_times: bool,
    timer: &mut ExecutionTimer,
) -> WorkOutcome {
    let result = match execute(registry, info, args, store_root, display_times, timer) {
        Ok(result) => result,
        Err(e) => WorkResult::Error(e.to_string()),
    };
    WorkOutcome {
        year: info.year,
        day: info.day,
        result,
    }
}

fn execute(
    registry: &PuzzleRegistry,
    info: &PuzzleInfo,
    args: &Args,
    store_root: &Path,
    display_times: bool,
    timer: &mut ExecutionTimer,
) -> Result<WorkResult, CliError> {
    let store = FileStore::new(store_root, info.year, info.day);
    let mut runner = registry.create_runner(info.year, info.day, &store, timer)?;

    if args.validate {
        let passed = if args.all_cases {
            runner.fully_validate_all_test_cases(display_times)?
        } else if let Some(part) = args.part {
            runner.validate_part(part, args.test_case, display_times)?
        } else {
            runner.validate_all_parts(args.test_case, display_times)?
        };
        return Ok(WorkResult::Verdict(passed));
    }

    let answers = if let Some(part) = args.part {
        let answer = runner.solve_part(part, args.test_case, display_times)?;
        vec![(part, answer.to_string())]
    } else {
        let parts = runner.part_numbers();
        let answers = runner.solve_all_parts(args.test_case, display_times)?;
        parts
            .into_iter()
            .zip(answers.iter().map(|a| a.to_string()))
            .collect()
    };
    Ok(WorkResult::Answers(answers))
}

/// Expand a leading ~ to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
