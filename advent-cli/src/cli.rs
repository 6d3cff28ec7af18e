//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent puzzle runner
#[derive(Parser, Debug)]
#[command(
    name = "advent",
    about = "Run and validate advent puzzle solutions",
    version
)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all declared parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub part: Option<u8>,

    /// Test case to run against (0 is the primary input)
    #[arg(short = 'c', long, default_value_t = 0)]
    pub test_case: u32,

    /// Validate answers against recorded expectations instead of printing them
    #[arg(long)]
    pub validate: bool,

    /// With --validate, check every recorded test case
    #[arg(long, requires = "validate")]
    pub all_cases: bool,

    /// Do not display per-phase execution times
    #[arg(long)]
    pub no_times: bool,

    /// Root directory holding puzzle inputs and recorded answers
    #[arg(long, default_value = "./puzzle-data")]
    pub store_dir: PathBuf,

    /// Tags to filter puzzles (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Quiet mode - only output answers and verdicts
    #[arg(short, long)]
    pub quiet: bool,
}
