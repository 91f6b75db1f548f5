//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Puzzle year
    #[arg(short, long, default_value_t = 2023)]
    pub year: u16,

    /// Puzzle day
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Puzzle input file (defaults to `<input-dir>/<year>_day<day>.txt`)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding puzzle inputs
    #[arg(long, default_value = "input")]
    pub input_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
