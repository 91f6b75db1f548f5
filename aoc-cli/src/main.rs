//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod input;
mod logging;
mod output;
mod runner;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use output::OutputFormatter;

fn main() {
    logging::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        match e.exit_code() {
            0 => {}
            code => std::process::exit(code),
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);
    let registry = RegistryBuilder::new().register_all_plugins()?.build();

    if !registry.contains(config.year, config.day) {
        return Err(aoc_solver::SolverError::NotFound(config.year, config.day).into());
    }

    let input = input::read_input(&config.input_path)?;

    let formatter = OutputFormatter::new(config.quiet);
    let results = runner::run(&registry, &config, &input)?;
    for result in &results {
        formatter.print_result(result);
    }
    formatter.print_summary(&results);

    match results.iter().filter(|r| r.answer.is_err()).count() {
        0 => Ok(()),
        failed => Err(CliError::PartsFailed(failed)),
    }
}
