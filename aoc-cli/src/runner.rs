//! Runs the parts of one registered solver against one input

use crate::config::Config;
use crate::error::CliError;
use aoc_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Outcome of a single part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Set on the first part only; parsing is shared by all parts
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Parse `input` once and solve the configured parts in order.
///
/// A parse failure aborts the run; a failing part is recorded and the
/// remaining parts still run.
pub fn run(
    registry: &SolverRegistry,
    config: &Config,
    input: &str,
) -> Result<Vec<SolverResult>, CliError> {
    let mut solver = registry.create_solver(config.year, config.day, input)?;
    let parts = select_parts(config.part_filter, solver.parts())?;
    debug!(year = config.year, day = config.day, ?parts, "running solver");

    let mut parse_duration = Some(solver.parse_duration());
    let results = parts
        .map(|part| {
            let (answer, solve_duration) = match solver.solve(part) {
                Ok(result) => (Ok(result.answer.clone()), result.duration()),
                Err(e) => {
                    warn!(part, error = %e, "part failed");
                    (Err(SolverError::from(e)), TimeDelta::zero())
                }
            };
            SolverResult {
                year: config.year,
                day: config.day,
                part,
                answer,
                parse_duration: parse_duration.take(),
                solve_duration,
            }
        })
        .collect();

    Ok(results)
}

fn select_parts(filter: Option<u8>, max_parts: u8) -> Result<RangeInclusive<u8>, CliError> {
    match filter {
        Some(p) if (1..=max_parts).contains(&p) => Ok(p..=p),
        Some(p) => Err(CliError::Config(format!(
            "part {} requested but the solver has {} part(s)",
            p, max_parts
        ))),
        None => Ok(1..=max_parts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::RegistryBuilder;
    use std::path::PathBuf;

    const EXAMPLE: &str = "seeds: 79 14 55 13\n\nseed-to-soil map:\n50 98 2\n52 50 48\n\nsoil-to-fertilizer map:\n0 15 37\n37 52 2\n39 0 15\n\nfertilizer-to-water map:\n49 53 8\n0 11 42\n42 0 7\n57 7 4\n\nwater-to-light map:\n88 18 7\n18 25 70\n\nlight-to-temperature map:\n45 77 23\n81 45 19\n68 64 13\n\ntemperature-to-humidity map:\n0 69 1\n1 0 69\n\nhumidity-to-location map:\n60 56 37\n56 93 4\n";

    fn registry() -> SolverRegistry {
        RegistryBuilder::new()
            .register_solver::<aoc_solutions::my_solutions::year_2023::day_5::Solver>(2023, 5)
            .unwrap()
            .build()
    }

    fn config(part_filter: Option<u8>) -> Config {
        Config {
            year: 2023,
            day: 5,
            part_filter,
            input_path: PathBuf::from("unused"),
            quiet: true,
        }
    }

    fn answers(results: &[SolverResult]) -> Vec<String> {
        results
            .iter()
            .map(|r| r.answer.as_ref().map_or_else(|e| e.to_string(), Clone::clone))
            .collect()
    }

    #[test]
    fn test_runs_all_parts_in_order() {
        let results = run(&registry(), &config(None), EXAMPLE).unwrap();
        assert_eq!(answers(&results), vec!["35", "46"]);
        assert_eq!(results.iter().map(|r| r.part).collect::<Vec<_>>(), vec![1, 2]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_part_filter() {
        let results = run(&registry(), &config(Some(2)), EXAMPLE).unwrap();
        assert_eq!(answers(&results), vec!["46"]);
    }

    #[test]
    fn test_failing_part_does_not_stop_others() {
        let input = "seeds: 7\n\nseed-to-soil map:\n1 7 1\n";
        let results = run(&registry(), &config(None), input).unwrap();
        assert_eq!(results[0].answer.as_deref().ok(), Some("1"));
        assert!(results[1].answer.is_err());
    }

    #[test]
    fn test_parse_failure_aborts() {
        let result = run(&registry(), &config(None), "not an almanac");
        assert!(matches!(
            result,
            Err(CliError::Solver(SolverError::ParseError(_)))
        ));
    }

    #[test]
    fn test_unknown_day_and_bad_part() {
        let mut missing = config(None);
        missing.day = 6;
        assert!(matches!(
            run(&registry(), &missing, EXAMPLE),
            Err(CliError::Solver(SolverError::NotFound(2023, 6)))
        ));

        assert!(matches!(select_parts(Some(3), 2), Err(CliError::Config(_))));
        assert_eq!(select_parts(None, 2).unwrap(), 1..=2);
    }
}
