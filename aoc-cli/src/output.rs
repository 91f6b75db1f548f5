//! Output formatting for solver results

use crate::runner::SolverResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Answers go to stdout, errors to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.answer_line(result)) {
            (_, Some(line)) => println!("{}", line),
            (Err(e), None) if self.quiet => eprintln!("Error: {}", e),
            (Err(e), None) => eprintln!("{}: Error - {}", prefix(result), e),
            (Ok(_), None) => {}
        }
    }

    /// Stdout line for a solved part: the bare answer in quiet mode, the
    /// labelled and timed line otherwise. `None` for a failed part.
    fn answer_line(&self, result: &SolverResult) -> Option<String> {
        let answer = result.answer.as_ref().ok()?;
        if self.quiet {
            Some(answer.clone())
        } else {
            Some(format_full(result))
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;
        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

fn prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `2023/05 Part 1: 35 (parse: 12µs, solve: 3µs)`
fn format_full(result: &SolverResult) -> String {
    let answer = result.answer.as_deref().unwrap_or_default();
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();

    format!(
        "{}: {} ({}solve: {})",
        prefix(result),
        answer,
        parse_timing,
        format_duration(result.solve_duration)
    )
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros.unsigned_abs())
}

fn format_std_duration(d: std::time::Duration) -> String {
    format_micros(u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
}

fn format_micros(micros: u64) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result(part: u8, parse_micros: Option<i64>) -> SolverResult {
        SolverResult {
            year: 2023,
            day: 5,
            part,
            answer: Ok("35".to_string()),
            parse_duration: parse_micros.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::microseconds(1500),
        }
    }

    #[test]
    fn test_format_full_line() {
        assert_eq!(
            format_full(&result(1, Some(12))),
            "2023/05 Part 1: 35 (parse: 12µs, solve: 1.50ms)"
        );
        assert_eq!(
            format_full(&result(2, None)),
            "2023/05 Part 2: 35 (solve: 1.50ms)"
        );
    }

    #[test]
    fn test_quiet_mode_prints_one_bare_answer_per_part() {
        let quiet = OutputFormatter::new(true);
        let mut part_two = result(2, None);
        part_two.answer = Ok("46".to_string());
        let mut failed = result(2, None);
        failed.answer = Err(aoc_solver::SolverError::NotFound(2023, 5));

        let lines: Vec<String> = [result(1, Some(12)), part_two]
            .iter()
            .filter_map(|r| quiet.answer_line(r))
            .collect();
        assert_eq!(lines, vec!["35", "46"]);
        assert_eq!(quiet.answer_line(&failed), None);

        let full = OutputFormatter::new(false);
        assert_eq!(
            full.answer_line(&result(1, Some(12))).as_deref(),
            Some("2023/05 Part 1: 35 (parse: 12µs, solve: 1.50ms)")
        );
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(2_500)), "2.50ms");
        assert_eq!(format_duration(TimeDelta::seconds(3)), "3.00s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
        assert_eq!(
            format_std_duration(std::time::Duration::from_millis(20)),
            "20.00ms"
        );
    }

    proptest! {
        #[test]
        fn prop_negative_durations_mirror_positive(micros in 1i64..10_000_000_000) {
            let positive = format_duration(TimeDelta::microseconds(micros));
            let negative = format_duration(TimeDelta::microseconds(-micros));
            prop_assert_eq!(negative, format!("-{}", positive));
        }
    }
}
