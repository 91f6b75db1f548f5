//! Parsed puzzle instances, step timing, and the type-erased view the
//! registry hands out

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// Wall-clock start and end of one measured step (parsing or one part)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    /// Run `step` and record when it started and finished
    ///
    /// # Arguments
    /// * `step` - The work to measure
    ///
    /// # Returns
    /// Whatever `step` returned, paired with its timing
    pub fn measure<T>(step: impl FnOnce() -> T) -> (T, Self) {
        let start = Utc::now();
        let value = step();
        let end = Utc::now();
        (value, Self { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer to one part
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

/// One puzzle input, parsed once by solver `S`; every part then reads and
/// updates the same shared data
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_timing: Timing,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` for the puzzle `year`/`day`
    ///
    /// # Arguments
    /// * `year` - Event year, e.g. 2023
    /// * `day` - Puzzle day (1-25)
    /// * `input` - Raw puzzle text; the shared data may borrow from it
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Parsed, with the parse step timed
    /// * `Err(ParseError)` - `S` rejected the input
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (parsed, parse_timing) = Timing::measure(|| S::parse(input));
        let shared = parsed.inspect_err(|e| debug!(year, day, error = %e, "input rejected"))?;
        debug!(
            year,
            day,
            bytes = input.len(),
            elapsed = %parse_timing.duration(),
            "parsed puzzle input"
        );

        Ok(Self {
            year,
            day,
            shared,
            parse_timing,
        })
    }

    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Object-safe view of a [`SolverInstance`], so the registry can return
/// instances of different solver types behind one pointer type
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run(mut solver: Box<dyn DynSolver + '_>) -> Result<(), aoc_solver::SolveError> {
///     println!("parsed in {}", solver.parse_duration());
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} ({})", result.part, result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve one part against the parsed input
    ///
    /// # Arguments
    /// * `part` - Part number, `1..=parts()`
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The answer and how long it took
    /// * `Err(SolveError::PartOutOfRange)` - `part` is outside `1..=parts()`
    /// * `Err(SolveError)` - The part is missing or failed on this input
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing started and finished
    fn parse_timing(&self) -> Timing;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts the underlying solver declares
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_timing().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        let (answer, timing) = Timing::measure(|| S::solve_part_checked_range(shared, part));
        let answer = answer?;
        debug!(
            year = self.year,
            day = self.day,
            part,
            %answer,
            elapsed = %timing.duration(),
            "solved part"
        );

        Ok(SolveResult {
            part,
            answer,
            timing,
        })
    }

    fn parse_timing(&self) -> Timing {
        self.parse_timing
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
