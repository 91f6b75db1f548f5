//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data every part works from.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("1\n2").unwrap(), vec![1, 2]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything parts want to cache between each other.
    ///
    /// The lifetime lets solvers borrow from the input instead of copying it.
    type SharedData<'a>;

    /// Parse the raw puzzle input
    ///
    /// # Arguments
    /// * `input` - Puzzle text as downloaded, including its trailing newline
    ///
    /// # Returns
    /// * `Ok(SharedData)` - Data every part starts from
    /// * `Err(ParseError)` - The text doesn't follow the puzzle's grammar
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement once per part and let `#[derive(AocSolver)]` wire the parts
/// into [`Solver::solve_part`].
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve part `N`
    ///
    /// # Arguments
    /// * `shared` - Parsed input; earlier parts may have cached results in it
    ///
    /// # Returns
    /// * `Ok(String)` - The answer as it would be submitted
    /// * `Err(SolveError)` - The part can't be answered for this input
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver: parsing plus runtime dispatch over its parts.
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve `part` against already parsed data.
    ///
    /// # Arguments
    /// * `shared` - Data produced by [`AocParser::parse`]
    /// * `part` - Part number to dispatch to
    ///
    /// # Returns
    /// * `Ok(String)` - The answer
    /// * `Err(SolveError::PartNotImplemented)` - No implementation for `part`
    /// * `Err(SolveError::SolveFailed)` - The part ran and failed
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point over [`Solver::solve_part`]
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects part numbers outside
    /// `1..=PARTS` before dispatching
    ///
    /// # Returns
    /// * `Err(SolveError::PartOutOfRange)` - `part` is 0 or above `PARTS`
    /// * Otherwise whatever [`Solver::solve_part`] returns
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
