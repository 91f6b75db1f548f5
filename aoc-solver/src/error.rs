//! Error types shared by every solver

use thiserror::Error;

/// Failure while turning puzzle text into a solver's shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input doesn't follow the puzzle's grammar
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A section the puzzle requires is absent
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Failure while solving one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The part ran and failed, e.g. a precondition on the parsed data didn't hold
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Box any domain error as [`SolveError::SolveFailed`]
    pub fn failed<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SolveError::SolveFailed(Box::new(err))
    }
}

/// Failure looking up, parsing or solving through the registry
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Failure while building a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
}
