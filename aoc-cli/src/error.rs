//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Puzzle input couldn't be read
    #[error("Couldn't read puzzle input {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Some parts ran and failed; their errors were already reported
    #[error("{0} part(s) failed")]
    PartsFailed(usize),
}

impl CliError {
    /// Process exit status once the error has been reported
    ///
    /// Missing or unreadable input is reported on stderr but still ends the
    /// run normally; every other error exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InputUnavailable { .. } => 0,
            _ => 1,
        }
    }
}
