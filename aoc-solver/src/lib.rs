//! Advent of Code Solver Library
//!
//! A small trait-based framework for Advent of Code puzzles. Each puzzle is a
//! type that parses its input once into shared data and then solves one or
//! more parts from that data.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Numbers;
//!
//! impl AocParser for Numbers {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Numbers {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Numbers {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Numbers>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "3");
//! ```
//!
//! # Key Concepts
//!
//! - [`AocParser`] parses input into `SharedData`.
//! - [`PartSolver<N>`] solves part `N`; `#[derive(AocSolver)]` generates the
//!   [`Solver`] impl that dispatches a runtime part number to it.
//! - [`DynSolver`] is the type-erased, timed view of a parsed instance.
//! - `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] so binaries can
//!   find solvers with [`RegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{
    FactoryInfo, RegistryBuilder, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by code generated from the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
