//! Solver registry: maps (year, day) to factories that parse input into solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Parses one input into a ready-to-solve, type-erased instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Collects factories, rejecting duplicate (year, day) pairs, then freezes
/// into a [`SolverRegistry`].
///
/// # Example
///
/// ```no_run
/// # use aoc_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), FactoryEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for one puzzle
    ///
    /// # Arguments
    /// * `year` - Event year
    /// * `day` - Puzzle day (1-25)
    /// * `parts` - Number of parts the produced solvers declare
    /// * `factory` - Parses an input into a solver instance
    ///
    /// # Returns
    /// * `Ok(Self)` - The builder, for chaining
    /// * `Err(RegistrationError::DuplicateSolver)` - `year`/`day` is already taken
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.solvers.insert(
            (year, day),
            FactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register a [`Solver`] type directly, wrapping it in a
    /// [`SolverInstance`] factory
    ///
    /// # Returns
    /// * `Err(RegistrationError::DuplicateSolver)` - `year`/`day` is already taken
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + Sync + 'static,
    {
        self.register(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
        })
    }

    /// Register every plugin submitted through `inventory`
    ///
    /// Only plugins linked into the current binary are visible.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins `filter` accepts
    ///
    /// # Arguments
    /// * `filter` - Called once per submitted [`SolverPlugin`]
    ///
    /// # Returns
    /// * `Err(RegistrationError::DuplicateSolver)` - Two accepted plugins share a day
    ///
    /// ```ignore
    /// // Only 2023 solvers tagged "ranges"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|p| p.year == 2023 && p.tags.contains(&"ranges"))?
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

/// Immutable lookup from (year, day) to solver factory
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), FactoryEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `year`/`day`
    ///
    /// # Arguments
    /// * `year` - Event year
    /// * `day` - Puzzle day
    /// * `input` - Puzzle text; the returned solver may borrow from it
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Parsed and ready to solve
    /// * `Err(SolverError::NotFound)` - Nothing registered for that day
    /// * `Err(SolverError::ParseError)` - The solver rejected the input
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.solvers.contains_key(&(year, day))
    }

    /// Registered solvers in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.solvers.iter().map(|(&(year, day), entry)| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Object-safe hook that lets a `&'static` solver value register its own type
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }
}

/// A solver submitted for automatic registration, normally by
/// `#[derive(AutoRegisterSolver)]`
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used for filtering, e.g. "ranges" or a username
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
