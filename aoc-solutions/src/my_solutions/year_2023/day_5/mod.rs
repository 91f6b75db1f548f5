//! 2023 day 5: If You Give A Seed A Fertilizer
//!
//! Seeds go through a chain of piecewise-linear maps (seed → soil → … →
//! location). Part 1 maps individual seeds; part 2 reads the seed line as
//! `(start, length)` pairs and maps whole ranges at once.

mod almanac;
mod range;
mod translate;

pub use almanac::{
    Almanac, AlmanacParseError, Chain, ChainError, MappingInterval, SEED_CATEGORY, Stage, Stages,
};
pub use range::{NumericRange, RangeSplit};
pub use translate::{
    SplitStrategy, translate_range_through_chain, translate_scalar, translate_stage_intervals,
};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["ranges", "parsing"])]
pub struct Solver;

/// The parsed almanac doesn't satisfy what a part needs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("the almanac lists no seeds")]
    EmptySeeds,
    #[error("seed ranges need (start, length) pairs but {0} seed numbers were listed")]
    OddSeedCount(usize),
    #[error("seed range starting at {start} has negative length {length}")]
    NegativeSeedLength { start: i64, length: i64 },
    #[error("seed range starting at {start} with length {length} overflows")]
    SeedRangeOverflow { start: i64, length: i64 },
    #[error("every seed range is empty")]
    NoSeedValues,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlmanacError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error(transparent)]
    Chain(#[from] ChainError),
}

impl From<AlmanacParseError> for ParseError {
    fn from(err: AlmanacParseError) -> Self {
        match err {
            AlmanacParseError::MissingSeeds | AlmanacParseError::MissingStages => {
                ParseError::MissingData(err.to_string())
            }
            _ => ParseError::InvalidFormat(err.to_string()),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.parse::<Almanac>()?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        part_one(shared)
            .map(|location| location.to_string())
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        part_two(shared)
            .map(|location| location.to_string())
            .map_err(SolveError::failed)
    }
}

/// Lowest location any listed seed maps to
pub fn part_one(almanac: &Almanac) -> Result<i64, AlmanacError> {
    if almanac.seeds.is_empty() {
        return Err(PreconditionError::EmptySeeds.into());
    }
    let chain = almanac.stages.chain_from(SEED_CATEGORY)?;

    let lowest = almanac
        .seeds
        .iter()
        .map(|&seed| chain.translate(seed))
        .min()
        .ok_or(PreconditionError::EmptySeeds)?;
    Ok(lowest)
}

/// Lowest location any seed in the seed ranges maps to
pub fn part_two(almanac: &Almanac) -> Result<i64, AlmanacError> {
    part_two_with(almanac, SplitStrategy::FullPartition)
}

/// [`part_two`] with an explicit splitting strategy
pub fn part_two_with(almanac: &Almanac, strategy: SplitStrategy) -> Result<i64, AlmanacError> {
    let seed_ranges = seed_ranges(&almanac.seeds)?;
    let chain = almanac.stages.chain_from(SEED_CATEGORY)?;

    let lowest = seed_ranges
        .into_iter()
        .filter_map(|seeds| {
            let locations = chain.translate_range(seeds, strategy);
            debug!(%seeds, ranges = locations.len(), "mapped seed range");
            locations.iter().map(NumericRange::start).min()
        })
        .min()
        .ok_or(PreconditionError::NoSeedValues)?;
    Ok(lowest)
}

/// Read the seed line as `(start, length)` pairs; zero-length pairs are dropped
pub fn seed_ranges(seeds: &[i64]) -> Result<Vec<NumericRange>, PreconditionError> {
    if seeds.is_empty() {
        return Err(PreconditionError::EmptySeeds);
    }
    if seeds.len() % 2 != 0 {
        return Err(PreconditionError::OddSeedCount(seeds.len()));
    }

    seeds
        .iter()
        .copied()
        .tuples::<(i64, i64)>()
        .filter_map(|(start, length)| match length {
            0 => None,
            _ if length < 0 => Some(Err(PreconditionError::NegativeSeedLength { start, length })),
            _ => Some(
                NumericRange::new(start, length)
                    .ok_or(PreconditionError::SeedRangeOverflow { start, length }),
            ),
        })
        .collect()
}
