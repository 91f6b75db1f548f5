//! The almanac: seed numbers plus a chain of category-to-category maps
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! ```
//!
//! Each map line is `destination_start source_start length`, and every number
//! in the almanac is a non-negative integer.

use super::range::NumericRange;
use itertools::Itertools;
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Category every chain walk starts from
pub const SEED_CATEGORY: &str = "seed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlmanacParseError {
    #[error("expected a `seeds:` line at the start of the almanac")]
    MissingSeeds,
    #[error("expected at least one `<source>-to-<destination> map:` block after the seeds")]
    MissingStages,
    #[error("malformed map header {line:?}, expected `<source>-to-<destination> map:`")]
    MalformedHeader { line: String },
    #[error("in {section}: {token:?} is not an integer")]
    InvalidNumber { section: String, token: String },
    #[error("in {section}: line {line:?} has {found} fields, expected 3")]
    WrongFieldCount {
        section: String,
        line: String,
        found: usize,
    },
    #[error("in {section}: {token:?} is negative")]
    NegativeNumber { section: String, token: String },
    #[error("in {section}: line {line:?} overflows the number range")]
    Overflow { section: String, line: String },
    #[error("more than one map starts from category {source_name:?}")]
    DuplicateStage { source_name: String },
}

/// One map line: `[source_start, source_start + length)` lands on
/// `[destination_start, destination_start + length)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingInterval {
    pub destination_start: i64,
    pub source_start: i64,
    pub length: i64,
}

impl MappingInterval {
    /// Source span, `None` for a zero-length line
    pub fn source_range(&self) -> Option<NumericRange> {
        NumericRange::new(self.source_start, self.length)
    }

    /// Distance a covered value moves
    pub fn offset(&self) -> i64 {
        self.destination_start - self.source_start
    }

    /// Mapped value, or `None` when `value` is outside the source span
    pub fn translate(&self, value: i64) -> Option<i64> {
        self.source_range()
            .filter(|range| range.contains(value))
            .map(|_| value + self.offset())
    }
}

/// A `<source>-to-<destination> map:` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub source: String,
    pub destination: String,
    /// Tested in listed order, first match wins
    pub intervals: Vec<MappingInterval>,
}

impl Stage {
    /// Translate one value; values no interval covers map to themselves
    pub fn translate(&self, value: i64) -> i64 {
        self.intervals
            .iter()
            .find_map(|interval| interval.translate(value))
            .unwrap_or(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("map chain loops back through category {at:?}")]
    Cycle { at: String },
}

/// Stages keyed by their source category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stages {
    by_source: HashMap<String, Stage>,
}

impl Stages {
    /// Collect stages, rejecting a second map from the same source category
    pub fn try_from_stages<I>(stages: I) -> Result<Self, AlmanacParseError>
    where
        I: IntoIterator<Item = Stage>,
    {
        stages.into_iter().try_fold(Self::default(), |mut acc, stage| {
            acc.insert(stage)?;
            Ok(acc)
        })
    }

    pub fn insert(&mut self, stage: Stage) -> Result<(), AlmanacParseError> {
        if self.by_source.contains_key(&stage.source) {
            return Err(AlmanacParseError::DuplicateStage {
                source_name: stage.source,
            });
        }
        self.by_source.insert(stage.source.clone(), stage);
        Ok(())
    }

    pub fn get(&self, source: &str) -> Option<&Stage> {
        self.by_source.get(source)
    }

    pub fn len(&self) -> usize {
        self.by_source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_source.is_empty()
    }

    /// Follow `destination` names from `start` until a category with no
    /// outgoing map.
    ///
    /// A linear chain can't visit more stages than exist, so needing one
    /// more step than that means the names loop.
    pub fn chain_from<'a>(&'a self, start: &'a str) -> Result<Chain<'a>, ChainError> {
        let mut stages = Vec::new();
        let mut category = start;

        while let Some(stage) = self.by_source.get(category) {
            if stages.len() == self.by_source.len() {
                return Err(ChainError::Cycle {
                    at: category.to_string(),
                });
            }
            stages.push(stage);
            category = stage.destination.as_str();
        }

        debug!(start, terminal = category, steps = stages.len(), "resolved map chain");
        Ok(Chain {
            stages,
            terminal: category,
        })
    }
}

/// Stages in the order a value passes through them
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    stages: Vec<&'a Stage>,
    terminal: &'a str,
}

impl<'a> Chain<'a> {
    pub fn stages(&self) -> &[&'a Stage] {
        &self.stages
    }

    /// Category the chain ends in, e.g. `location`
    pub fn terminal(&self) -> &'a str {
        self.terminal
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Parsed puzzle input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<i64>,
    pub stages: Stages,
}

impl FromStr for Almanac {
    type Err = AlmanacParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lines = input.lines().map(str::trim);
        let chunks = lines.chunk_by(|line| line.is_empty());
        let blocks: Vec<Vec<&str>> = chunks
            .into_iter()
            .filter(|(blank, _)| !blank)
            .map(|(_, block)| block.collect())
            .collect();

        let (seed_block, stage_blocks) = blocks
            .split_first()
            .ok_or(AlmanacParseError::MissingSeeds)?;
        let seeds = parse_seeds(seed_block)?;

        if stage_blocks.is_empty() {
            return Err(AlmanacParseError::MissingStages);
        }
        let stages = Stages::try_from_stages(
            stage_blocks
                .iter()
                .map(|block| parse_stage(block))
                .collect::<Result<Vec<_>, _>>()?,
        )?;

        debug!(seeds = seeds.len(), stages = stages.len(), "parsed almanac");
        Ok(Almanac { seeds, stages })
    }
}

/// Non-negative values only, so any difference of two parsed numbers fits in `i64`
fn parse_number(section: &str, token: &str) -> Result<i64, AlmanacParseError> {
    let value: i64 = token
        .parse()
        .map_err(|_| AlmanacParseError::InvalidNumber {
            section: section.to_string(),
            token: token.to_string(),
        })?;
    if value < 0 {
        return Err(AlmanacParseError::NegativeNumber {
            section: section.to_string(),
            token: token.to_string(),
        });
    }
    Ok(value)
}

/// `seeds: 79 14 55 13`; numbers may continue on following lines of the block
fn parse_seeds(block: &[&str]) -> Result<Vec<i64>, AlmanacParseError> {
    let (first, rest) = block
        .split_first()
        .ok_or(AlmanacParseError::MissingSeeds)?;
    let numbers = first
        .strip_prefix("seeds:")
        .ok_or(AlmanacParseError::MissingSeeds)?;

    std::iter::once(numbers)
        .chain(rest.iter().copied())
        .flat_map(str::split_whitespace)
        .map(|token| parse_number("seeds", token))
        .collect()
}

fn parse_header(line: &str) -> Result<(String, String), AlmanacParseError> {
    let malformed = || AlmanacParseError::MalformedHeader {
        line: line.to_string(),
    };
    let (source, destination) = line
        .strip_suffix("map:")
        .map(str::trim_end)
        .and_then(|names| names.split_once("-to-"))
        .ok_or_else(malformed)?;

    let valid = |name: &str| !name.is_empty() && !name.contains(char::is_whitespace);
    if !valid(source) || !valid(destination) {
        return Err(malformed());
    }
    Ok((source.to_string(), destination.to_string()))
}

fn parse_interval(section: &str, line: &str) -> Result<MappingInterval, AlmanacParseError> {
    let fields: Vec<i64> = line
        .split_whitespace()
        .map(|token| parse_number(section, token))
        .collect::<Result<_, _>>()?;

    let [destination_start, source_start, length] = fields[..] else {
        return Err(AlmanacParseError::WrongFieldCount {
            section: section.to_string(),
            line: line.to_string(),
            found: fields.len(),
        });
    };
    if source_start.checked_add(length).is_none()
        || destination_start.checked_add(length).is_none()
    {
        return Err(AlmanacParseError::Overflow {
            section: section.to_string(),
            line: line.to_string(),
        });
    }

    Ok(MappingInterval {
        destination_start,
        source_start,
        length,
    })
}

fn parse_stage(block: &[&str]) -> Result<Stage, AlmanacParseError> {
    // blocks come from non-blank line groups, so there is always a header
    let Some((header, lines)) = block.split_first() else {
        return Err(AlmanacParseError::MissingStages);
    };
    let (source, destination) = parse_header(header)?;
    let section = format!("{source}-to-{destination} map");

    let intervals = lines
        .iter()
        .map(|line| parse_interval(&section, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Stage {
        source,
        destination,
        intervals,
    })
}
