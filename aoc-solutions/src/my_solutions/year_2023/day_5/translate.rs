//! Moving values and ranges through the map chain

use super::almanac::{Chain, ChainError, SEED_CATEGORY, Stage, Stages};
use super::range::NumericRange;
use tracing::trace;

/// How a range is split against the intervals of one stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Partition against every interval in listed order. Leftovers are tested
    /// against the remaining intervals and earlier intervals win where they
    /// overlap, so every point lands where [`Stage::translate`] sends it.
    #[default]
    FullPartition,
    /// Apply only the first interval that overlaps the range and pass its
    /// leftovers through untouched. Matches `FullPartition` only when no
    /// leftover touches another interval of the same stage.
    FirstOverlap,
}

/// Translate `range` through one stage.
///
/// The output ranges are non-empty and their lengths sum to `range.length()`.
pub fn translate_stage_intervals(
    stage: &Stage,
    range: NumericRange,
    strategy: SplitStrategy,
) -> Vec<NumericRange> {
    match strategy {
        SplitStrategy::FullPartition => full_partition(stage, range),
        SplitStrategy::FirstOverlap => first_overlap(stage, range),
    }
}

fn full_partition(stage: &Stage, range: NumericRange) -> Vec<NumericRange> {
    let mut mapped = Vec::new();
    let mut unmapped = vec![range];

    for interval in &stage.intervals {
        if unmapped.is_empty() {
            break;
        }
        let Some(window) = interval.source_range() else {
            continue;
        };

        let mut remaining = Vec::with_capacity(unmapped.len() + 1);
        for piece in unmapped {
            let split = piece.split_around(window);
            mapped.extend(split.overlap.map(|r| r.shifted(interval.offset())));
            remaining.extend(split.leftovers());
        }
        unmapped = remaining;
    }

    mapped.extend(unmapped);
    mapped
}

fn first_overlap(stage: &Stage, range: NumericRange) -> Vec<NumericRange> {
    let hit = stage.intervals.iter().find_map(|interval| {
        let split = range.split_around(interval.source_range()?);
        let overlap = split.overlap?;
        Some((overlap.shifted(interval.offset()), split))
    });

    match hit {
        Some((translated, split)) => std::iter::once(translated)
            .chain(split.leftovers())
            .collect(),
        None => vec![range],
    }
}

impl Chain<'_> {
    /// Value in the terminal category for `value` in the start category
    pub fn translate(&self, value: i64) -> i64 {
        self.stages()
            .iter()
            .fold(value, |value, stage| stage.translate(value))
    }

    /// Every range in the terminal category that `range` maps onto
    pub fn translate_range(
        &self,
        range: NumericRange,
        strategy: SplitStrategy,
    ) -> Vec<NumericRange> {
        self.stages().iter().fold(vec![range], |ranges, stage| {
            let next: Vec<NumericRange> = ranges
                .into_iter()
                .flat_map(|r| translate_stage_intervals(stage, r, strategy))
                .collect();
            trace!(stage = %stage.source, ranges = next.len(), "translated ranges");
            next
        })
    }
}

/// Walk `value` from the seed category to the terminal category
pub fn translate_scalar(stages: &Stages, value: i64) -> Result<i64, ChainError> {
    Ok(stages.chain_from(SEED_CATEGORY)?.translate(value))
}

/// Walk `range` from the seed category to the terminal category
pub fn translate_range_through_chain(
    stages: &Stages,
    range: NumericRange,
    strategy: SplitStrategy,
) -> Result<Vec<NumericRange>, ChainError> {
    Ok(stages
        .chain_from(SEED_CATEGORY)?
        .translate_range(range, strategy))
}
