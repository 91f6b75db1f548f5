//! End-to-end and property tests for the 2023 day 5 almanac solver

use aoc_solutions::my_solutions::year_2023::day_5::{
    Almanac, MappingInterval, NumericRange, SplitStrategy, Stage, Stages, part_one, part_two,
    translate_scalar, translate_stage_intervals,
};
use aoc_solver::{DynSolver, RegistryBuilder};
use proptest::prelude::*;

const EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

#[test]
fn registered_solver_answers_example() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2023 && plugin.day == 5)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2023, 5, EXAMPLE).unwrap();
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "35");
    assert_eq!(solver.solve(2).unwrap().answer, "46");
}

#[test]
fn solving_is_repeatable() {
    let first: Almanac = EXAMPLE.parse().unwrap();
    let second: Almanac = EXAMPLE.parse().unwrap();
    assert_eq!(first, second);
    assert_eq!(part_one(&first), part_one(&second));
    assert_eq!(part_two(&first), part_two(&second));
    assert_eq!(part_two(&first), part_two(&first));
}

#[test]
fn precondition_failure_surfaces_as_solve_error() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"ranges"))
        .unwrap()
        .build();

    let mut solver = registry
        .create_solver(2023, 5, "seeds: 1 2 3\n\nseed-to-soil map:\n1 2 3\n")
        .unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "1");
    let err = solver.solve(2).unwrap_err();
    assert!(err.to_string().contains("3 seed numbers"), "{err}");
}

fn arb_interval() -> impl Strategy<Value = MappingInterval> {
    (0i64..200, 0i64..100, 0i64..40).prop_map(|(destination_start, source_start, length)| {
        MappingInterval {
            destination_start,
            source_start,
            length,
        }
    })
}

fn arb_stage() -> impl Strategy<Value = Stage> {
    prop::collection::vec(arb_interval(), 0..6).prop_map(|intervals| Stage {
        source: "seed".into(),
        destination: "location".into(),
        intervals,
    })
}

fn arb_range() -> impl Strategy<Value = NumericRange> {
    (0i64..150, 1i64..60).prop_map(|(start, length)| NumericRange::new(start, length).unwrap())
}

fn expand(ranges: &[NumericRange]) -> Vec<i64> {
    let mut values: Vec<i64> = ranges.iter().flat_map(|r| r.start()..r.end()).collect();
    values.sort_unstable();
    values
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A full partition sends every value exactly where scalar translation does,
    /// even with overlapping intervals.
    #[test]
    fn prop_full_partition_matches_pointwise(stage in arb_stage(), range in arb_range()) {
        let out = translate_stage_intervals(&stage, range, SplitStrategy::FullPartition);

        let mut expected: Vec<i64> = (range.start()..range.end()).map(|v| stage.translate(v)).collect();
        expected.sort_unstable();
        prop_assert_eq!(expand(&out), expected);
    }

    /// Both strategies conserve the number of values and never emit empty ranges.
    #[test]
    fn prop_length_is_conserved(stage in arb_stage(), range in arb_range()) {
        for strategy in [SplitStrategy::FullPartition, SplitStrategy::FirstOverlap] {
            let out = translate_stage_intervals(&stage, range, strategy);
            prop_assert!(out.iter().all(|r| r.length() > 0));
            prop_assert_eq!(out.iter().map(NumericRange::length).sum::<i64>(), range.length());
        }
    }

    /// A single interval maps covered values by its offset and leaves others alone.
    #[test]
    fn prop_single_interval_law(interval in arb_interval(), value in -50i64..300) {
        let stages = Stages::try_from_stages([Stage {
            source: "seed".into(),
            destination: "soil".into(),
            intervals: vec![interval],
        }])
        .unwrap();

        let covered = interval.source_start <= value && value < interval.source_start + interval.length;
        let expected = if covered {
            interval.destination_start + (value - interval.source_start)
        } else {
            value
        };
        prop_assert_eq!(translate_scalar(&stages, value), Ok(expected));
    }

    /// Part two over singleton seed ranges agrees with part one.
    #[test]
    fn prop_unit_ranges_agree_with_part_one(seeds in prop::collection::vec(0i64..120, 1..8)) {
        let example: Almanac = EXAMPLE.parse().unwrap();
        let as_points = Almanac { seeds: seeds.clone(), ..example.clone() };
        let as_ranges = Almanac {
            seeds: seeds.iter().flat_map(|&s| [s, 1]).collect(),
            ..example
        };
        prop_assert_eq!(part_one(&as_points), part_two(&as_ranges));
    }
}
