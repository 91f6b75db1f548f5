use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, DynSolver, ParseError, PartSolver, RegistryBuilder, SolveError,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 24, tags = ["macro-test", "words"])]
struct WordStats;

#[derive(Debug)]
struct SharedData<'a> {
    words: Vec<&'a str>,
    longest: Option<usize>,
}

impl AocParser for WordStats {
    type SharedData<'a> = SharedData<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(SharedData {
            words,
            longest: None,
        })
    }
}

impl PartSolver<1> for WordStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared.words.iter().map(|w| w.len()).max().unwrap_or(0);
        shared.longest = Some(longest);
        Ok(shared.words.len().to_string())
    }
}

impl PartSolver<2> for WordStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // reuse part 1's work when it already ran
        let longest = shared
            .longest
            .unwrap_or_else(|| shared.words.iter().map(|w| w.len()).max().unwrap_or(0));
        Ok(longest.to_string())
    }
}

#[test]
fn test_plugin_is_discovered_by_tag() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    let info = registry.iter_info().next().unwrap();
    assert_eq!((info.year, info.day, info.parts), (2015, 24, 2));
}

#[test]
fn test_dependent_parts_share_data() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2015 && plugin.day == 24)
        .unwrap()
        .build();

    let mut solver = registry
        .create_solver(2015, 24, "alpha be gamma")
        .unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "5");
}

#[test]
fn test_part_two_runs_without_part_one() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"words"))
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2015, 24, "a bcd").unwrap();
    assert_eq!(solver.solve(2).unwrap().answer, "3");
}

#[test]
fn test_parse_error_surfaces_through_registry() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert!(registry.create_solver(2015, 24, "   ").is_err());
}
