//! Loading and running solutions against input files

use advent_runner::{
    Answer, LoadError, ParseError, Part, PartAnswer, PuzzleCoordinate, RegistryBuilder, RunError,
    Solution, SolutionRegistry, SolveError, compute_answers,
};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn parse_row(line: &str) -> Result<Vec<i64>, ParseError> {
    line.split(',')
        .map(|x| {
            x.trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("bad integer `{x}`")))
        })
        .collect()
}

/// Parses every row up front
struct Materialized;

impl Solution for Materialized {
    type Data = Vec<Vec<i64>>;

    fn parse_input(lines: Vec<String>) -> Result<Self::Data, ParseError> {
        lines.iter().map(|line| parse_row(line)).collect()
    }

    fn part1(data: Self::Data) -> Result<Answer, SolveError> {
        Ok(data.iter().flatten().sum::<i64>().into())
    }

    fn part2(data: Self::Data) -> Result<Answer, SolveError> {
        data.iter()
            .flatten()
            .last()
            .copied()
            .map(Answer::from)
            .ok_or_else(|| SolveError::failed("empty input"))
    }
}

/// Hands the parts a lazy row producer
struct Lazy;

impl Solution for Lazy {
    type Data = Box<dyn Iterator<Item = Vec<i64>>>;

    fn parse_input(lines: Vec<String>) -> Result<Self::Data, ParseError> {
        Ok(Box::new(
            lines
                .into_iter()
                .map(|line| parse_row(&line).unwrap_or_default()),
        ))
    }

    fn part1(data: Self::Data) -> Result<Answer, SolveError> {
        Ok(data.flatten().sum::<i64>().into())
    }

    fn part2(data: Self::Data) -> Result<Answer, SolveError> {
        Ok(Answer::trace(data.flatten()))
    }
}

/// Only part 1, answered through a trace of running row sums
struct PartOneOnly;

impl Solution for PartOneOnly {
    type Data = Vec<Vec<i64>>;

    fn parse_input(lines: Vec<String>) -> Result<Self::Data, ParseError> {
        lines.iter().map(|line| parse_row(line)).collect()
    }

    fn part1(data: Self::Data) -> Result<Answer, SolveError> {
        Ok(Answer::trace(data.into_iter().map(|row| row.iter().sum::<i64>())))
    }
}

/// Neither part
struct ParseOnly;

impl Solution for ParseOnly {
    type Data = Vec<String>;

    fn parse_input(lines: Vec<String>) -> Result<Self::Data, ParseError> {
        Ok(lines)
    }
}

/// Part 2 exists but fails
struct BrokenPartTwo;

impl Solution for BrokenPartTwo {
    type Data = Vec<String>;

    fn parse_input(lines: Vec<String>) -> Result<Self::Data, ParseError> {
        Ok(lines)
    }

    fn part1(data: Self::Data) -> Result<Answer, SolveError> {
        Ok(data.len().into())
    }

    fn part2(_: Self::Data) -> Result<Answer, SolveError> {
        Err(SolveError::failed("index out of range"))
    }
}

/// Parsing always fails
struct BrokenParse;

impl Solution for BrokenParse {
    type Data = ();

    fn parse_input(_: Vec<String>) -> Result<Self::Data, ParseError> {
        Err(ParseError::MissingData("nothing to see".into()))
    }

    fn part1(_: Self::Data) -> Result<Answer, SolveError> {
        Ok(1.into())
    }
}

fn coordinate(day: u8) -> PuzzleCoordinate {
    PuzzleCoordinate::new(2099, day).unwrap()
}

fn registry() -> SolutionRegistry {
    RegistryBuilder::new()
        .register(coordinate(1), "solution", &Materialized)
        .unwrap()
        .register(coordinate(2), "solution", &Lazy)
        .unwrap()
        .register(coordinate(3), "solution", &PartOneOnly)
        .unwrap()
        .register(coordinate(4), "solution", &ParseOnly)
        .unwrap()
        .register(coordinate(5), "solution", &BrokenPartTwo)
        .unwrap()
        .register(coordinate(6), "solution", &BrokenParse)
        .unwrap()
        .register(coordinate(1), "solution2", &Lazy)
        .unwrap()
        .build()
}

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("example_input.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

const ROWS: &str = "1,2,3,4\n5,6,7,8\n";

#[test]
fn test_materialized_data() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ROWS);

    let answers = compute_answers(&registry(), coordinate(1), &input, "solution").unwrap();
    assert_eq!(answers.part1, PartAnswer::Solved("36".into()));
    assert_eq!(answers.part2, PartAnswer::Solved("8".into()));
}

#[test]
fn test_lazy_data_gives_same_answers() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ROWS);
    let registry = registry();

    let lazy = compute_answers(&registry, coordinate(2), &input, "solution").unwrap();
    assert_eq!(lazy.part1, PartAnswer::Solved("36".into()));
    assert_eq!(lazy.part2, PartAnswer::Solved("8".into()));

    let materialized = compute_answers(&registry, coordinate(1), &input, "solution").unwrap();
    assert!(lazy.same_answers(&materialized));
}

#[test]
fn test_alternate_solution_name() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ROWS);

    let answers = compute_answers(&registry(), coordinate(1), &input, "solution2").unwrap();
    assert_eq!(answers.part2, PartAnswer::Solved("8".into()));
}

#[test]
fn test_trace_keeps_last_item_and_missing_part_two() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ROWS);

    let answers = compute_answers(&registry(), coordinate(3), &input, "solution").unwrap();
    // Row sums are 10 then 26; the last one is the answer
    assert_eq!(answers.part1, PartAnswer::Solved("26".into()));
    assert_eq!(answers.part2, PartAnswer::NotImplemented);
}

#[test]
fn test_no_parts_implemented() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ROWS);

    let answers = compute_answers(&registry(), coordinate(4), &input, "solution").unwrap();
    assert_eq!(answers.part1, PartAnswer::NotImplemented);
    assert_eq!(answers.part2, PartAnswer::NotImplemented);
    assert_eq!(answers.latest(), None);
}

#[test]
fn test_part_two_failure_propagates() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ROWS);

    let result = compute_answers(&registry(), coordinate(5), &input, "solution");
    assert!(matches!(
        result,
        Err(RunError::Solve {
            part: Part::Two,
            source: SolveError::Failed(_)
        })
    ));
}

#[test]
fn test_parse_failure_propagates() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ROWS);

    let result = compute_answers(&registry(), coordinate(6), &input, "solution");
    assert!(matches!(
        result,
        Err(RunError::Parse(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_missing_solution_is_not_found() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ROWS);

    let result = compute_answers(&registry(), coordinate(1), &input, "solution9");
    match result {
        Err(RunError::Load(LoadError::NotFound { name, .. })) => assert_eq!(name, "solution9"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("input.txt");

    let result = compute_answers(&registry(), coordinate(1), &missing, "solution");
    match result {
        Err(RunError::Input { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected Input error, got {:?}", other),
    }
}
