//! Advent of Code Solution Runner
//!
//! Resolves a user's solution for a puzzle coordinate, feeds it the raw input
//! lines and normalizes whatever each part returns into a single answer.
//!
//! # Overview
//!
//! This library provides:
//! - The [`Solution`] contract: `parse_input`, `part1`, `part2`
//! - [`Answer`]: a direct value or a lazy trace whose last item is the answer
//! - A plugin registry keyed by `(year, day, name)`
//! - [`compute_answers`]: load, parse, solve, normalize
//!
//! # Quick Example
//!
//! ```
//! use advent_runner::{
//!     Answer, ParseError, PartAnswer, PuzzleCoordinate, RegistryBuilder, Solution, SolveError,
//!     run_solution, split_lines,
//! };
//!
//! pub struct MyDay1;
//!
//! impl Solution for MyDay1 {
//!     type Data = Vec<i32>;
//!
//!     fn parse_input(lines: Vec<String>) -> Result<Self::Data, ParseError> {
//!         lines
//!             .iter()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//!
//!     fn part1(data: Self::Data) -> Result<Answer, SolveError> {
//!         Ok(data.iter().sum::<i32>().into())
//!     }
//! }
//!
//! let coordinate = PuzzleCoordinate::new(2023, 1).unwrap();
//! let registry = RegistryBuilder::new()
//!     .register(coordinate, "solution", &MyDay1)
//!     .unwrap()
//!     .build();
//!
//! let solution = registry.load(coordinate, "solution").unwrap();
//! let answers = run_solution(solution, &split_lines("1\n2\n3\n")).unwrap();
//! assert_eq!(answers.part1, PartAnswer::Solved("6".to_string()));
//! assert_eq!(answers.part2, PartAnswer::NotImplemented);
//! ```
//!
//! # Registering Solutions
//!
//! Use `#[derive(AutoRegisterSolution)]` to register at link time:
//! ```ignore
//! #[derive(AutoRegisterSolution)]
//! #[solution(year = 2023, day = 1)]
//! struct Day1;
//! ```
//! and pick them up with [`RegistryBuilder::register_all_plugins`].

mod answer;
mod coordinate;
mod error;
mod registry;
mod runner;
mod solution;

// Re-export public API
pub use answer::{Answer, PartAnswer};
pub use coordinate::{DAYS_PER_YEAR, FIRST_YEAR, Part, PuzzleCoordinate};
pub use error::{CoordinateError, LoadError, ParseError, RegistrationError, RunError, SolveError};
pub use registry::{DEFAULT_SOLUTION, RegistryBuilder, SolutionPlugin, SolutionRegistry};
pub use runner::{ComputedAnswers, compute_answers, read_input_lines, run_solution, split_lines};
pub use solution::{DynSolution, Solution};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use advent_runner_macros::AutoRegisterSolution;
