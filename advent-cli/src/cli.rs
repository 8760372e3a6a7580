//! CLI argument parsing using clap

use advent_runner::{CoordinateError, DEFAULT_SOLUTION, FIRST_YEAR, PuzzleCoordinate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Advent of Code puzzle helper
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Fetch, test and submit Advent of Code puzzles", version)]
pub struct Args {
    /// Directory holding the YYYY/DD puzzle tree
    #[arg(long, global = true, default_value = "advent-solutions/src")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download prompt and input, generate solution template
    Get {
        #[command(subcommand)]
        target: GetTarget,
    },
    /// Show personal stats or private leaderboards
    Stats {
        /// Year to show stats for, defaults to the current year
        year: Option<u16>,

        /// Show private leaderboard(s)
        #[arg(short, long)]
        private: bool,
    },
    /// Run solution and output answers without submitting
    Test {
        /// The year and day in YYYY/DD format (e.g. "2021/01")
        date: PuzzleCoordinate,

        /// Use example_input.txt for input
        #[arg(short, long, conflicts_with = "input")]
        example: bool,

        /// Solution to run instead of solution.rs (e.g. "solution2")
        #[arg(short = 'f', long = "solution-file", default_value = DEFAULT_SOLUTION)]
        solution_file: String,

        /// Input file, relative to the puzzle directory or the current directory
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Run solution and submit answers
    Submit {
        /// The year and day in YYYY/DD format (e.g. "2021/01")
        date: PuzzleCoordinate,

        /// Solution to run instead of solution.rs (e.g. "solution2");
        /// only useful while answers are not yet submitted
        #[arg(short = 'f', long = "solution-file", default_value = DEFAULT_SOLUTION)]
        solution_file: String,
    },
    /// Display countdown to puzzle unlock
    Countdown {
        /// The year and day in YYYY/DD format (e.g. "2021/01")
        date: PuzzleCoordinate,
    },
}

#[derive(Subcommand, Debug)]
pub enum GetTarget {
    /// Download a puzzle, or every released puzzle of a year
    Puzzle {
        /// YYYY/DD (e.g. "2021/01") or YYYY for the whole year
        date: DateSpec,
    },
    /// Download the accepted answers of a puzzle
    Solution {
        /// The year and day in YYYY/DD format (e.g. "2021/01")
        date: PuzzleCoordinate,
    },
}

/// A single puzzle or a whole event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpec {
    Year(u16),
    Day(PuzzleCoordinate),
}

impl FromStr for DateSpec {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('/') {
            return s.parse().map(DateSpec::Day);
        }
        let year = s
            .trim()
            .parse::<u16>()
            .map_err(|_| CoordinateError::Format(s.to_string()))?;
        if year < FIRST_YEAR {
            return Err(CoordinateError::Year(year));
        }
        Ok(DateSpec::Year(year))
    }
}
