//! Error types for the runner library

use crate::coordinate::{Part, PuzzleCoordinate};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solution does not provide this part
    #[error("Part is not implemented")]
    NotImplemented,
    /// The part ran and failed
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error as a genuine solve failure
    pub fn failed(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        SolveError::Failed(error.into())
    }
}

/// Error type for resolving a solution in the registry
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// No solution registered under this coordinate and name
    #[error("Solution `{name}` not found for {coordinate}")]
    NotFound {
        coordinate: PuzzleCoordinate,
        name: String,
    },
}

/// Error type for running a solution against an input
#[derive(Debug, Error)]
pub enum RunError {
    /// The solution could not be resolved
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The input file could not be read
    #[error("Failed to read input file {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// `parse_input` failed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// A part failed with something other than "not implemented"
    #[error("Part {part} failed: {source}")]
    Solve {
        part: Part,
        #[source]
        source: SolveError,
    },
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two solutions claim the same coordinate and name
    #[error("Duplicate solution `{name}` registered for {coordinate}")]
    DuplicateSolution {
        coordinate: PuzzleCoordinate,
        name: &'static str,
    },
    /// The plugin's year or day is not a valid coordinate
    #[error("Invalid coordinate for solution `{name}`: {source}")]
    InvalidCoordinate {
        name: &'static str,
        #[source]
        source: CoordinateError,
    },
}

/// Error type for parsing and validating puzzle coordinates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    /// Input was not `YYYY/DD`
    #[error("Invalid date format `{0}`. Please use YYYY/DD format.")]
    Format(String),
    /// Year before the first event
    #[error("Year {0} is not supported (first event was {first})", first = crate::coordinate::FIRST_YEAR)]
    Year(u16),
    /// Day outside 1-25
    #[error("Day {0} is out of range (1-25)")]
    Day(u8),
}
