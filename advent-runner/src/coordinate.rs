//! Puzzle coordinates and part numbers

use crate::error::CoordinateError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// First year the event ran
pub const FIRST_YEAR: u16 = 2015;
/// Days per event (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// A `(year, day)` pair identifying one puzzle
///
/// Parsed from `YYYY/DD` and validated on construction, so every coordinate
/// in circulation has a day in `1..=25` and a year the site has puzzles for.
///
/// # Example
///
/// ```
/// use advent_runner::PuzzleCoordinate;
///
/// let coordinate: PuzzleCoordinate = "2021/01".parse().unwrap();
/// assert_eq!(coordinate.year(), 2021);
/// assert_eq!(coordinate.day(), 1);
/// assert_eq!(coordinate.to_string(), "2021/01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleCoordinate {
    year: u16,
    day: u8,
}

impl PuzzleCoordinate {
    /// Create a validated coordinate
    pub fn new(year: u16, day: u8) -> Result<Self, CoordinateError> {
        if year < FIRST_YEAR {
            return Err(CoordinateError::Year(year));
        }
        if day == 0 || day > DAYS_PER_YEAR {
            return Err(CoordinateError::Day(day));
        }
        Ok(Self { year, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Relative directory holding this puzzle's files: `{year}/{day:02}`
    pub fn dir(&self) -> PathBuf {
        PathBuf::from(self.year.to_string()).join(format!("{:02}", self.day))
    }
}

impl fmt::Display for PuzzleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}

impl FromStr for PuzzleCoordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || CoordinateError::Format(s.to_string());
        let (year, day) = s.trim().split_once('/').ok_or_else(format_err)?;
        let year = year.parse::<u16>().map_err(|_| format_err())?;
        let day = day.parse::<u8>().map_err(|_| format_err())?;
        Self::new(year, day)
    }
}

/// One of the two parts of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// The part number as the site expects it (`level` form field)
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
