//! The solution contract and its type-erased form

use crate::answer::Answer;
use crate::coordinate::Part;
use crate::error::{ParseError, RunError, SolveError};

/// Contract every puzzle solution implements
///
/// `parse_input` receives the raw input lines. The parsed `Data` is handed to
/// each part by value and is produced fresh for every part, so it may be a
/// lazy iterator without one part starving the other.
///
/// Parts that are not overridden report [`SolveError::NotImplemented`], which
/// the runner turns into [`PartAnswer::NotImplemented`](crate::PartAnswer).
///
/// # Example
///
/// ```
/// use advent_runner::{Answer, ParseError, Solution, SolveError};
///
/// struct Day1;
///
/// impl Solution for Day1 {
///     type Data = Vec<i64>;
///
///     fn parse_input(lines: Vec<String>) -> Result<Self::Data, ParseError> {
///         lines
///             .iter()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.clone())))
///             .collect()
///     }
///
///     fn part1(data: Self::Data) -> Result<Answer, SolveError> {
///         Ok(data.iter().sum::<i64>().into())
///     }
/// }
/// ```
pub trait Solution {
    /// Parsed form of the input
    type Data;

    /// Parse the raw input lines
    fn parse_input(lines: Vec<String>) -> Result<Self::Data, ParseError>;

    /// Solve part 1
    fn part1(_data: Self::Data) -> Result<Answer, SolveError> {
        Err(SolveError::NotImplemented)
    }

    /// Solve part 2
    fn part2(_data: Self::Data) -> Result<Answer, SolveError> {
        Err(SolveError::NotImplemented)
    }
}

/// Type-erased interface over any [`Solution`]
///
/// Solutions are unit structs, so the registry can hold them as
/// `&'static dyn DynSolution` and dispatch without knowing their `Data`.
pub trait DynSolution: Sync {
    /// Parse `lines` and run one part
    ///
    /// # Returns
    /// * `Ok(Answer)` - The part's raw return value, not yet normalized
    /// * `Err(RunError::Parse)` - `parse_input` failed
    /// * `Err(RunError::Solve)` - The part failed or is not implemented
    fn solve(&self, lines: &[String], part: Part) -> Result<Answer, RunError>;
}

impl<S> DynSolution for S
where
    S: Solution + Sync + 'static,
{
    fn solve(&self, lines: &[String], part: Part) -> Result<Answer, RunError> {
        let data = S::parse_input(lines.to_vec())?;
        let answer = match part {
            Part::One => S::part1(data),
            Part::Two => S::part2(data),
        };
        answer.map_err(|source| RunError::Solve { part, source })
    }
}
