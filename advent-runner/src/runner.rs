//! Running a solution against an input file

use crate::answer::PartAnswer;
use crate::coordinate::{Part, PuzzleCoordinate};
use crate::error::{RunError, SolveError};
use crate::registry::SolutionRegistry;
use crate::solution::DynSolution;
use chrono::{TimeDelta, Utc};
use std::path::Path;

/// Normalized answers for both parts of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedAnswers {
    pub part1: PartAnswer,
    pub part2: PartAnswer,
    /// Wall time spent parsing and solving both parts
    pub elapsed: TimeDelta,
}

impl ComputedAnswers {
    /// The highest-numbered implemented part and its answer
    pub fn latest(&self) -> Option<(Part, &str)> {
        self.part2
            .as_deref()
            .map(|answer| (Part::Two, answer))
            .or_else(|| self.part1.as_deref().map(|answer| (Part::One, answer)))
    }

    /// Whether both parts agree with another run, ignoring timing
    pub fn same_answers(&self, other: &ComputedAnswers) -> bool {
        self.part1 == other.part1 && self.part2 == other.part2
    }
}

/// Load a solution and run it against the input file at `input_path`
///
/// # Arguments
/// * `registry` - Registry to resolve the solution from
/// * `coordinate` - The puzzle to solve
/// * `input_path` - File whose lines are fed to `parse_input`
/// * `solution_name` - `solution` or an alternate name such as `solution2`
///
/// # Returns
/// * `Ok(ComputedAnswers)` - Both parts, either of which may be not implemented
/// * `Err(RunError::Load)` - No such solution is registered
/// * `Err(RunError::Input)` - The input file could not be read
/// * `Err(RunError::Parse | RunError::Solve)` - The solution itself failed
pub fn compute_answers(
    registry: &SolutionRegistry,
    coordinate: PuzzleCoordinate,
    input_path: &Path,
    solution_name: &str,
) -> Result<ComputedAnswers, RunError> {
    let solution = registry.load(coordinate, solution_name)?;
    let lines = read_input_lines(input_path)?;
    tracing::debug!(
        %coordinate,
        solution = solution_name,
        input = %input_path.display(),
        lines = lines.len(),
        "running solution"
    );
    run_solution(solution, &lines)
}

/// Run an already resolved solution against input lines
///
/// Part 2 only runs when part 1 is implemented. Only a missing part is
/// recovered from; every other failure propagates.
pub fn run_solution(
    solution: &dyn DynSolution,
    lines: &[String],
) -> Result<ComputedAnswers, RunError> {
    let start = Utc::now();
    let part1 = solve_part(solution, lines, Part::One)?;
    let part2 = if part1.is_implemented() {
        solve_part(solution, lines, Part::Two)?
    } else {
        PartAnswer::NotImplemented
    };
    let elapsed = Utc::now() - start;

    Ok(ComputedAnswers {
        part1,
        part2,
        elapsed,
    })
}

/// Read a file as lines with terminators stripped
pub fn read_input_lines(path: &Path) -> Result<Vec<String>, RunError> {
    let content = std::fs::read_to_string(path).map_err(|source| RunError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&content))
}

/// Split text on line terminators, keeping blank lines
///
/// A single trailing terminator does not produce an extra empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

fn solve_part(
    solution: &dyn DynSolution,
    lines: &[String],
    part: Part,
) -> Result<PartAnswer, RunError> {
    match solution.solve(lines, part) {
        Ok(answer) => Ok(answer.resolve()),
        Err(RunError::Solve {
            source: SolveError::NotImplemented,
            ..
        }) => {
            tracing::debug!(%part, "part not implemented");
            Ok(PartAnswer::NotImplemented)
        }
        Err(e) => Err(e),
    }
}
