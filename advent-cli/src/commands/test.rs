//! `advent test`: run a solution without submitting

use crate::commands::{display_path, format_duration, registry, report_missing};
use crate::commands::get::{EXAMPLE_INPUT_FILE, INPUT_FILE};
use crate::config::Config;
use crate::error::CliError;
use crate::palette::{Color, Palette};
use advent_runner::{
    ComputedAnswers, DEFAULT_SOLUTION, PartAnswer, PuzzleCoordinate, SolutionRegistry,
    compute_answers,
};
use std::path::{Path, PathBuf};

/// Which input a run should read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChoice {
    Puzzle,
    Example,
    /// Resolved against the puzzle directory first, then the current directory
    File(PathBuf),
}

/// Resolve the input file, or `None` if a requested file exists nowhere
pub fn resolve_input(dir: &Path, choice: &InputChoice) -> Option<PathBuf> {
    match choice {
        InputChoice::Puzzle => Some(dir.join(INPUT_FILE)),
        InputChoice::Example => Some(dir.join(EXAMPLE_INPUT_FILE)),
        InputChoice::File(file) => {
            let in_dir = dir.join(file);
            if in_dir.exists() {
                Some(in_dir)
            } else if file.exists() {
                Some(file.clone())
            } else {
                None
            }
        }
    }
}

/// Check the puzzle directory and the solution exist, reporting either if not
///
/// Returns the puzzle directory when the run can go ahead.
pub(crate) fn check_runnable(
    config: &Config,
    registry: &SolutionRegistry,
    palette: &Palette,
    coordinate: PuzzleCoordinate,
    solution_name: &str,
) -> Option<PathBuf> {
    let dir = config.puzzle_dir(coordinate);
    if !dir.exists() {
        report_missing(palette, "Directory", &dir);
        return None;
    }

    if !registry.contains(coordinate, solution_name) {
        report_missing(
            palette,
            "Solution file",
            &dir.join(format!("{solution_name}.rs")),
        );
        let registered = registry.names(coordinate);
        if !registered.is_empty() {
            palette.println(
                &format!("Registered for {coordinate}: {}", registered.join(", ")),
                Color::Grey,
            );
        }
        return None;
    }

    if solution_name != DEFAULT_SOLUTION {
        palette.println(&format!("(Using {solution_name}.rs)"), Color::Red);
    }
    Some(dir)
}

/// Lines showing the answers of a run, or `None` if part 1 is missing
pub fn answer_lines(answers: &ComputedAnswers, palette: &Palette) -> Option<Vec<String>> {
    let PartAnswer::Solved(part1) = &answers.part1 else {
        return None;
    };
    let mut lines = vec![format!("{} {part1}", palette.paint("Part 1:", Color::Cyan))];
    if let PartAnswer::Solved(part2) = &answers.part2 {
        lines.push(format!("{} {part2}", palette.paint("Part 2:", Color::Yellow)));
    }
    Some(lines)
}

pub fn run(
    config: &Config,
    palette: &Palette,
    coordinate: PuzzleCoordinate,
    input: InputChoice,
    solution_name: &str,
) -> Result<(), CliError> {
    let registry = registry()?;
    let Some(dir) = check_runnable(config, &registry, palette, coordinate, solution_name) else {
        return Ok(());
    };

    let input_path = match resolve_input(&dir, &input) {
        Some(path) if path.exists() => path,
        Some(path) => {
            report_missing(palette, "Input file", &path);
            return Ok(());
        }
        None => {
            let requested = match &input {
                InputChoice::File(file) => dir.join(file),
                _ => dir.clone(),
            };
            report_missing(palette, "Input file", &requested);
            return Ok(());
        }
    };
    println!("Using input file: {}", display_path(&input_path).display());

    let answers = compute_answers(&registry, coordinate, &input_path, solution_name)?;
    let Some(lines) = answer_lines(&answers, palette) else {
        palette.println("No solution implemented", Color::Red);
        return Ok(());
    };
    for line in lines {
        println!("{line}");
    }
    palette.println(
        &format!("(finished in {})", format_duration(answers.elapsed)),
        Color::Grey,
    );

    if solution_name != DEFAULT_SOLUTION {
        let reference = compute_answers(&registry, coordinate, &input_path, DEFAULT_SOLUTION)?;
        if answers.same_answers(&reference) {
            palette.println("Output matches solution.rs", Color::Green);
        } else {
            palette.println("Output does not match solution.rs", Color::Red);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_default_and_example() {
        let dir = Path::new("2021/01");
        assert_eq!(
            resolve_input(dir, &InputChoice::Puzzle),
            Some(PathBuf::from("2021/01/input.txt"))
        );
        assert_eq!(
            resolve_input(dir, &InputChoice::Example),
            Some(PathBuf::from("2021/01/example_input.txt"))
        );
    }

    #[test]
    fn test_resolve_file_prefers_puzzle_dir() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("2021/01");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("small.txt"), "1\n").unwrap();

        assert_eq!(
            resolve_input(&dir, &InputChoice::File(PathBuf::from("small.txt"))),
            Some(dir.join("small.txt"))
        );
    }

    #[test]
    fn test_resolve_file_falls_back_to_given_path() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("2021/01");
        let elsewhere = root.path().join("other.txt");
        std::fs::write(&elsewhere, "1\n").unwrap();

        assert_eq!(
            resolve_input(&dir, &InputChoice::File(elsewhere.clone())),
            Some(elsewhere)
        );
        assert_eq!(
            resolve_input(&dir, &InputChoice::File(PathBuf::from("missing.txt"))),
            None
        );
    }

    #[test]
    fn test_answer_lines() {
        let palette = Palette::new(false);
        let both = ComputedAnswers {
            part1: PartAnswer::Solved("36".into()),
            part2: PartAnswer::Solved("8".into()),
            elapsed: TimeDelta::zero(),
        };
        assert_eq!(
            answer_lines(&both, &palette).unwrap(),
            vec!["Part 1: 36", "Part 2: 8"]
        );

        let first_only = ComputedAnswers {
            part2: PartAnswer::NotImplemented,
            ..both.clone()
        };
        assert_eq!(answer_lines(&first_only, &palette).unwrap(), vec!["Part 1: 36"]);

        let none = ComputedAnswers {
            part1: PartAnswer::NotImplemented,
            part2: PartAnswer::NotImplemented,
            elapsed: TimeDelta::zero(),
        };
        assert_eq!(answer_lines(&none, &palette), None);
    }
}
