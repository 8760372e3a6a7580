//! Solution file generation

use crate::error::CliError;
use advent_runner::PuzzleCoordinate;
use minijinja::{Environment, context};

const SOLUTION_TEMPLATE: &str = include_str!("../templates/solution.rs.j2");

/// Template engine wrapper around minijinja
pub struct Scaffold {
    env: Environment<'static>,
}

impl Scaffold {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_template("solution.rs", SOLUTION_TEMPLATE)
            .expect("solution template should be valid");
        Self { env }
    }

    /// Render a `solution.rs` skeleton registered for `coordinate`
    pub fn render_solution(
        &self,
        coordinate: PuzzleCoordinate,
        title: &str,
    ) -> Result<String, CliError> {
        let template = self.env.get_template("solution.rs")?;
        let rendered = template.render(context! {
            year => coordinate.year(),
            day => coordinate.day(),
            title => title,
            type_name => format!("Day{:02}", coordinate.day()),
        })?;
        Ok(rendered)
    }
}

impl Default for Scaffold {
    fn default() -> Self {
        Self::new()
    }
}

/// Module name a solution file is declared under, e.g. `y2021_d01_solution`
pub fn module_name(coordinate: PuzzleCoordinate, solution_name: &str) -> String {
    format!(
        "y{}_d{:02}_{}",
        coordinate.year(),
        coordinate.day(),
        solution_name
    )
}

/// The lines that link a solution file into the solutions crate
///
/// Solutions are compiled in, so a new file only runs after it is declared
/// and the binary rebuilt.
pub fn registration_hint(coordinate: PuzzleCoordinate, solution_name: &str) -> String {
    format!(
        "#[path = \"{}/{:02}/{}.rs\"]\nmod {};",
        coordinate.year(),
        coordinate.day(),
        solution_name,
        module_name(coordinate, solution_name)
    )
}
