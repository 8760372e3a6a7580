//! `advent get puzzle` and `advent get solution`

use crate::cli::DateSpec;
use crate::clock;
use crate::commands::{display_path, report_site_error};
use crate::config::Config;
use crate::error::CliError;
use crate::palette::{Color, Palette};
use crate::scaffold::{Scaffold, registration_hint};
use advent_http_client::{AdventClient, AdventError, DayDescription, EmphasisStyle, render_markdown};
use advent_runner::{DEFAULT_SOLUTION, PuzzleCoordinate};
use std::fs;

pub const PROMPT_FILE: &str = "prompt.md";
pub const INPUT_FILE: &str = "input.txt";
pub const EXAMPLE_INPUT_FILE: &str = "example_input.txt";

/// Markdown for the released parts of a puzzle, part 1 first
pub fn prompt_markdown(descriptions: &[DayDescription], style: EmphasisStyle) -> String {
    descriptions
        .iter()
        .take(2)
        .map(|part| render_markdown(&part.html, style))
        .collect()
}

/// Download one puzzle, or every released puzzle of a year
pub fn puzzle(config: &mut Config, palette: &Palette, date: DateSpec) -> Result<(), CliError> {
    let client = config.client()?;
    let scaffold = Scaffold::new();

    match date {
        DateSpec::Day(coordinate) => puzzle_day(config, &client, palette, &scaffold, coordinate),
        DateSpec::Year(year) => {
            let days = clock::released_days(year, clock::now_est());
            if days.is_empty() {
                palette.println(&format!("No puzzles have unlocked for {year} yet."), Color::Red);
            }
            for day in days {
                let coordinate = PuzzleCoordinate::new(year, day)?;
                puzzle_day(config, &client, palette, &scaffold, coordinate)?;
            }
            Ok(())
        }
    }
}

fn puzzle_day(
    config: &Config,
    client: &AdventClient,
    palette: &Palette,
    scaffold: &Scaffold,
    coordinate: PuzzleCoordinate,
) -> Result<(), CliError> {
    let dir = config.puzzle_dir(coordinate);
    if dir.exists() {
        palette.println("Directory already exists:", Color::Red);
        palette.println(&format!("  {}", display_path(&dir).display()), Color::Red);
        return Ok(());
    }

    // Fetch everything before touching the filesystem
    let page = match client.get_puzzle_page(coordinate.year(), coordinate.day()) {
        Ok(page) => page,
        Err(e) => return report_site_error(palette, e),
    };
    let title = page
        .descriptions
        .first()
        .map(|part| part.title.clone())
        .ok_or_else(|| AdventError::HtmlParse("no puzzle description on page".to_string()))?;
    let input = match client.get_input(coordinate.year(), coordinate.day()) {
        Ok(input) => input,
        Err(e) => return report_site_error(palette, e),
    };

    fs::create_dir_all(&dir)?;
    let relative = coordinate.dir();

    fs::write(
        dir.join(PROMPT_FILE),
        prompt_markdown(&page.descriptions, config.emphasis),
    )?;
    println!("Downloaded prompt to {}", relative.join(PROMPT_FILE).display());

    fs::write(dir.join(INPUT_FILE), input)?;
    println!("Downloaded input to {}", relative.join(INPUT_FILE).display());

    fs::File::create(dir.join(EXAMPLE_INPUT_FILE))?;
    println!("Created {}", relative.join(EXAMPLE_INPUT_FILE).display());

    let solution_file = format!("{DEFAULT_SOLUTION}.rs");
    fs::write(
        dir.join(&solution_file),
        scaffold.render_solution(coordinate, &title)?,
    )?;
    println!("Created {}", relative.join(&solution_file).display());

    palette.println(
        "Declare it in the solutions crate and rebuild to run it:",
        Color::Grey,
    );
    palette.println(&registration_hint(coordinate, DEFAULT_SOLUTION), Color::Grey);
    tracing::info!(%coordinate, "puzzle scaffolded");
    Ok(())
}

/// Save the accepted answers of a puzzle as `solution<N>.txt`
pub fn solution(
    config: &mut Config,
    palette: &Palette,
    coordinate: PuzzleCoordinate,
) -> Result<(), CliError> {
    let dir = config.puzzle_dir(coordinate);
    if !dir.exists() {
        palette.println("Directory does not exist, first get the puzzle:", Color::Red);
        palette.println(&format!("  {}", display_path(&dir).display()), Color::Red);
        return Ok(());
    }

    let client = config.client()?;
    let page = match client.get_puzzle_page(coordinate.year(), coordinate.day()) {
        Ok(page) => page,
        Err(e) => return report_site_error(palette, e),
    };

    if page.answers.is_empty() {
        palette.println("No solutions found.", Color::Red);
        return Ok(());
    }

    for (number, answer) in (1..).zip(&page.answers) {
        let file = format!("solution{number}.txt");
        fs::write(dir.join(&file), answer)?;
        println!("Wrote solution to {}", coordinate.dir().join(&file).display());
    }
    palette.println("All solutions written.", Color::Green);
    Ok(())
}
