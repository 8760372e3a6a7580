//! `advent submit`: compute and submit the latest answer

use crate::commands::get::{INPUT_FILE, PROMPT_FILE};
use crate::commands::test::check_runnable;
use crate::commands::{format_wait, registry, report_missing, report_site_error};
use crate::config::Config;
use crate::error::CliError;
use crate::palette::{Color, Palette};
use advent_http_client::{AdventClient, Outcome, Submission, render_markdown};
use advent_runner::{Part, PuzzleCoordinate, compute_answers};
use std::fs::OpenOptions;
use std::io::Write;

/// The lines reporting a submission result
pub fn outcome_lines(
    submission: &Submission,
    part: Part,
    coordinate: PuzzleCoordinate,
    palette: &Palette,
) -> Vec<String> {
    match &submission.outcome {
        Outcome::Pass => match part {
            Part::Two => vec![
                format!(
                    "{} {}",
                    palette.paint("Correct!", Color::Green),
                    palette.paint("**", Color::Yellow)
                ),
                format!("Day {} complete!", coordinate.day()),
            ],
            Part::One => vec![format!(
                "{} {}",
                palette.paint("Correct!", Color::Green),
                palette.paint("*", Color::Cyan)
            )],
        },
        Outcome::Fail => vec![palette.paint("Incorrect!", Color::Red)],
        Outcome::RateLimit => {
            let mut lines = vec![palette.paint(
                "Rate limited! Please wait before submitting again.",
                Color::Yellow,
            )];
            if let Some(wait) = submission.wait_time {
                lines.push(palette.paint(
                    &format!("You have {} left to wait.", format_wait(wait)),
                    Color::Yellow,
                ));
            }
            lines
        }
        Outcome::Completed => vec![palette.paint(
            "You've already completed this question.",
            Color::Yellow,
        )],
        Outcome::NotLoggedIn => vec![palette.paint(
            "Session cookie is invalid or expired.",
            Color::Red,
        )],
        Outcome::Unknown(raw) => vec![
            palette.paint(
                "Something went wrong. Please view the output below:",
                Color::Red,
            ),
            raw.clone(),
        ],
    }
}

pub fn run(
    config: &mut Config,
    palette: &Palette,
    coordinate: PuzzleCoordinate,
    solution_name: &str,
) -> Result<(), CliError> {
    let registry = registry()?;
    let Some(dir) = check_runnable(config, &registry, palette, coordinate, solution_name) else {
        return Ok(());
    };

    let input_path = dir.join(INPUT_FILE);
    if !input_path.exists() {
        report_missing(palette, "Input file", &input_path);
        return Ok(());
    }

    let answers = compute_answers(&registry, coordinate, &input_path, solution_name)?;
    let Some((part, answer)) = answers.latest() else {
        palette.println("No solution implemented", Color::Red);
        return Ok(());
    };

    let client = config.client()?;
    println!("Submitting part {part}...");
    let submission =
        client.submit_answer(coordinate.year(), coordinate.day(), part.number(), answer)?;
    tracing::debug!(%coordinate, %part, outcome = %submission.outcome, "submitted");

    for line in outcome_lines(&submission, part, coordinate, palette) {
        println!("{line}");
    }

    if submission.outcome == Outcome::Pass && part == Part::One {
        append_part_two(config, &client, palette, coordinate)?;
    }
    Ok(())
}

/// Add the newly unlocked part 2 description to `prompt.md`
fn append_part_two(
    config: &Config,
    client: &AdventClient,
    palette: &Palette,
    coordinate: PuzzleCoordinate,
) -> Result<(), CliError> {
    let page = match client.get_puzzle_page(coordinate.year(), coordinate.day()) {
        Ok(page) => page,
        Err(e) => return report_site_error(palette, e),
    };
    let Some(part_two) = page.descriptions.get(1) else {
        tracing::warn!(%coordinate, "part 2 description missing after a correct part 1");
        return Ok(());
    };

    let mut prompt = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.puzzle_dir(coordinate).join(PROMPT_FILE))?;
    prompt.write_all(render_markdown(&part_two.html, config.emphasis).as_bytes())?;
    println!(
        "Appended part 2 prompt to {}",
        coordinate.dir().join(PROMPT_FILE).display()
    );
    Ok(())
}
