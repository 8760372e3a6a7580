//! `advent stats`: star grids and leaderboards

use crate::clock::{self, unlock_time};
use crate::commands::report_site_error;
use crate::config::Config;
use crate::error::CliError;
use crate::palette::{Color, Palette};
use advent_http_client::{AdventClient, PrivateLeaderboard, StarState};
use advent_runner::{DAYS_PER_YEAR, PuzzleCoordinate};
use chrono::{DateTime, FixedOffset};
use itertools::Itertools;

const DAY_RULER: &str = "         1111111111222222\n1234567890123456789012345";

const TABLE_HEADERS: [[&str; 2]; 7] = [
    ["", "Day"],
    ["----", "Time"],
    ["(Part 1)", "Rank"],
    ["----", "Score"],
    ["----", "Time"],
    ["(Part 2)", "Rank"],
    ["----", "Score"],
];

pub fn run(
    config: &mut Config,
    palette: &Palette,
    year: Option<u16>,
    private: bool,
) -> Result<(), CliError> {
    let now = clock::now_est();
    let (year, defaulted) = clock::stats_year(year, now);
    if defaulted {
        palette.println(&format!("Defaulting to previous year ({year})."), Color::Red);
    }

    let client = config.client()?;
    let result = if private {
        private_boards(config, &client, palette, year)
    } else {
        personal(config, &client, palette, year, now)
    };
    match result {
        Err(CliError::Http(e)) => report_site_error(palette, e),
        other => other,
    }
}

fn personal(
    config: &Config,
    client: &AdventClient,
    palette: &Palette,
    year: u16,
    now: DateTime<FixedOffset>,
) -> Result<(), CliError> {
    let stats = client.get_personal_stats(year)?;

    println!();
    print!("{}", star_grid(&stats.stars_per_day(), year, now, palette));
    println!("{}", stats_table(&stats.rows, palette));
    println!();

    if !config.private_leaderboards.is_empty() {
        palette.println(
            &format!(
                "You are a member of {} private leaderboard(s).",
                config.private_leaderboards.len()
            ),
            Color::Grey,
        );
        palette.println(
            &format!("Use \"advent stats {year} --private\" to see them.\n"),
            Color::Grey,
        );
    }
    Ok(())
}

fn private_boards(
    config: &Config,
    client: &AdventClient,
    palette: &Palette,
    year: u16,
) -> Result<(), CliError> {
    let ids = if config.private_leaderboards.is_empty() {
        client.get_private_leaderboard_index(year)?
    } else {
        config.private_leaderboards.clone()
    };

    if ids.is_empty() {
        palette.println(
            "You are not a member of any private leaderboards",
            Color::Red,
        );
        return Ok(());
    }

    for id in &ids {
        let board = client.get_private_leaderboard(year, id)?;
        print!("{}", leaderboard_view(&board, id, palette));
    }
    Ok(())
}

fn legend(palette: &Palette) -> String {
    format!(
        "({} 2 stars) ({} 1 star) ({} 0 stars)\n",
        palette.paint("*", Color::Yellow),
        palette.paint("*", Color::Cyan),
        palette.paint("*", Color::Grey),
    )
}

/// The 25-day star row with ruler, total and legend
///
/// Days that have not unlocked at `now` are left blank.
pub fn star_grid(
    stars: &[u8; 25],
    year: u16,
    now: DateTime<FixedOffset>,
    palette: &Palette,
) -> String {
    let row: String = (1..=DAYS_PER_YEAR)
        .zip(stars)
        .map(|(day, &count)| match count {
            2 => palette.paint("*", Color::Yellow),
            1 => palette.paint("*", Color::Cyan),
            _ if is_locked(year, day, now) => " ".to_string(),
            _ => palette.paint("*", Color::Grey),
        })
        .collect();
    let total: u32 = stars.iter().map(|&s| u32::from(s)).sum();

    format!(
        "{DAY_RULER}\n{row} ({total}{})\n\n{}\n",
        palette.paint("*", Color::Yellow),
        legend(palette)
    )
}

fn is_locked(year: u16, day: u8, now: DateTime<FixedOffset>) -> bool {
    PuzzleCoordinate::new(year, day)
        .map(|coordinate| now < unlock_time(coordinate))
        .unwrap_or(false)
}

/// Right-aligned personal stats table with two header lines
pub fn stats_table(rows: &[Vec<String>], palette: &Palette) -> String {
    let widths: Vec<usize> = TABLE_HEADERS
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(header.iter().map(|line| line.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_color = |col: usize| match col {
        1..=3 => Some(Color::Cyan),
        4..=6 => Some(Color::Yellow),
        _ => None,
    };

    let mut lines = Vec::with_capacity(rows.len() + 3);
    for line in 0..2 {
        lines.push(
            TABLE_HEADERS
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(col, (header, &width))| {
                    let padded = format!("{:>width$}", header[line]);
                    match header_color(col) {
                        Some(color) if !header[line].is_empty() => palette.paint(&padded, color),
                        _ => padded,
                    }
                })
                .join("  "),
        );
    }
    lines.push(widths.iter().map(|&width| "-".repeat(width)).join("  "));

    for row in rows {
        lines.push(
            widths
                .iter()
                .enumerate()
                .map(|(col, &width)| {
                    format!("{:>width$}", row.get(col).map(String::as_str).unwrap_or(""))
                })
                .join("  "),
        );
    }

    lines.join("\n")
}

/// One private leaderboard with ruler, member rows and legend
pub fn leaderboard_view(board: &PrivateLeaderboard, id: &str, palette: &Palette) -> String {
    let position_width = board
        .rows
        .iter()
        .filter_map(|row| row.position.as_deref())
        .map(str::len)
        .max()
        .unwrap_or(0);
    let score_width = board
        .rows
        .iter()
        .map(|row| row.score.len())
        .max()
        .unwrap_or(0);
    let indent = position_width + score_width + 2;

    let mut out = format!(
        "\n{}'s private leaderboard {}\n\n",
        board.owner,
        palette.paint(&format!("({id})"), Color::Grey)
    );
    out.push_str(&format!(
        "{}1111111111222222\n{}1234567890123456789012345\n",
        " ".repeat(indent + 9),
        " ".repeat(indent)
    ));

    for row in &board.rows {
        let stars: String = row
            .stars
            .iter()
            .map(|state| match state {
                StarState::Both => palette.paint("*", Color::Yellow),
                StarState::FirstOnly => palette.paint("*", Color::Cyan),
                StarState::Unlocked => palette.paint("*", Color::Grey),
                StarState::Locked => " ".to_string(),
            })
            .collect();
        let link = row
            .link
            .as_deref()
            .map(|link| format!(" ({})", palette.paint(link, Color::Blue)))
            .unwrap_or_default();

        out.push_str(&format!(
            "{:>position_width$} {:>score_width$} {stars} {}{link}\n",
            row.position.as_deref().unwrap_or(""),
            row.score,
            row.name,
        ));
    }

    out.push('\n');
    out.push_str(&legend(palette));
    out.push('\n');
    out
}
