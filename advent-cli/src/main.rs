//! advent - fetch, test and submit Advent of Code puzzles

mod cli;
mod clock;
mod commands;
mod config;
mod error;
mod logging;
mod palette;
mod scaffold;

// Link the solution plugins into the binary
use advent_solutions as _;

use clap::Parser;
use cli::{Args, Command, GetTarget};
use commands::test::InputChoice;
use config::Config;
use error::CliError;
use palette::Palette;

fn main() {
    let args = Args::parse();
    logging::init();

    match run(args) {
        Ok(()) => {}
        // Already reported to the user
        Err(CliError::Cancelled) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut config = Config::load(args.root)?;
    let palette = Palette::new(!config.disable_color);

    match args.command {
        Command::Get { target } => match target {
            GetTarget::Puzzle { date } => commands::get::puzzle(&mut config, &palette, date),
            GetTarget::Solution { date } => commands::get::solution(&mut config, &palette, date),
        },
        Command::Stats { year, private } => {
            commands::stats::run(&mut config, &palette, year, private)
        }
        Command::Test {
            date,
            example,
            solution_file,
            input,
        } => {
            let input = match (example, input) {
                (_, Some(file)) => InputChoice::File(file),
                (true, None) => InputChoice::Example,
                (false, None) => InputChoice::Puzzle,
            };
            commands::test::run(&config, &palette, date, input, &solution_file)
        }
        Command::Submit {
            date,
            solution_file,
        } => commands::submit::run(&mut config, &palette, date, &solution_file),
        Command::Countdown { date } => commands::countdown::run(&palette, date),
    }
}
