//! `advent countdown`: live countdown to a puzzle unlock

use crate::clock::{self, Remaining, unlock_time};
use crate::error::CliError;
use crate::palette::{Color, Palette};
use advent_runner::PuzzleCoordinate;
use chrono::{DateTime, Datelike, FixedOffset};
use console::{Key, Term};
use std::io::{self, IsTerminal};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

const REDRAW_INTERVAL: Duration = Duration::from_millis(200);

/// Why a countdown cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    WrongYear { current: i32 },
    AlreadyUnlocked,
}

impl Refusal {
    pub fn message(&self) -> String {
        match self {
            Refusal::WrongYear { current } => {
                format!("Date must be from the current year ({current}).")
            }
            Refusal::AlreadyUnlocked => "That puzzle has already been unlocked.".to_string(),
        }
    }
}

/// Check that `coordinate` is a future unlock in the current year
pub fn check(coordinate: PuzzleCoordinate, now: DateTime<FixedOffset>) -> Result<(), Refusal> {
    if now.year() != i32::from(coordinate.year()) {
        return Err(Refusal::WrongYear {
            current: now.year(),
        });
    }
    if now >= unlock_time(coordinate) {
        return Err(Refusal::AlreadyUnlocked);
    }
    Ok(())
}

/// The countdown screen for one moment
pub fn frame(coordinate: PuzzleCoordinate, remaining: Remaining, palette: &Palette) -> Vec<String> {
    vec![
        format!("{} countdown", palette.paint("advent", Color::Magenta)),
        String::new(),
        palette.paint(
            &format!(
                "  {} day {} will unlock in:",
                coordinate.year(),
                coordinate.day()
            ),
            Color::Yellow,
        ),
        format!("  {remaining}"),
        String::new(),
        palette.paint("(press Q or Esc to exit)", Color::Red),
    ]
}

/// What a key read means for the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Cancel,
    Ignore,
    /// Keys can no longer be read; keep counting without them
    StopListening,
}

/// Ctrl+C reads as an interrupted error in raw mode
fn key_action(read: io::Result<Key>) -> KeyAction {
    match read {
        Ok(Key::Char('q' | 'Q')) | Ok(Key::Escape) => KeyAction::Cancel,
        Ok(_) => KeyAction::Ignore,
        Err(e) if e.kind() == io::ErrorKind::Interrupted => KeyAction::Cancel,
        Err(_) => KeyAction::StopListening,
    }
}

/// Forward cancel keys from the terminal
///
/// The channel disconnects without a message once keys can no longer be read.
fn spawn_key_listener(term: Term) -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        loop {
            match key_action(term.read_key()) {
                KeyAction::Cancel => {
                    let _ = tx.send(());
                    break;
                }
                KeyAction::Ignore => {}
                KeyAction::StopListening => {
                    tracing::debug!("key listener stopped");
                    break;
                }
            }
        }
    });
    rx
}

fn clear(term: &Term, lines: usize) -> io::Result<()> {
    if lines > 0 {
        term.clear_last_lines(lines)?;
    }
    Ok(())
}

pub fn run(palette: &Palette, coordinate: PuzzleCoordinate) -> Result<(), CliError> {
    if let Err(refusal) = check(coordinate, clock::now_est()) {
        palette.println(&refusal.message(), Color::Red);
        return Ok(());
    }

    let term = Term::stdout();
    // Keys come from stdin while frames go to stdout; both must be the terminal
    let interactive = term.is_term() && io::stdin().is_terminal();
    let cancel = interactive.then(|| spawn_key_listener(term.clone()));
    let unlock = unlock_time(coordinate);

    term.hide_cursor()?;
    let mut drawn = 0;
    let cancelled = loop {
        let Some(remaining) = Remaining::until(unlock, clock::now_est()) else {
            break false;
        };

        clear(&term, drawn)?;
        let lines = frame(coordinate, remaining, palette);
        for line in &lines {
            // The key listener holds the terminal in raw mode, so return explicitly
            term.write_str(&format!("{line}\r\n"))?;
        }
        drawn = lines.len();

        let pressed = match cancel.as_ref().map(|rx| rx.recv_timeout(REDRAW_INTERVAL)) {
            Some(Ok(())) => true,
            Some(Err(RecvTimeoutError::Timeout)) => false,
            Some(Err(RecvTimeoutError::Disconnected)) | None => {
                thread::sleep(REDRAW_INTERVAL);
                false
            }
        };
        if pressed {
            break true;
        }
    };
    clear(&term, drawn)?;
    term.show_cursor()?;

    if cancelled {
        palette.println("Countdown cancelled", Color::Red);
        return Err(CliError::Cancelled);
    }

    palette.println("Countdown finished", Color::Green);
    // The unlock can land slightly after the local clock says so
    thread::sleep(Duration::from_secs(1));
    Ok(())
}
