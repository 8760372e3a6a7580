//! Subcommand implementations
//!
//! Commands print user-facing results to stdout. Expected conditions such as
//! a missing puzzle directory or a locked puzzle are reported in red and end
//! the command successfully; only unexpected failures become a [`CliError`].

pub mod countdown;
pub mod get;
pub mod stats;
pub mod submit;
pub mod test;

use crate::error::CliError;
use crate::palette::{Color, Palette};
use advent_http_client::AdventError;
use advent_runner::{RegistryBuilder, SolutionRegistry};
use chrono::TimeDelta;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Build the registry of every linked solution
pub(crate) fn registry() -> Result<SolutionRegistry, CliError> {
    Ok(RegistryBuilder::new().register_all_plugins()?.build())
}

/// Absolute form of a path for messages, falling back to the path as given
pub(crate) fn display_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Report a missing file or directory
pub(crate) fn report_missing(palette: &Palette, what: &str, path: &Path) {
    palette.println(&format!("{what} does not exist:"), Color::Red);
    palette.println(&format!("  \"{}\"", display_path(path).display()), Color::Red);
}

/// Report site conditions the user can act on; anything else is returned
pub(crate) fn report_site_error(palette: &Palette, error: AdventError) -> Result<(), CliError> {
    match error {
        AdventError::Locked { year, day } => {
            palette.println("This puzzle has not unlocked yet.", Color::Red);
            palette.println(
                &format!("It will unlock on Dec {day} {year} at midnight EST (UTC-5)."),
                Color::Red,
            );
            palette.println(
                &format!("Use \"advent countdown {year}/{day:02}\" to view a live countdown."),
                Color::Grey,
            );
            Ok(())
        }
        AdventError::NotFound { url } => {
            palette.println("The server returned error 404 for url:", Color::Red);
            palette.println(&format!("  \"{url}\""), Color::Red);
            Ok(())
        }
        AdventError::NotLoggedIn => {
            palette.println(&AdventError::NotLoggedIn.to_string(), Color::Red);
            Ok(())
        }
        other => Err(other.into()),
    }
}

/// Format a TimeDelta for display
pub(crate) fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a rate-limit wait as `1m 5s`
pub(crate) fn format_wait(d: Duration) -> String {
    let secs = d.as_secs();
    match (secs / 60, secs % 60) {
        (0, s) => format!("{s}s"),
        (m, 0) => format!("{m}m"),
        (m, s) => format!("{m}m {s}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-250)), "-250µs");
    }

    #[test]
    fn test_format_wait() {
        assert_eq!(format_wait(Duration::from_secs(45)), "45s");
        assert_eq!(format_wait(Duration::from_secs(120)), "2m");
        assert_eq!(format_wait(Duration::from_secs(65)), "1m 5s");
    }

    #[test]
    fn test_unexpected_site_errors_propagate() {
        let palette = Palette::new(false);
        assert!(report_site_error(&palette, AdventError::NotLoggedIn).is_ok());
        assert!(matches!(
            report_site_error(&palette, AdventError::Encoding),
            Err(CliError::Http(AdventError::Encoding))
        ));
    }
}
