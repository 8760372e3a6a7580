//! Puzzle release times
//!
//! Puzzles unlock at midnight EST (UTC-5) on December 1-25. EST is used all
//! month regardless of daylight saving, so a fixed offset is exact.

use advent_runner::{DAYS_PER_YEAR, PuzzleCoordinate};
use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};
use std::fmt;
use std::ops::RangeInclusive;

const EST_OFFSET_SECS: i32 = 5 * 3600;

pub fn est() -> FixedOffset {
    FixedOffset::west_opt(EST_OFFSET_SECS).expect("UTC-5 is a valid offset")
}

pub fn now_est() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&est())
}

/// Midnight EST on the puzzle's day
pub fn unlock_time(coordinate: PuzzleCoordinate) -> DateTime<FixedOffset> {
    est()
        .with_ymd_and_hms(
            i32::from(coordinate.year()),
            12,
            u32::from(coordinate.day()),
            0,
            0,
            0,
        )
        .single()
        .expect("December 1-25 exists in every year")
}

/// Time left until an unlock, split for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// `None` once `now` has reached `unlock`
    pub fn until(unlock: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> Option<Self> {
        let total = (unlock - now).num_seconds();
        if total <= 0 {
            return None;
        }
        Some(Self {
            hours: total / 3600,
            minutes: total % 3600 / 60,
            seconds: total % 60,
        })
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours, {} minutes, {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Days of `year` whose puzzles are out at `now`
pub fn released_days(year: u16, now: DateTime<FixedOffset>) -> RangeInclusive<u8> {
    let current = now.year();
    let year = i32::from(year);
    if year < current {
        1..=DAYS_PER_YEAR
    } else if year == current && now.month() == 12 {
        let today = u8::try_from(now.day()).unwrap_or(DAYS_PER_YEAR);
        1..=today.min(DAYS_PER_YEAR)
    } else {
        // Empty: the event has not started
        1..=0
    }
}

/// The stats year to show, and whether it fell back to the previous event
///
/// Before December there is nothing to show for the current year yet.
pub fn stats_year(requested: Option<u16>, now: DateTime<FixedOffset>) -> (u16, bool) {
    let current = u16::try_from(now.year()).unwrap_or(u16::MAX);
    let year = requested.unwrap_or(current);
    if current <= year && now.month() < 12 {
        (current - 1, true)
    } else {
        (year, false)
    }
}
