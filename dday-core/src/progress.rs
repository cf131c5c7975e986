//! How much of the year is gone, and which D-Day comes next.

use chrono::{Datelike, NaiveDate};

use crate::event::Event;

/// Progress through the calendar year containing `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearProgress {
    pub year: i32,
    pub days_passed: u32,
    pub days_remaining: u32,
    pub total_days: u32,
}

impl YearProgress {
    /// Percentage of the year elapsed, `0.0..=100.0`.
    pub fn percent(&self) -> f64 {
        100.0 * f64::from(self.days_passed) / f64::from(self.total_days)
    }

    /// Percentage with one fractional digit, e.g. `"0.3"`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}", self.percent())
    }
}

/// Today counts as passed, so Jan 1 is day 1 and Dec 31 leaves 0 remaining.
pub fn year_progress(today: NaiveDate) -> YearProgress {
    let total_days = if today.leap_year() { 366 } else { 365 };
    let days_passed = today.ordinal();

    YearProgress {
        year: today.year(),
        days_passed,
        days_remaining: total_days - days_passed,
        total_days,
    }
}

/// The upcoming event with the smallest non-negative offset from `today`.
///
/// Ties go to whichever comes first in `events`. Events with a broken date
/// are skipped. Returns the event with its day count.
pub fn closest_dday<'a, I>(events: I, today: NaiveDate) -> Option<(&'a Event, i64)>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut closest: Option<(&Event, i64)> = None;

    for event in events {
        let Some(days) = event.days_until(today) else {
            continue;
        };

        if days >= 0 && closest.is_none_or(|(_, best)| days < best) {
            closest = Some((event, days));
        }
    }

    closest
}
