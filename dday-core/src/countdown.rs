//! Signed day offsets and their D-Day labels.

use std::fmt;

use chrono::NaiveDate;

/// Offset of a target date from today, in calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// The target is today.
    DDay,
    /// The target is this many days ahead.
    Remaining(u64),
    /// The target passed this many days ago.
    Elapsed(u64),
}

impl Countdown {
    /// Signed day difference (`target - today`).
    pub fn days(&self) -> i64 {
        match *self {
            Countdown::DDay => 0,
            Countdown::Remaining(n) => n as i64,
            Countdown::Elapsed(n) => -(n as i64),
        }
    }

    pub fn is_past(&self) -> bool {
        matches!(self, Countdown::Elapsed(_))
    }
}

impl From<i64> for Countdown {
    fn from(delta: i64) -> Self {
        match delta {
            0 => Countdown::DDay,
            d if d > 0 => Countdown::Remaining(d.unsigned_abs()),
            d => Countdown::Elapsed(d.unsigned_abs()),
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Countdown::DDay => write!(f, "D-Day"),
            Countdown::Remaining(n) => write!(f, "D-{}", n),
            Countdown::Elapsed(n) => write!(f, "D+{}", n),
        }
    }
}

/// Calendar days from `today` to `target` (negative when `target` is past).
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Countdown from `today` to `target`.
pub fn countdown(target: NaiveDate, today: NaiveDate) -> Countdown {
    Countdown::from(days_until(target, today))
}
