//! Event records.
//!
//! An event is just a name and a calendar date. Identity is assigned in
//! memory when a collection is built and is never written to disk.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::countdown::{self, Countdown};
use crate::date::{format_date, parse_canonical};

/// Session-local identity of an event.
///
/// Ids start at 1 in file order when a collection is loaded and keep
/// increasing as events are added. `EventId::default()` (0) means "not yet
/// part of a collection".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored date: either a real calendar date or the raw text that could not
/// be read as one.
///
/// Broken dates only come from hand-edited files. They are kept verbatim so
/// that saving never rewrites what the user typed, and the event is shown
/// flagged as a date error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDate {
    Valid(NaiveDate),
    Invalid(String),
}

impl EventDate {
    /// Read a stored `YYYY-MM-DD` string.
    pub fn from_stored(raw: &str) -> Self {
        match parse_canonical(raw) {
            Some(date) => EventDate::Valid(date),
            None => EventDate::Invalid(raw.to_string()),
        }
    }

    pub fn valid(&self) -> Option<NaiveDate> {
        match self {
            EventDate::Valid(date) => Some(*date),
            EventDate::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, EventDate::Valid(_))
    }
}

impl From<NaiveDate> for EventDate {
    fn from(date: NaiveDate) -> Self {
        EventDate::Valid(date)
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventDate::Valid(date) => write!(f, "{}", format_date(*date)),
            EventDate::Invalid(raw) => write!(f, "{}", raw),
        }
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(EventDate::from_stored(&raw))
    }
}

/// A named target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(skip)]
    pub id: EventId,
    pub name: String,
    pub date: EventDate,
}

impl Event {
    pub fn new(name: impl Into<String>, date: impl Into<EventDate>) -> Self {
        Event {
            id: EventId::default(),
            name: name.into(),
            date: date.into(),
        }
    }

    /// Countdown to this event, or `None` if its stored date is broken.
    pub fn countdown(&self, today: NaiveDate) -> Option<Countdown> {
        self.date.valid().map(|date| countdown::countdown(date, today))
    }

    /// Signed days until the event, or `None` if its stored date is broken.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.date.valid().map(|date| countdown::days_until(date, today))
    }

    /// Whether the event is before `today`. Broken dates are never past.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date.valid().is_some_and(|date| date < today)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.date)
    }
}
