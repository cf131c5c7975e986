//! Parsing user-entered date strings into calendar dates.
//!
//! People type dates in whatever shape they are used to. Each accepted shape
//! is tried in a fixed priority order and the first one that both matches
//! structurally and names a real calendar day wins.

use chrono::{Local, NaiveDate};

use crate::error::{DdayError, DdayResult};

/// Canonical storage/display format.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// The textual date shapes accepted by [`parse_date`], in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// `YYYY-MM-DD`
    IsoDashed,
    /// `YYYY.MM.DD`
    IsoDotted,
    /// `YYYYMMDD`
    Compact,
    /// `YYYY/MM/DD`
    IsoSlashed,
    /// `DD-MM-YYYY`
    DayFirstDashed,
    /// `DD.MM.YYYY`
    DayFirstDotted,
    /// `MM/DD/YYYY`
    MonthFirstSlashed,
}

impl DateShape {
    pub const ALL: [DateShape; 7] = [
        DateShape::IsoDashed,
        DateShape::IsoDotted,
        DateShape::Compact,
        DateShape::IsoSlashed,
        DateShape::DayFirstDashed,
        DateShape::DayFirstDotted,
        DateShape::MonthFirstSlashed,
    ];

    /// Human-readable pattern, e.g. for hints next to an input field.
    pub fn pattern(self) -> &'static str {
        match self {
            DateShape::IsoDashed => "YYYY-MM-DD",
            DateShape::IsoDotted => "YYYY.MM.DD",
            DateShape::Compact => "YYYYMMDD",
            DateShape::IsoSlashed => "YYYY/MM/DD",
            DateShape::DayFirstDashed => "DD-MM-YYYY",
            DateShape::DayFirstDotted => "DD.MM.YYYY",
            DateShape::MonthFirstSlashed => "MM/DD/YYYY",
        }
    }

    /// chrono format string for this shape.
    pub fn format(self) -> &'static str {
        match self {
            DateShape::IsoDashed => "%Y-%m-%d",
            DateShape::IsoDotted => "%Y.%m.%d",
            DateShape::Compact => "%Y%m%d",
            DateShape::IsoSlashed => "%Y/%m/%d",
            DateShape::DayFirstDashed => "%d-%m-%Y",
            DateShape::DayFirstDotted => "%d.%m.%Y",
            DateShape::MonthFirstSlashed => "%m/%d/%Y",
        }
    }

    fn separator(self) -> Option<u8> {
        match self {
            DateShape::IsoDashed | DateShape::DayFirstDashed => Some(b'-'),
            DateShape::IsoDotted | DateShape::DayFirstDotted => Some(b'.'),
            DateShape::IsoSlashed | DateShape::MonthFirstSlashed => Some(b'/'),
            DateShape::Compact => None,
        }
    }

    /// Try to read `input` (already trimmed) in this shape.
    ///
    /// Returns `None` if the structure does not match or the resulting
    /// year/month/day is not a real date.
    pub fn parse(self, input: &str) -> Option<NaiveDate> {
        if !self.fits_layout(input) {
            return None;
        }

        NaiveDate::parse_from_str(input, self.format()).ok()
    }

    /// Layout rules chrono does not enforce on its own: only digits and this
    /// shape's separator (no signs or inner spaces), a four-digit year, and
    /// zero padding for the year-first dashed, dotted and compact shapes.
    fn fits_layout(self, input: &str) -> bool {
        let Some(sep) = self.separator() else {
            return input.len() == 8 && input.bytes().all(|b| b.is_ascii_digit());
        };

        if !input.bytes().all(|b| b.is_ascii_digit() || b == sep) {
            return false;
        }

        let fields: Vec<&str> = input.split(char::from(sep)).collect();
        match self {
            DateShape::IsoDashed | DateShape::IsoDotted => {
                fields.iter().map(|f| f.len()).eq([4, 2, 2])
            }
            DateShape::IsoSlashed => fields.first().is_some_and(|year| year.len() == 4),
            _ => fields.last().is_some_and(|year| year.len() == 4),
        }
    }
}

/// Parse a user-entered date string.
///
/// Leading/trailing whitespace is ignored. Fails with
/// [`DdayError::DateNotRecognized`] when no shape matches a valid date.
pub fn parse_date(input: &str) -> DdayResult<NaiveDate> {
    let trimmed = input.trim();

    DateShape::ALL
        .iter()
        .find_map(|shape| shape.parse(trimmed))
        .ok_or_else(|| DdayError::DateNotRecognized(trimmed.to_string()))
}

/// Parse a date in the canonical `YYYY-MM-DD` form only.
pub fn parse_canonical(input: &str) -> Option<NaiveDate> {
    DateShape::IsoDashed.parse(input.trim())
}

/// Render a date in the canonical `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
