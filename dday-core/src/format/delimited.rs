//! One `name,year,month,day` record per line.

use chrono::{Datelike, NaiveDate};

use crate::error::{DdayError, DdayResult};
use crate::event::{Event, EventDate};

/// Each line is read on its own, so a broken line (e.g. an unclosed quote)
/// never swallows the lines after it.
pub fn decode(content: &str) -> Vec<Event> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let event = decode_line(line);
            if event.is_none() {
                log::debug!("Skipping unreadable line: {:?}", line);
            }
            event
        })
        .collect()
}

fn decode_line(line: &str) -> Option<Event> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => parse_record(&record),
        Ok(false) => None,
        Err(e) => {
            log::debug!("Malformed line: {}", e);
            None
        }
    }
}

pub fn encode(events: &[Event]) -> DdayResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for event in events {
        let EventDate::Valid(date) = &event.date else {
            log::warn!("Not saving '{}': date '{}' cannot be stored as CSV", event.name, event.date);
            continue;
        };

        writer
            .write_record([
                event.name.clone(),
                date.year().to_string(),
                date.month().to_string(),
                date.day().to_string(),
            ])
            .map_err(|e| DdayError::Serialization(e.to_string()))?;
    }

    let buf = writer
        .into_inner()
        .map_err(|e| DdayError::Serialization(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| DdayError::Serialization(e.to_string()))
}

fn parse_record(record: &csv::StringRecord) -> Option<Event> {
    if record.len() != 4 {
        return None;
    }

    let year = record.get(1)?.trim().parse().ok()?;
    let month = record.get(2)?.trim().parse().ok()?;
    let day = record.get(3)?.trim().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    Some(Event::new(record.get(0)?, date))
}
