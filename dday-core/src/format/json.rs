//! Array-of-records JSON.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{DdayError, DdayResult};
use crate::event::Event;

pub fn decode(content: &str) -> DdayResult<Vec<Event>> {
    serde_json::from_str(content).map_err(|e| DdayError::Serialization(e.to_string()))
}

pub fn encode(events: &[Event]) -> DdayResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    events
        .serialize(&mut serializer)
        .map_err(|e| DdayError::Serialization(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| DdayError::Serialization(e.to_string()))
}
