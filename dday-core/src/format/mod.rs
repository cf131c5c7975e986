//! On-disk representations of an event list.
//!
//! Two independent formats exist and neither is converted into the other:
//! - `json`: an array of `{ "name", "date" }` records
//! - `delimited`: one `name,year,month,day` line per event

mod delimited;
mod json;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DdayResult;
use crate::event::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    #[default]
    Json,
    Csv,
}

impl StorageFormat {
    /// Pick a format from the file extension: `.csv` is delimited, anything
    /// else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => StorageFormat::Csv,
            _ => StorageFormat::Json,
        }
    }

    /// Read events from file content.
    ///
    /// JSON content that is not an array of records is an error. Delimited
    /// content never fails as a whole; unreadable lines are dropped.
    pub fn decode(self, content: &str) -> DdayResult<Vec<Event>> {
        match self {
            StorageFormat::Json => json::decode(content),
            StorageFormat::Csv => Ok(delimited::decode(content)),
        }
    }

    /// Serialize events to file content.
    pub fn encode(self, events: &[Event]) -> DdayResult<String> {
        match self {
            StorageFormat::Json => json::encode(events),
            StorageFormat::Csv => delimited::encode(events),
        }
    }
}

impl std::fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StorageFormat::Json => write!(f, "json"),
            StorageFormat::Csv => write!(f, "csv"),
        }
    }
}
