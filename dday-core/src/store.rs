//! Flat-file persistence for the event list.
//!
//! The whole list is read once and rewritten in full after each change.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::collection::EventCollection;
use crate::error::{DdayError, DdayResult};
use crate::event::Event;
use crate::format::StorageFormat;

#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
    format: StorageFormat,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>, format: StorageFormat) -> Self {
        EventStore {
            path: path.into(),
            format,
        }
    }

    /// Store whose format follows the file extension.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = StorageFormat::from_path(&path);
        Self::new(path, format)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StorageFormat {
        self.format
    }

    /// Load the event list.
    ///
    /// A missing file is an empty list. A file that cannot be read or does
    /// not have the expected shape is logged and also treated as empty, so
    /// its contents are lost on the next save.
    pub fn load(&self) -> EventCollection {
        match self.read_events() {
            Ok(events) => EventCollection::from_events(events),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable data file {}: {}. Starting with an empty list.",
                    self.path.display(),
                    e
                );
                EventCollection::new()
            }
        }
    }

    /// Read events without the empty-list fallback.
    pub fn read_events(&self) -> DdayResult<Vec<Event>> {
        if !self.path.exists() {
            log::debug!("No data file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let events = self.format.decode(&content)?;
        log::debug!("Loaded {} events from {}", events.len(), self.path.display());
        Ok(events)
    }

    /// Replace the file with `collection`.
    ///
    /// Content goes to a temporary file next to the target which is then
    /// renamed over it, so readers see either the old or the new list.
    pub fn save(&self, collection: &EventCollection) -> DdayResult<()> {
        let content = self.format.encode(collection.events())?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| DdayError::Io(e.error))?;

        log::debug!("Saved {} events to {}", collection.len(), self.path.display());
        Ok(())
    }
}
