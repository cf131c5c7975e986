//! Application state driven by a front-end.
//!
//! A `Session` owns the loaded events together with what the user is
//! currently looking at: display mode, the sort choice for each mode and an
//! optional selected event. Every successful change is written back to the
//! store immediately.

use chrono::NaiveDate;

use crate::collection::{CurrentSort, DisplayMode, EventCollection, PastSort};
use crate::countdown::Countdown;
use crate::date::parse_date;
use crate::error::{DdayError, DdayResult, InputError};
use crate::event::{Event, EventId};
use crate::progress::{self, YearProgress};
use crate::store::EventStore;

/// Label shown instead of a countdown when a stored date is unreadable.
pub const DATE_ERROR_LABEL: &str = "date error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Upcoming,
    Today,
    Past,
    /// Stored date could not be read.
    Invalid,
}

/// One line of the event list as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: EventId,
    pub name: String,
    pub date: String,
    pub label: String,
    pub status: RowStatus,
    pub selected: bool,
}

pub struct Session {
    store: EventStore,
    collection: EventCollection,
    today: NaiveDate,
    mode: DisplayMode,
    current_sort: CurrentSort,
    past_sort: PastSort,
    selection: Option<EventId>,
}

impl Session {
    /// Load the store and show current events in urgency order.
    pub fn open(store: EventStore, today: NaiveDate) -> Self {
        let collection = store.load();
        let mut session = Session {
            store,
            collection,
            today,
            mode: DisplayMode::Current,
            current_sort: CurrentSort::default(),
            past_sort: PastSort::default(),
            selection: None,
        };
        session.resort();
        session
    }

    pub fn with_sorts(mut self, current: CurrentSort, past: PastSort) -> Self {
        self.current_sort = current;
        self.past_sort = past;
        self.resort();
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn current_sort(&self) -> CurrentSort {
        self.current_sort
    }

    pub fn past_sort(&self) -> PastSort {
        self.past_sort
    }

    pub fn selection(&self) -> Option<EventId> {
        self.selection
    }

    pub fn collection(&self) -> &EventCollection {
        &self.collection
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Check user input for an add or edit.
    ///
    /// Returns the trimmed name and the parsed date.
    pub fn validate(name: &str, date_input: &str) -> Result<(String, NaiveDate), InputError> {
        let name = name.trim();
        let date_input = date_input.trim();

        if name.is_empty() {
            return Err(InputError::EmptyName);
        }
        if date_input.is_empty() {
            return Err(InputError::EmptyDate);
        }

        let date = parse_date(date_input)
            .map_err(|_| InputError::UnrecognizedDate(date_input.to_string()))?;

        Ok((name.to_string(), date))
    }

    /// Add an event from user input and save.
    ///
    /// If saving fails the event stays in memory and the error is returned.
    pub fn add_event(&mut self, name: &str, date_input: &str) -> DdayResult<EventId> {
        let (name, date) = Self::validate(name, date_input)?;

        let id = self.collection.add(name, date);
        log::info!("Added event {}", id);
        self.resort();
        self.save()?;
        Ok(id)
    }

    /// Replace an event's name and date from user input and save.
    pub fn edit_event(&mut self, id: EventId, name: &str, date_input: &str) -> DdayResult<()> {
        let (name, date) = Self::validate(name, date_input)?;

        if let Err(e) = self.collection.update(id, name, date) {
            self.forget_stale(id);
            return Err(e);
        }
        log::info!("Updated event {}", id);
        self.resort();
        self.save()
    }

    /// Delete an event and save.
    ///
    /// A stale id clears the selection and returns `NotFound`; callers treat
    /// that as "nothing to delete".
    pub fn delete_event(&mut self, id: EventId) -> DdayResult<Event> {
        let removed = match self.collection.remove(id) {
            Ok(removed) => removed,
            Err(e) => {
                self.forget_stale(id);
                return Err(e);
            }
        };

        log::info!("Deleted event {}", id);
        self.selection = None;
        self.save()?;
        Ok(removed)
    }

    /// Select an event shown in the current mode.
    pub fn select(&mut self, id: EventId) -> DdayResult<()> {
        let visible = self
            .collection
            .get(id)
            .is_some_and(|e| self.mode.includes(e, self.today));

        if !visible {
            self.selection = None;
            return Err(DdayError::NotFound(id));
        }

        self.selection = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Switch between current and past events.
    pub fn toggle_mode(&mut self) -> DisplayMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        if mode != self.mode {
            self.mode = mode;
            self.selection = None;
        }
        self.resort();
    }

    pub fn set_current_sort(&mut self, sort: CurrentSort) {
        self.current_sort = sort;
        self.resort();
    }

    pub fn set_past_sort(&mut self, sort: PastSort) {
        self.past_sort = sort;
        self.resort();
    }

    /// Apply the sort of the active mode and drop a selection that is no
    /// longer visible.
    pub fn resort(&mut self) {
        match self.mode {
            DisplayMode::Current => self.collection.sort_current(self.current_sort, self.today),
            DisplayMode::Past => self.collection.sort_past(self.past_sort),
        }

        if let Some(id) = self.selection {
            let still_visible = self
                .collection
                .get(id)
                .is_some_and(|e| self.mode.includes(e, self.today));
            if !still_visible {
                self.selection = None;
            }
        }
    }

    /// Visible rows in display order.
    pub fn rows(&self) -> Vec<Row> {
        self.collection
            .visible(self.mode, self.today)
            .map(|event| {
                let (label, status) = match event.countdown(self.today) {
                    Some(countdown) => {
                        let status = match countdown {
                            Countdown::DDay => RowStatus::Today,
                            Countdown::Remaining(_) => RowStatus::Upcoming,
                            Countdown::Elapsed(_) => RowStatus::Past,
                        };
                        (countdown.to_string(), status)
                    }
                    None => (DATE_ERROR_LABEL.to_string(), RowStatus::Invalid),
                };

                Row {
                    id: event.id,
                    name: event.name.clone(),
                    date: event.date.to_string(),
                    label,
                    status,
                    selected: self.selection == Some(event.id),
                }
            })
            .collect()
    }

    pub fn year_progress(&self) -> YearProgress {
        progress::year_progress(self.today)
    }

    pub fn closest_dday(&self) -> Option<(&Event, i64)> {
        progress::closest_dday(&self.collection, self.today)
    }

    pub fn save(&self) -> DdayResult<()> {
        self.store.save(&self.collection).inspect_err(|e| {
            log::error!("Failed to save {}: {}", self.store.path().display(), e);
        })
    }

    fn forget_stale(&mut self, id: EventId) {
        log::debug!("Event {} no longer exists", id);
        if self.selection == Some(id) {
            self.selection = None;
        }
    }
}
