//! In-memory event list: CRUD and ordering.
//!
//! The collection keeps insertion order until asked to sort. Sorting
//! reorders the list itself, so the next save writes the new order.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DdayError, DdayResult};
use crate::event::{Event, EventDate, EventId};

/// Field to order events by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// By date; events with a broken date always go last.
    Chronological,
    /// By case-folded name.
    Alphabetical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Which slice of the collection is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Events today or later, plus events with a broken date.
    #[default]
    Current,
    /// Events before today.
    Past,
}

impl DisplayMode {
    pub fn includes(self, event: &Event, today: NaiveDate) -> bool {
        match self {
            DisplayMode::Current => !event.is_past(today),
            DisplayMode::Past => event.is_past(today),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Current => DisplayMode::Past,
            DisplayMode::Past => DisplayMode::Current,
        }
    }
}

/// Ordering for the current-events view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentSort {
    /// Soonest first; past-due and broken events sink to the bottom.
    #[default]
    Urgency,
    /// Current events by name, then past events by name.
    #[serde(rename = "name")]
    Alphabetical,
}

/// Ordering for the past-events view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PastSort {
    /// Most recently passed first.
    #[default]
    Date,
    #[serde(rename = "name")]
    Alphabetical,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCollection {
    events: Vec<Event>,
    next_id: u64,
}

impl EventCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from loaded events, numbering them in order.
    pub fn from_events(events: Vec<Event>) -> Self {
        let mut collection = Self::new();
        for event in events {
            collection.push(event);
        }
        collection
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.get(id).is_some()
    }

    /// Events shown in `mode`, in collection order.
    pub fn visible(&self, mode: DisplayMode, today: NaiveDate) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |e| mode.includes(e, today))
    }

    /// Append a new event. The caller has already validated name and date.
    pub fn add(&mut self, name: impl Into<String>, date: NaiveDate) -> EventId {
        self.push(Event::new(name, date))
    }

    /// Replace the name and date of an event, keeping its position.
    pub fn update(&mut self, id: EventId, name: impl Into<String>, date: NaiveDate) -> DdayResult<()> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DdayError::NotFound(id))?;

        event.name = name.into();
        event.date = EventDate::Valid(date);
        Ok(())
    }

    /// Remove an event. Unknown ids leave the collection untouched.
    pub fn remove(&mut self, id: EventId) -> DdayResult<Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(DdayError::NotFound(id))?;

        Ok(self.events.remove(index))
    }

    /// Stable sort by `key`; equal keys keep their current relative order.
    pub fn sort(&mut self, key: SortKey, direction: Direction) {
        match key {
            SortKey::Chronological => self.events.sort_by(|a, b| by_date(a, b, direction)),
            SortKey::Alphabetical => self
                .events
                .sort_by(|a, b| direction.apply(folded(&a.name).cmp(&folded(&b.name)))),
        }
    }

    /// Order for the current-events view.
    pub fn sort_current(&mut self, sort: CurrentSort, today: NaiveDate) {
        match sort {
            CurrentSort::Urgency => {
                self.events.sort_by_key(|e| match e.days_until(today) {
                    Some(days) if days >= 0 => (false, days),
                    _ => (true, 0),
                });
            }
            CurrentSort::Alphabetical => {
                let (mut current, mut past): (Vec<Event>, Vec<Event>) = self
                    .events
                    .drain(..)
                    .partition(|e| DisplayMode::Current.includes(e, today));

                current.sort_by_cached_key(|e| folded(&e.name));
                past.sort_by_cached_key(|e| folded(&e.name));

                current.append(&mut past);
                self.events = current;
            }
        }
    }

    /// Order for the past-events view.
    pub fn sort_past(&mut self, sort: PastSort) {
        match sort {
            PastSort::Date => self.sort(SortKey::Chronological, Direction::Descending),
            PastSort::Alphabetical => self.sort(SortKey::Alphabetical, Direction::Ascending),
        }
    }

    fn push(&mut self, mut event: Event) -> EventId {
        self.next_id += 1;
        event.id = EventId(self.next_id);
        let id = event.id;
        self.events.push(event);
        id
    }
}

impl<'a> IntoIterator for &'a EventCollection {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

fn folded(name: &str) -> String {
    name.to_lowercase()
}

fn by_date(a: &Event, b: &Event, direction: Direction) -> Ordering {
    match (a.date.valid(), b.date.valid()) {
        (Some(x), Some(y)) => direction.apply(x.cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names(collection: &EventCollection) -> Vec<&str> {
        collection.iter().map(|e| e.name.as_str()).collect()
    }

    fn sample() -> EventCollection {
        EventCollection::from_events(vec![
            Event::new("banana", ymd(2025, 7, 1)),
            Event::new("Apple", ymd(2025, 6, 1)),
            Event::new("cherry", ymd(2025, 6, 20)),
            Event::new("broken", EventDate::Invalid("someday".into())),
            Event::new("date", ymd(2025, 6, 15)),
        ])
    }

    #[test]
    fn test_ids_follow_file_order() {
        let collection = sample();
        let ids: Vec<u64> = collection.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_add_appends_with_fresh_id() {
        let mut collection = sample();
        collection.remove(EventId(5)).unwrap();
        let id = collection.add("elderberry", ymd(2026, 1, 1));
        assert_eq!(id, EventId(6));
        assert_eq!(collection.events().last().unwrap().name, "elderberry");
    }

    #[test]
    fn test_update_keeps_position() {
        let mut collection = sample();
        collection.update(EventId(2), "Avocado", ymd(2030, 1, 1)).unwrap();
        assert_eq!(names(&collection), vec!["banana", "Avocado", "cherry", "broken", "date"]);
        assert_eq!(collection.get(EventId(2)).unwrap().date, EventDate::Valid(ymd(2030, 1, 1)));
    }

    #[test]
    fn test_update_fixes_broken_date() {
        let mut collection = sample();
        collection.update(EventId(4), "broken", ymd(2025, 8, 1)).unwrap();
        assert!(collection.get(EventId(4)).unwrap().date.is_valid());
    }

    #[test]
    fn test_update_unknown_id() {
        let mut collection = sample();
        let before = collection.clone();
        assert!(matches!(
            collection.update(EventId(42), "x", ymd(2025, 1, 1)),
            Err(DdayError::NotFound(EventId(42)))
        ));
        assert_eq!(collection, before);
    }

    #[test]
    fn test_remove_unknown_id_leaves_collection_unchanged() {
        let mut collection = sample();
        let before = collection.clone();
        assert!(matches!(collection.remove(EventId(99)), Err(DdayError::NotFound(EventId(99)))));
        assert_eq!(collection, before);
    }

    #[test]
    fn test_remove_twice_is_not_found() {
        let mut collection = sample();
        let removed = collection.remove(EventId(3)).unwrap();
        assert_eq!(removed.name, "cherry");
        assert!(collection.remove(EventId(3)).is_err());
        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn test_sort_chronological_puts_broken_last() {
        let mut collection = sample();
        collection.sort(SortKey::Chronological, Direction::Ascending);
        assert_eq!(names(&collection), vec!["Apple", "date", "cherry", "banana", "broken"]);

        collection.sort(SortKey::Chronological, Direction::Descending);
        assert_eq!(names(&collection), vec!["banana", "cherry", "date", "Apple", "broken"]);
    }

    #[test]
    fn test_sort_chronological_ties_keep_order() {
        let mut collection = EventCollection::from_events(vec![
            Event::new("second", ymd(2025, 2, 1)),
            Event::new("first-b", ymd(2025, 1, 1)),
            Event::new("first-a", ymd(2025, 1, 1)),
        ]);
        collection.sort(SortKey::Chronological, Direction::Ascending);
        assert_eq!(names(&collection), vec!["first-b", "first-a", "second"]);
    }

    #[test]
    fn test_sort_alphabetical_is_case_folded() {
        let mut collection = sample();
        collection.sort(SortKey::Alphabetical, Direction::Ascending);
        assert_eq!(names(&collection), vec!["Apple", "banana", "broken", "cherry", "date"]);
    }

    #[test]
    fn test_sort_current_urgency() {
        let mut collection = sample();
        collection.sort_current(CurrentSort::Urgency, ymd(2025, 6, 15));
        // past "Apple" and broken sink, keeping their relative order
        assert_eq!(names(&collection), vec!["date", "cherry", "banana", "Apple", "broken"]);
    }

    #[test]
    fn test_sort_current_alphabetical_splits_current_and_past() {
        let mut collection = EventCollection::from_events(vec![
            Event::new("zeta", ymd(2030, 1, 1)),
            Event::new("beta", ymd(2020, 1, 1)),
            Event::new("Alpha", ymd(2019, 1, 1)),
            Event::new("gamma", ymd(2031, 1, 1)),
            Event::new("delta", EventDate::Invalid("?".into())),
        ]);
        collection.sort_current(CurrentSort::Alphabetical, ymd(2025, 6, 15));
        assert_eq!(names(&collection), vec!["delta", "gamma", "zeta", "Alpha", "beta"]);
    }

    #[test]
    fn test_sort_past_by_date_is_most_recent_first() {
        let mut collection = sample();
        collection.sort_past(PastSort::Date);
        assert_eq!(collection.events()[0].name, "banana");
        assert_eq!(collection.events()[4].name, "broken");
    }

    #[test]
    fn test_visible_partitions_by_mode() {
        let collection = sample();
        let today = ymd(2025, 6, 15);

        let current: Vec<&str> = collection
            .visible(DisplayMode::Current, today)
            .map(|e| e.name.as_str())
            .collect();
        let past: Vec<&str> = collection
            .visible(DisplayMode::Past, today)
            .map(|e| e.name.as_str())
            .collect();

        assert_eq!(current, vec!["banana", "cherry", "broken", "date"]);
        assert_eq!(past, vec!["Apple"]);
    }

    #[test]
    fn test_scenario_holiday_and_birthday() {
        let collection = EventCollection::from_events(vec![
            Event::new("명절", ymd(2025, 1, 1)),
            Event::new("생일", ymd(2099, 1, 1)),
        ]);
        let today = ymd(2025, 6, 15);

        let current: Vec<&Event> = collection.visible(DisplayMode::Current, today).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].name, "생일");

        let expected_days = (ymd(2099, 1, 1) - today).num_days();
        assert_eq!(current[0].countdown(today).unwrap().to_string(), format!("D-{}", expected_days));
    }
}
