//! Core types for dday.
//!
//! This crate holds everything the `dday` front-end needs besides rendering:
//! - `date` for turning user input into calendar dates
//! - `countdown` and `progress` for the derived D-Day values
//! - `event`, `collection`, `format` and `store` for the event list and its file
//! - `session` for the application state a front-end drives

pub mod collection;
pub mod config;
pub mod countdown;
pub mod date;
pub mod error;
pub mod event;
pub mod format;
pub mod progress;
pub mod session;
pub mod store;

pub use collection::EventCollection;
pub use countdown::{Countdown, countdown};
pub use date::{format_date, parse_date};
pub use error::{DdayError, DdayResult, InputError};
pub use event::{Event, EventDate, EventId};
pub use progress::{YearProgress, closest_dday, year_progress};
