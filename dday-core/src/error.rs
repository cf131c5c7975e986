//! Error types for dday.

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur in dday operations.
#[derive(Error, Debug)]
pub enum DdayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event {0} not found")]
    NotFound(EventId),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Unrecognized date: \"{0}\"")]
    DateNotRecognized(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// User-correctable problems with entered values.
///
/// These are reported next to the offending field; the operation that hit
/// them changes nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Enter a name for the event")]
    EmptyName,

    #[error("Enter a date")]
    EmptyDate,

    #[error("Unrecognized date format: \"{0}\"")]
    UnrecognizedDate(String),
}

/// Result type alias for dday operations.
pub type DdayResult<T> = Result<T, DdayError>;
