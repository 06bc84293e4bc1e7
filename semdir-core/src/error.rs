//! Error types for semdir operations.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while parsing a timetable or generating folders.
#[derive(Error, Debug)]
pub enum SemdirError {
    #[error("Expected 3 fields (subject, weekday, time span): {0}")]
    MalformedLine(String),

    #[error("Subject must not be empty: {0}")]
    EmptySubject(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Time span must be start-end: {0}")]
    BadTimeSpan(String),

    #[error("Bad time token: {0}")]
    BadTime(String),

    #[error("Time out of range: {0}")]
    TimeOutOfRange(String),

    #[error("End time is not after start time: {0}")]
    TimeOrder(String),

    #[error("Bad date (expected YYYY-MM-DD): {0}")]
    BadDate(String),

    #[error("Bad holiday date (expected YYYY-MM-DD): {0}")]
    BadHoliday(String),

    #[error("End date {end} is before start date {start}")]
    DateOrder { start: NaiveDate, end: NaiveDate },

    #[error("Date {date} is before the semester start {semester_start}")]
    BeforeSemesterStart {
        date: NaiveDate,
        semester_start: NaiveDate,
    },

    #[error("Nothing to generate for the given range")]
    EmptyPlan,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for semdir operations.
pub type SemdirResult<T> = Result<T, SemdirError>;
