/// Core identifier and status types used throughout the domain layer
///
/// This module defines the surrogate id wrappers, the per-day log status,
/// and the calendar-date parsing shared by every external boundary.

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::DomainError;

/// Unique identifier for a habit
///
/// This is a wrapper around the store-assigned surrogate id to provide type
/// safety - you can't accidentally pass a habit id where a log id is
/// expected. Identifiers come from a monotonically increasing counter and
/// are never reused, even after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub i64);

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a habit log
///
/// Similar to HabitId but for individual per-day completion records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogId(pub i64);

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Progress state of a single day's log
///
/// `Completed` agrees with the log's boolean flag being true; the converse
/// is not enforced, so `Pending` and `InProgress` logs carry
/// `completed = false` by convention only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStatus {
    Pending,
    InProgress,
    Completed,
}

impl LogStatus {
    /// The status a toggle assigns for a given completion flag
    ///
    /// Toggling never produces `InProgress`; a prior in-progress state is
    /// discarded by the flip.
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            LogStatus::Completed
        } else {
            LogStatus::Pending
        }
    }

    /// Wire representation of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Pending => "pending",
            LogStatus::InProgress => "in_progress",
            LogStatus::Completed => "completed",
        }
    }
}

impl Default for LogStatus {
    fn default() -> Self {
        LogStatus::Pending
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a calendar date crossing the external boundary
///
/// Accepts `yyyy-MM-dd`, or an RFC 3339 date-time whose time component is
/// discarded - any time-of-day on the input is gone before the value is
/// compared against a store key.
pub fn parse_day(input: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }

    Err(DomainError::InvalidDate(format!(
        "expected yyyy-MM-dd or an RFC 3339 date-time, got '{}'",
        input
    )))
}

/// Format a calendar date for the external boundary (`yyyy-MM-dd`)
pub fn format_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a reminder time crossing the external boundary
///
/// Accepts `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, DomainError> {
    let trimmed = input.trim();

    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| {
            DomainError::InvalidTime(format!("expected HH:MM or HH:MM:SS, got '{}'", input))
        })
}
