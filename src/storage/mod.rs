/// Storage layer for habit data
///
/// This module defines the store interface the rest of the system talks
/// through, along with the in-memory implementation that backs it. The
/// interface is the seam where a relational database could be swapped in,
/// with each operation becoming a single transaction boundary.

pub mod memory;

// Re-export the main storage types
pub use memory::*;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::domain::{Habit, HabitDraft, HabitId, HabitLog, HabitUpdate, LogUpsert};

/// Errors that can occur during storage operations
///
/// The in-memory store never fails; the variant exists so a database-backed
/// implementation of the same trait has somewhere to report through.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Log counts across all habits, feeding the global dashboard rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LogTotals {
    pub total: u64,
    pub completed: u64,
}

/// Trait defining the storage interface for habits and their logs
///
/// Logs are keyed by (habit id, calendar date); at most one log exists per
/// habit per day, and upsert-by-key depends on that invariant. Every
/// operation must appear atomic to concurrent callers - in particular the
/// toggle read-modify-write must serialize per key so no update is lost.
pub trait HabitStore {
    /// Persist a new habit, assigning the next habit identifier
    fn create_habit(&self, draft: HabitDraft) -> Result<Habit, StoreError>;

    /// Point lookup of a habit by id
    fn habit(&self, id: HabitId) -> Result<Option<Habit>, StoreError>;

    /// All habits, in creation order
    fn habits(&self) -> Result<Vec<Habit>, StoreError>;

    /// Overlay a partial update onto an existing habit
    ///
    /// Returns the updated habit, or `None` when the id is unknown.
    fn update_habit(&self, id: HabitId, update: HabitUpdate) -> Result<Option<Habit>, StoreError>;

    /// Delete a habit and its logs
    ///
    /// Returns `false` when the id is unknown. Deletion cascades to the
    /// habit's logs so they stop counting toward the global totals.
    fn delete_habit(&self, id: HabitId) -> Result<bool, StoreError>;

    /// Point lookup of one habit's log on one calendar day
    fn log(&self, habit_id: HabitId, date: NaiveDate) -> Result<Option<HabitLog>, StoreError>;

    /// All habits' logs on one calendar day
    fn logs_for_date(&self, date: NaiveDate) -> Result<Vec<HabitLog>, StoreError>;

    /// One habit's logs, unordered as stored
    fn logs_for_habit(&self, habit_id: HabitId) -> Result<Vec<HabitLog>, StoreError>;

    /// Create or shallow-merge a log at its natural key
    ///
    /// An existing record keeps its identifier and takes the provided
    /// fields; otherwise a new record is created with the next log id.
    /// Returns the resulting record.
    fn upsert_log(&self, upsert: LogUpsert) -> Result<HabitLog, StoreError>;

    /// Flip one day's completion flag, creating the record if absent
    ///
    /// A fresh record starts completed; an existing one flips its flag and
    /// realigns status with it. The owning habit is not checked to exist.
    fn toggle_completion(&self, habit_id: HabitId, date: NaiveDate)
        -> Result<HabitLog, StoreError>;

    /// Total and completed log counts across all habits
    fn log_totals(&self) -> Result<LogTotals, StoreError>;
}
