/// HabitLog entity for per-day completion records
///
/// This module defines the HabitLog struct that records one habit's
/// completion state on one calendar day, along with the upsert input shape
/// the store shallow-merges by natural key.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{HabitId, LogId, LogStatus};

/// A record of one habit's completion state on one calendar day
///
/// Natural key is (habit_id, date) - the store guarantees at most one log
/// per habit per day. The owning habit id is a foreign reference only;
/// nothing checks that the habit exists. `completed` and `status` are two
/// overlapping representations of the same state with no enforced
/// consistency between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitLog {
    /// Store-assigned identifier
    pub id: LogId,
    /// Owning habit (unenforced foreign reference)
    pub habit_id: HabitId,
    /// Calendar day this record is for, no time component
    pub date: NaiveDate,
    /// Whether the habit was completed on this day
    pub completed: bool,
    /// Progress state for this day
    pub status: LogStatus,
}

impl HabitLog {
    /// Flip the completion flag, realigning status with the new flag
    ///
    /// A prior `in_progress` status is discarded by the flip.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
        self.status = LogStatus::from_completed(self.completed);
    }
}

/// Upsert input for a single day's log
///
/// Identifies the record by natural key; the optional fields are
/// shallow-merged over an existing record (provided fields overwrite,
/// missing fields keep their stored value). When no record exists yet the
/// absent fields fall back to `completed = false`, `status = pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogUpsert {
    pub habit_id: HabitId,
    pub date: NaiveDate,
    pub completed: Option<bool>,
    pub status: Option<LogStatus>,
}

impl LogUpsert {
    /// Materialize a brand-new record from this upsert
    pub fn into_log(self, id: LogId) -> HabitLog {
        HabitLog {
            id,
            habit_id: self.habit_id,
            date: self.date,
            completed: self.completed.unwrap_or(false),
            status: self.status.unwrap_or_default(),
        }
    }

    /// Shallow-merge the provided fields into an existing record
    ///
    /// The existing identifier, habit id, and date are preserved.
    pub fn merge_into(self, existing: &mut HabitLog) {
        if let Some(completed) = self.completed {
            existing.completed = completed;
        }
        if let Some(status) = self.status {
            existing.status = status;
        }
    }
}
