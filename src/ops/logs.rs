/// Operations for reading and upserting habit logs

use serde::Deserialize;

use crate::domain::{parse_day, HabitId, HabitLog, LogStatus, LogUpsert};
use crate::ops::OpError;
use crate::storage::HabitStore;

/// Parameters for listing all habits' logs on one day
#[derive(Debug, Deserialize)]
pub struct LogsForDateParams {
    /// Calendar date as yyyy-MM-dd; a date-time is truncated to its day
    pub date: String,
}

/// Parameters for listing one habit's full log history
#[derive(Debug, Deserialize)]
pub struct LogsForHabitParams {
    pub habit_id: HabitId,
}

/// Parameters for creating or updating a single day's log
#[derive(Debug, Deserialize)]
pub struct UpsertLogParams {
    pub habit_id: HabitId,
    pub date: String,
    pub completed: Option<bool>,
    pub status: Option<LogStatus>,
}

/// List every habit's log on the given day
pub fn logs_for_date<S: HabitStore>(
    store: &S,
    params: LogsForDateParams,
) -> Result<Vec<HabitLog>, OpError> {
    let date = parse_day(&params.date)?;
    Ok(store.logs_for_date(date)?)
}

/// List one habit's logs, unordered as stored
pub fn logs_for_habit<S: HabitStore>(
    store: &S,
    params: LogsForHabitParams,
) -> Result<Vec<HabitLog>, OpError> {
    Ok(store.logs_for_habit(params.habit_id)?)
}

/// Create or shallow-merge the log at (habit, day)
///
/// Provided fields overwrite the stored record; the record keeps its
/// identifier across repeated upserts. Nothing checks that the provided
/// `completed` flag and `status` agree with each other.
pub fn upsert_log<S: HabitStore>(store: &S, params: UpsertLogParams) -> Result<HabitLog, OpError> {
    let date = parse_day(&params.date)?;

    let log = store.upsert_log(LogUpsert {
        habit_id: params.habit_id,
        date,
        completed: params.completed,
        status: params.status,
    })?;

    Ok(log)
}
