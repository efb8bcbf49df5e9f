/// Operation for toggling a day's completion

use serde::Deserialize;

use crate::domain::{parse_day, HabitId, HabitLog};
use crate::ops::OpError;
use crate::storage::HabitStore;

/// Parameters for toggling one habit's completion on one day
#[derive(Debug, Deserialize)]
pub struct ToggleParams {
    pub habit_id: HabitId,
    /// Calendar date as yyyy-MM-dd; a date-time is truncated to its day
    pub date: String,
}

/// Flip the completion flag for (habit, day), creating the log if absent
///
/// A fresh log starts completed. The owning habit is not checked to exist,
/// matching the unenforced foreign reference in the data model.
pub fn toggle_completion<S: HabitStore>(
    store: &S,
    params: ToggleParams,
) -> Result<HabitLog, OpError> {
    let date = parse_day(&params.date)?;

    let log = store.toggle_completion(params.habit_id, date)?;
    tracing::info!(
        "Toggled habit {} on {} to completed={}",
        params.habit_id,
        date,
        log.completed
    );

    Ok(log)
}
