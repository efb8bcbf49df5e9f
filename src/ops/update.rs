/// Operation for updating existing habits

use serde::Deserialize;

use crate::domain::{parse_time_of_day, Habit, HabitId, HabitUpdate};
use crate::ops::OpError;
use crate::storage::HabitStore;

/// Parameters for updating an existing habit
///
/// Only provided fields are applied; the identifier and creation date are
/// immutable.
#[derive(Debug, Deserialize)]
pub struct UpdateHabitParams {
    pub habit_id: HabitId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub frequency_days: Option<String>,
    pub reminder_time: Option<String>,
    pub color: Option<String>,
}

/// Update a habit using the provided store
///
/// An unknown id is a typed not-found error.
pub fn update_habit<S: HabitStore>(store: &S, params: UpdateHabitParams) -> Result<Habit, OpError> {
    let reminder_time = params
        .reminder_time
        .as_deref()
        .map(parse_time_of_day)
        .transpose()?;

    let update = HabitUpdate {
        name: params.name,
        description: params.description,
        frequency_days: params.frequency_days,
        reminder_time,
        color: params.color,
    };
    update.validate()?;

    match store.update_habit(params.habit_id, update)? {
        Some(habit) => {
            tracing::info!("Updated habit '{}' ({})", habit.name, habit.id);
            Ok(habit)
        }
        None => Err(OpError::HabitNotFound(params.habit_id)),
    }
}
