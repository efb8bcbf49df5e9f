/// Operations for reading habits

use serde::Deserialize;

use crate::domain::{Habit, HabitId};
use crate::ops::OpError;
use crate::storage::HabitStore;

/// Parameters for fetching a single habit
#[derive(Debug, Deserialize)]
pub struct GetHabitParams {
    pub habit_id: HabitId,
}

/// List all habits in creation order
pub fn list_habits<S: HabitStore>(store: &S) -> Result<Vec<Habit>, OpError> {
    Ok(store.habits()?)
}

/// Fetch a single habit; absence is a typed `None`, not an error
pub fn get_habit<S: HabitStore>(
    store: &S,
    params: GetHabitParams,
) -> Result<Option<Habit>, OpError> {
    Ok(store.habit(params.habit_id)?)
}
