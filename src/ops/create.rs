/// Operation for creating new habits

use chrono::Utc;
use serde::Deserialize;

use crate::domain::{parse_time_of_day, Habit, HabitDraft};
use crate::ops::OpError;
use crate::storage::HabitStore;

/// Parameters for creating a new habit
#[derive(Debug, Deserialize)]
pub struct CreateHabitParams {
    pub name: String,
    pub description: Option<String>,
    /// Comma-separated weekday indices, 0 = Sunday (e.g., "1,3,5")
    pub frequency_days: String,
    /// Optional reminder time as HH:MM or HH:MM:SS
    pub reminder_time: Option<String>,
    /// Optional display color; defaults when omitted
    pub color: Option<String>,
}

/// Create a new habit using the provided store
///
/// The creation date is stamped with today's date; the store assigns the
/// identifier.
pub fn create_habit<S: HabitStore>(store: &S, params: CreateHabitParams) -> Result<Habit, OpError> {
    let reminder_time = params
        .reminder_time
        .as_deref()
        .map(parse_time_of_day)
        .transpose()?;

    let draft = HabitDraft::new(
        params.name,
        params.description,
        params.frequency_days,
        reminder_time,
        params.color,
        Utc::now().naive_utc().date(),
    )?;

    let habit = store.create_habit(draft)?;
    tracing::info!("Created habit '{}' ({})", habit.name, habit.id);

    Ok(habit)
}
