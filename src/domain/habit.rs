/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// activity the user wants to track, along with the validated insert shape
/// and the partial-update patch.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId};

/// Default display color assigned when the caller does not pick one
pub const DEFAULT_COLOR: &str = "#4F46E5";

/// A habit represents something the user wants to do regularly
///
/// Each habit has a display name, an optional description, a frequency-days
/// encoding (comma-separated weekday indices 0-6, stored as given and not
/// enforced anywhere), an optional reminder time, and a display color.
/// The identifier is immutable; every other field is mutable via update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Store-assigned identifier, immutable for the habit's lifetime
    pub id: HabitId,
    /// Display name (e.g., "Morning Meditation")
    pub name: String,
    /// Optional detailed description
    pub description: Option<String>,
    /// Comma-separated weekday indices, 0 = Sunday (e.g., "1,3,5")
    pub frequency_days: String,
    /// Optional daily reminder time
    pub reminder_time: Option<NaiveTime>,
    /// Display color as a hex string
    pub color: String,
    /// Calendar day the habit was created
    pub created_at: NaiveDate,
}

/// Validated insert shape for a habit - everything but the identifier
///
/// The store assigns the identifier when the draft is persisted, so drafts
/// only exist on the create path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDraft {
    pub name: String,
    pub description: Option<String>,
    pub frequency_days: String,
    pub reminder_time: Option<NaiveTime>,
    pub color: String,
    pub created_at: NaiveDate,
}

impl HabitDraft {
    /// Create a validated habit draft
    ///
    /// Name must be non-empty after trimming and at most 100 characters.
    /// Frequency days are stored as given; nothing in the system enforces
    /// or interprets them.
    pub fn new(
        name: String,
        description: Option<String>,
        frequency_days: String,
        reminder_time: Option<NaiveTime>,
        color: Option<String>,
        created_at: NaiveDate,
    ) -> Result<Self, DomainError> {
        validate_name(&name)?;

        Ok(Self {
            name,
            description,
            frequency_days,
            reminder_time,
            color: color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            created_at,
        })
    }

    /// Attach a store-assigned identifier, producing the full entity
    pub fn into_habit(self, id: HabitId) -> Habit {
        Habit {
            id,
            name: self.name,
            description: self.description,
            frequency_days: self.frequency_days,
            reminder_time: self.reminder_time,
            color: self.color,
            created_at: self.created_at,
        }
    }
}

/// Partial field set for updating an existing habit
///
/// Only the provided fields are overlaid onto the stored habit; the
/// identifier and creation date never change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HabitUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub frequency_days: Option<String>,
    pub reminder_time: Option<NaiveTime>,
    pub color: Option<String>,
}

impl HabitUpdate {
    /// Validate the patch without applying it
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(ref name) = self.name {
            validate_name(name)?;
        }
        Ok(())
    }

    /// Overlay the provided fields onto an existing habit
    pub fn apply(self, habit: &mut Habit) {
        if let Some(name) = self.name {
            habit.name = name;
        }
        if let Some(description) = self.description {
            habit.description = Some(description);
        }
        if let Some(frequency_days) = self.frequency_days {
            habit.frequency_days = frequency_days;
        }
        if let Some(reminder_time) = self.reminder_time {
            habit.reminder_time = Some(reminder_time);
        }
        if let Some(color) = self.color {
            habit.color = color;
        }
    }

    /// Whether the patch carries any field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.frequency_days.is_none()
            && self.reminder_time.is_none()
            && self.color.is_none()
    }
}

/// Validate a habit name according to business rules
fn validate_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidHabitName(
            "Habit name cannot be empty".to_string(),
        ));
    }

    if trimmed.len() > 100 {
        return Err(DomainError::InvalidHabitName(
            "Habit name cannot be longer than 100 characters".to_string(),
        ));
    }

    Ok(())
}
