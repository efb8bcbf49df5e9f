/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, HabitLog) and the streak
/// and completion-rate computation derived from them. These types represent
/// the fundamental concepts in the habit tracking system.

pub mod habit;
pub mod log;
pub mod stats;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use log::*;
pub use stats::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),
}
