/// Operations exposed to the request-handling layer
///
/// This module contains the operation set external clients reach through
/// the JSON-RPC front end. Each operation validates its input, talks to the
/// store, and returns a value or a typed error.

pub mod create;
pub mod dashboard;
pub mod delete;
pub mod list;
pub mod logs;
pub mod toggle;
pub mod update;

// Re-export operation functions for easy access
pub use create::*;
pub use dashboard::*;
pub use delete::*;
pub use list::*;
pub use logs::*;
pub use toggle::*;
pub use update::*;

use thiserror::Error;

use crate::domain::{DomainError, HabitId};
use crate::storage::StoreError;

/// Errors an operation can surface to its caller
///
/// Validation failures carry a descriptive message and are never fatal;
/// references to a nonexistent habit get their own variant so the wire
/// layer can map them to a distinct code.
#[derive(Error, Debug)]
pub enum OpError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Habit not found: {0}")]
    HabitNotFound(HabitId),

    #[error(transparent)]
    Store(#[from] StoreError),
}
