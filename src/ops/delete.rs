/// Operation for deleting habits

use serde::{Deserialize, Serialize};

use crate::domain::HabitId;
use crate::ops::OpError;
use crate::storage::HabitStore;

/// Parameters for deleting a habit
#[derive(Debug, Deserialize)]
pub struct DeleteHabitParams {
    pub habit_id: HabitId,
}

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub deleted: bool,
}

/// Delete a habit and its logs using the provided store
///
/// An unknown id reports `deleted = false` rather than an error.
pub fn delete_habit<S: HabitStore>(
    store: &S,
    params: DeleteHabitParams,
) -> Result<DeleteHabitResponse, OpError> {
    let deleted = store.delete_habit(params.habit_id)?;

    if deleted {
        tracing::info!("Deleted habit {}", params.habit_id);
    }

    Ok(DeleteHabitResponse { deleted })
}
