/// Public library interface for the habit tracker service
///
/// This module exports the service type and the public domain, storage,
/// and operation types that can be used by other applications or tests.

use chrono::{Duration, Utc};
use thiserror::Error;

// Internal modules
mod api;
mod domain;
mod ops;
mod storage;

// Re-export public modules and types
pub use api::{error_codes, JsonRpcRequest, JsonRpcResponse, RpcServer};
pub use domain::*;
pub use ops::*;
pub use storage::{HabitStore, LogTotals, MemStore, StoreError};

/// Errors that can occur during service operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Storage error: {0}")]
    Store(#[from] storage::StoreError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The habit tracker service: an in-memory store plus streak policy
///
/// State lives for the lifetime of the process; a real deployment would
/// swap a relational store in behind the same `HabitStore` seam.
pub struct HabitTracker {
    store: MemStore,
    streak_rule: StreakRule,
}

impl HabitTracker {
    /// Create a new habit tracker with an empty store
    pub fn new(streak_rule: StreakRule) -> Self {
        Self {
            store: MemStore::new(),
            streak_rule,
        }
    }

    /// Get a reference to the store
    pub fn store(&self) -> &MemStore {
        &self.store
    }

    /// The streak rule the dashboard computations run under
    pub fn streak_rule(&self) -> StreakRule {
        self.streak_rule
    }

    /// Populate the store with a small demonstration data set
    ///
    /// Four habits with thirty days of history each, completing roughly 7
    /// days in 10 on a fixed pattern so repeated runs look the same.
    pub fn seed_demo_data(&self) -> Result<(), ServerError> {
        let today = Utc::now().naive_utc().date();

        let samples = [
            ("Morning Meditation", "15 minutes of mindfulness meditation", "1,2,3,4,5", "#4F46E5"),
            ("Exercise", "45 minutes workout session", "1,3,5", "#A855F7"),
            ("Read a Book", "Read for 30 minutes", "0,1,2,3,4,5,6", "#F97316"),
            ("Drink Water", "8 glasses throughout the day", "0,1,2,3,4,5,6", "#06B6D4"),
        ];

        for (name, description, frequency_days, color) in samples {
            let habit = self.store.create_habit(HabitDraft::new(
                name.to_string(),
                Some(description.to_string()),
                frequency_days.to_string(),
                None,
                Some(color.to_string()),
                today,
            )?)?;

            for offset in 0..30i64 {
                let date = today - Duration::days(offset);
                let completed = (offset + habit.id.0) % 10 < 7;

                self.store.upsert_log(LogUpsert {
                    habit_id: habit.id,
                    date,
                    completed: Some(completed),
                    status: Some(LogStatus::from_completed(completed)),
                })?;
            }
        }

        tracing::info!("Seeded demo data: {} habits", samples.len());
        Ok(())
    }

    /// Run the JSON-RPC service over stdin/stdout
    ///
    /// This method blocks until stdin closes or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("Starting habit tracker service...");

        let mut server = RpcServer::new(self);
        server.run().await
    }
}
