/// In-memory implementation of the habit store
///
/// This module provides the transient map-backed store the service runs on.
/// All collections live behind a single mutex, so every operation - the
/// toggle read-modify-write in particular - is atomic with respect to
/// concurrent callers.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::domain::{
    Habit, HabitDraft, HabitId, HabitLog, HabitUpdate, LogId, LogStatus, LogUpsert,
};
use crate::storage::{HabitStore, LogTotals, StoreError};

/// Natural key for a log record: one habit, one calendar day
type LogKey = (HabitId, NaiveDate);

#[derive(Debug, Default)]
struct Inner {
    habits: BTreeMap<HabitId, Habit>,
    logs: BTreeMap<LogKey, HabitLog>,
    next_habit_id: i64,
    next_log_id: i64,
}

/// Map-backed store with monotonically increasing identifier counters
///
/// Counters start at 1 and are never reused, even after deletion. Habit
/// iteration order follows the id order, which is creation order.
#[derive(Debug)]
pub struct MemStore {
    inner: Mutex<Inner>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                habits: BTreeMap::new(),
                logs: BTreeMap::new(),
                next_habit_id: 1,
                next_log_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("habit store mutex poisoned")
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HabitStore for MemStore {
    fn create_habit(&self, draft: HabitDraft) -> Result<Habit, StoreError> {
        let mut inner = self.lock();

        let id = HabitId(inner.next_habit_id);
        inner.next_habit_id += 1;

        let habit = draft.into_habit(id);
        inner.habits.insert(id, habit.clone());

        tracing::debug!("Created habit '{}' ({})", habit.name, habit.id);
        Ok(habit)
    }

    fn habit(&self, id: HabitId) -> Result<Option<Habit>, StoreError> {
        Ok(self.lock().habits.get(&id).cloned())
    }

    fn habits(&self) -> Result<Vec<Habit>, StoreError> {
        Ok(self.lock().habits.values().cloned().collect())
    }

    fn update_habit(&self, id: HabitId, update: HabitUpdate) -> Result<Option<Habit>, StoreError> {
        let mut inner = self.lock();

        let habit = match inner.habits.get_mut(&id) {
            Some(habit) => habit,
            None => return Ok(None),
        };

        update.apply(habit);
        let updated = habit.clone();

        tracing::debug!("Updated habit '{}' ({})", updated.name, updated.id);
        Ok(Some(updated))
    }

    fn delete_habit(&self, id: HabitId) -> Result<bool, StoreError> {
        let mut inner = self.lock();

        if inner.habits.remove(&id).is_none() {
            return Ok(false);
        }

        // Cascade: a deleted habit's logs must stop counting toward the
        // global totals.
        inner.logs.retain(|&(habit_id, _), _| habit_id != id);

        tracing::debug!("Deleted habit {} and its logs", id);
        Ok(true)
    }

    fn log(&self, habit_id: HabitId, date: NaiveDate) -> Result<Option<HabitLog>, StoreError> {
        Ok(self.lock().logs.get(&(habit_id, date)).cloned())
    }

    fn logs_for_date(&self, date: NaiveDate) -> Result<Vec<HabitLog>, StoreError> {
        Ok(self
            .lock()
            .logs
            .values()
            .filter(|log| log.date == date)
            .cloned()
            .collect())
    }

    fn logs_for_habit(&self, habit_id: HabitId) -> Result<Vec<HabitLog>, StoreError> {
        Ok(self
            .lock()
            .logs
            .range((habit_id, NaiveDate::MIN)..=(habit_id, NaiveDate::MAX))
            .map(|(_, log)| log.clone())
            .collect())
    }

    fn upsert_log(&self, upsert: LogUpsert) -> Result<HabitLog, StoreError> {
        let mut inner = self.lock();
        let key = (upsert.habit_id, upsert.date);

        if let Some(existing) = inner.logs.get_mut(&key) {
            upsert.merge_into(existing);
            let merged = existing.clone();
            tracing::debug!("Merged log {} for habit {} on {}", merged.id, key.0, key.1);
            return Ok(merged);
        }

        let id = LogId(inner.next_log_id);
        inner.next_log_id += 1;

        let log = upsert.into_log(id);
        inner.logs.insert(key, log.clone());

        tracing::debug!("Created log {} for habit {} on {}", log.id, key.0, key.1);
        Ok(log)
    }

    fn toggle_completion(
        &self,
        habit_id: HabitId,
        date: NaiveDate,
    ) -> Result<HabitLog, StoreError> {
        // Read and write happen under one lock acquisition, so two toggles
        // on the same key serialize and neither update is lost.
        let mut inner = self.lock();
        let key = (habit_id, date);

        if let Some(existing) = inner.logs.get_mut(&key) {
            existing.toggle();
            let toggled = existing.clone();
            tracing::debug!(
                "Toggled habit {} on {} to completed={}",
                habit_id,
                date,
                toggled.completed
            );
            return Ok(toggled);
        }

        let id = LogId(inner.next_log_id);
        inner.next_log_id += 1;

        let log = HabitLog {
            id,
            habit_id,
            date,
            completed: true,
            status: LogStatus::Completed,
        };
        inner.logs.insert(key, log.clone());

        tracing::debug!("First toggle created log {} for habit {} on {}", id, habit_id, date);
        Ok(log)
    }

    fn log_totals(&self) -> Result<LogTotals, StoreError> {
        let inner = self.lock();
        let total = inner.logs.len() as u64;
        let completed = inner.logs.values().filter(|log| log.completed).count() as u64;
        Ok(LogTotals { total, completed })
    }
}
