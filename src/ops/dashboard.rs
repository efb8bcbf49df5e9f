/// Dashboard aggregation operations

use crate::domain::{
    completion_percent, current_streak, sort_newest_first, DashboardStats, HabitWithStats,
    StreakRule,
};
use crate::ops::OpError;
use crate::storage::HabitStore;

/// Aggregate numbers for the dashboard header
///
/// Sums every habit's current streak and computes the global completion
/// rate over the raw log count across all habits - deliberately not an
/// average of per-habit rates.
pub fn dashboard_stats<S: HabitStore>(
    store: &S,
    rule: StreakRule,
) -> Result<DashboardStats, OpError> {
    let habits = store.habits()?;

    let mut current_streaks = 0u32;
    for habit in &habits {
        let mut logs = store.logs_for_habit(habit.id)?;
        sort_newest_first(&mut logs);
        current_streaks += current_streak(&logs, rule);
    }

    let totals = store.log_totals()?;

    Ok(DashboardStats {
        current_streaks,
        completion_rate: completion_percent(totals.completed, totals.total),
        total_habits: habits.len() as u32,
    })
}

/// Every habit joined with its streak, rate, and ordered log history
pub fn habits_with_stats<S: HabitStore>(
    store: &S,
    rule: StreakRule,
) -> Result<Vec<HabitWithStats>, OpError> {
    let habits = store.habits()?;

    let mut result = Vec::with_capacity(habits.len());
    for habit in habits {
        let logs = store.logs_for_habit(habit.id)?;
        result.push(HabitWithStats::compute(habit, logs, rule));
    }

    Ok(result)
}
