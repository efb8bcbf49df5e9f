/// Streak and completion-rate calculation
///
/// This module derives a habit's current streak and completion percentage
/// from its per-day logs, plus the dashboard aggregates built on top of
/// those numbers.

use chrono::Duration;
use serde::Serialize;

use crate::domain::{Habit, HabitLog};

/// How the current-streak walk treats gaps between logged days
///
/// The reference behavior counts consecutive completed *log entries* in
/// date order: a day with no record at all does not break a streak, only an
/// explicit `completed = false` entry does. `ConsecutiveDays` is the
/// stricter opt-in variant that also breaks the streak when two completed
/// entries are not adjacent calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreakRule {
    #[default]
    ConsecutiveEntries,
    ConsecutiveDays,
}

/// Order a habit's logs newest first
///
/// The streak walk and the log list handed to the dashboard both use this
/// ordering. Dates are unique per habit, so the sort is total.
pub fn sort_newest_first(logs: &mut [HabitLog]) {
    logs.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Current consecutive-completion streak, counted from the most recent log
///
/// Expects logs sorted newest first. Walks forward while entries have
/// `completed = true` and stops at the first incomplete entry or end of
/// list. Under `ConsecutiveEntries` the walk ignores calendar gaps; under
/// `ConsecutiveDays` each counted entry must fall exactly one day before
/// the previous one.
pub fn current_streak(sorted: &[HabitLog], rule: StreakRule) -> u32 {
    let mut streak = 0u32;
    let mut previous_date = None;

    for log in sorted {
        if !log.completed {
            break;
        }

        if rule == StreakRule::ConsecutiveDays {
            if let Some(previous) = previous_date {
                if log.date != previous - Duration::days(1) {
                    break;
                }
            }
        }

        streak += 1;
        previous_date = Some(log.date);
    }

    streak
}

/// Integer completion percentage, rounded half away from zero
///
/// Returns 0 when there is nothing to rate.
pub fn completion_percent(completed: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Percentage of a habit's logged days marked completed
pub fn completion_rate(logs: &[HabitLog]) -> u8 {
    let completed = logs.iter().filter(|log| log.completed).count() as u64;
    completion_percent(completed, logs.len() as u64)
}

/// A habit joined with its computed statistics
///
/// Derived on demand, never stored. The log list is ordered newest first.
#[derive(Debug, Clone, Serialize)]
pub struct HabitWithStats {
    #[serde(flatten)]
    pub habit: Habit,
    pub current_streak: u32,
    pub completion_rate: u8,
    pub logs: Vec<HabitLog>,
}

impl HabitWithStats {
    /// Compute a habit's statistics from its unordered log list
    pub fn compute(habit: Habit, mut logs: Vec<HabitLog>, rule: StreakRule) -> Self {
        sort_newest_first(&mut logs);
        Self {
            current_streak: current_streak(&logs, rule),
            completion_rate: completion_rate(&logs),
            habit,
            logs,
        }
    }
}

/// Aggregate numbers shown on the dashboard
///
/// `completion_rate` is global - completed log count over total log count
/// across all habits - not an average of per-habit rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub current_streaks: u32,
    pub completion_rate: u8,
    pub total_habits: u32,
}
