//! Reassessment scheduling.
//!
//! The schedule is never stored: callers keep only the last measurement date
//! and its severity, and recompute against the current day on every read.

pub mod report;
pub mod tasks;

use std::fmt;

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::classify::SeverityLevel;

/// Overdue items older than this many days leave the default task view.
pub const DEFAULT_ACTIVE_OVERDUE_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Upcoming,
    DueToday,
    Overdue,
}

impl ScheduleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::DueToday => "due today",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReassessmentSchedule {
    pub last_measurement_date: NaiveDate,
    pub interval_months: u32,
    pub next_due_date: NaiveDate,
    pub status: ScheduleStatus,
    /// Whole days past due; 0 unless overdue.
    pub days_overdue: i64,
}

/// Months until the next measurement for a severity.
pub fn interval_months(severity: SeverityLevel) -> u32 {
    match severity {
        SeverityLevel::Normal => 3,
        SeverityLevel::Leve => 2,
        SeverityLevel::Moderada | SeverityLevel::Severa => 1,
    }
}

/// Calendar-month addition; the day clamps to the end of shorter months
/// (Jan 31 + 1 month = Feb 28/29).
pub fn next_due(last_measurement_date: NaiveDate, severity: SeverityLevel) -> NaiveDate {
    last_measurement_date
        .checked_add_months(Months::new(interval_months(severity)))
        .unwrap_or(NaiveDate::MAX)
}

/// Classify a due date against today.
/// Returns the status and the whole days overdue (0 unless overdue).
pub fn schedule_status(next_due: NaiveDate, today: NaiveDate) -> (ScheduleStatus, i64) {
    if next_due == today {
        (ScheduleStatus::DueToday, 0)
    } else if next_due < today {
        (ScheduleStatus::Overdue, (today - next_due).num_days())
    } else {
        (ScheduleStatus::Upcoming, 0)
    }
}

/// Full schedule for a measurement date and severity as seen from `today`.
pub fn reassessment(
    last_measurement_date: NaiveDate,
    severity: SeverityLevel,
    today: NaiveDate,
) -> ReassessmentSchedule {
    let next_due_date = next_due(last_measurement_date, severity);
    let (status, days_overdue) = schedule_status(next_due_date, today);
    log::debug!(
        "reassessment: last {last_measurement_date}, {severity} -> due {next_due_date} ({status})"
    );
    ReassessmentSchedule {
        last_measurement_date,
        interval_months: interval_months(severity),
        next_due_date,
        status,
        days_overdue,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
