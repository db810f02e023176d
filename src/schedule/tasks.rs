//! Reassessment task list and notification shaping.
//!
//! Acknowledged notifications are passed in explicitly as a set of ids;
//! nothing here remembers what was already shown.

use std::collections::HashSet;

use serde::Serialize;

use super::{ReassessmentSchedule, ScheduleStatus};
use crate::classify::SeverityLevel;

/// One patient's next reassessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReassessmentTask {
    pub patient_id: String,
    pub patient_name: String,
    pub severity: SeverityLevel,
    pub schedule: ReassessmentSchedule,
}

impl ReassessmentTask {
    /// Stable notification id for this due cycle. A new measurement moves
    /// the due date and therefore yields a new id.
    pub fn notification_id(&self) -> String {
        format!("{}:{}", self.patient_id, self.schedule.next_due_date)
    }

    /// Overdue beyond the active window.
    pub fn is_stale(&self, window_days: i64) -> bool {
        self.schedule.status == ScheduleStatus::Overdue && self.schedule.days_overdue > window_days
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: String,
    pub patient_id: String,
    pub status: ScheduleStatus,
    pub days_overdue: i64,
    pub message: String,
}

/// Tasks for the day-to-day view: everything except overdue items older than
/// `window_days`, ordered by due date.
pub fn active_tasks(tasks: &[ReassessmentTask], window_days: i64) -> Vec<&ReassessmentTask> {
    let mut active: Vec<&ReassessmentTask> =
        tasks.iter().filter(|t| !t.is_stale(window_days)).collect();
    sort_by_due(&mut active);
    active
}

/// Every task, stale ones included, ordered by due date.
pub fn all_tasks(tasks: &[ReassessmentTask]) -> Vec<&ReassessmentTask> {
    let mut all: Vec<&ReassessmentTask> = tasks.iter().collect();
    sort_by_due(&mut all);
    all
}

fn sort_by_due(tasks: &mut [&ReassessmentTask]) {
    tasks.sort_by(|a, b| {
        a.schedule
            .next_due_date
            .cmp(&b.schedule.next_due_date)
            .then_with(|| a.patient_name.cmp(&b.patient_name))
    });
}

/// Notifications for due-today and overdue tasks not yet acknowledged.
pub fn pending_notifications(
    tasks: &[&ReassessmentTask],
    acknowledged: &HashSet<String>,
) -> Vec<Notification> {
    tasks
        .iter()
        .filter(|t| t.schedule.status != ScheduleStatus::Upcoming)
        .filter(|t| !acknowledged.contains(&t.notification_id()))
        .map(|t| Notification {
            id: t.notification_id(),
            patient_id: t.patient_id.clone(),
            status: t.schedule.status,
            days_overdue: t.schedule.days_overdue,
            message: notification_message(t),
        })
        .collect()
}

fn notification_message(task: &ReassessmentTask) -> String {
    match task.schedule.status {
        ScheduleStatus::DueToday => {
            format!("Reavaliação de {} prevista para hoje", task.patient_name)
        }
        ScheduleStatus::Overdue => format!(
            "Reavaliação de {} atrasada há {} dia(s) (prevista para {})",
            task.patient_name,
            task.schedule.days_overdue,
            task.schedule.next_due_date.format("%d/%m/%Y")
        ),
        ScheduleStatus::Upcoming => format!(
            "Reavaliação de {} prevista para {}",
            task.patient_name,
            task.schedule.next_due_date.format("%d/%m/%Y")
        ),
    }
}

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tests;
