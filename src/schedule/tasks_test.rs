use super::*;
use crate::schedule::reassessment;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task(id: &str, last: NaiveDate, severity: SeverityLevel, today: NaiveDate) -> ReassessmentTask {
    ReassessmentTask {
        patient_id: id.to_string(),
        patient_name: format!("Paciente {id}"),
        severity,
        schedule: reassessment(last, severity, today),
    }
}

#[test]
fn overdue_within_window_stays_active() {
    let today = date(2024, 2, 20);
    let tasks = vec![task("a", date(2024, 1, 15), SeverityLevel::Severa, today)];
    let active = active_tasks(&tasks, 7);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].schedule.days_overdue, 5);
}

#[test]
fn overdue_beyond_window_is_excluded_but_queryable() {
    let today = date(2024, 3, 1);
    let tasks = vec![task("a", date(2024, 1, 15), SeverityLevel::Severa, today)];
    assert_eq!(tasks[0].schedule.days_overdue, 15);
    assert!(active_tasks(&tasks, 7).is_empty());
    assert_eq!(all_tasks(&tasks).len(), 1);
}

#[test]
fn window_boundary_is_inclusive() {
    let today = date(2024, 2, 22);
    let tasks = vec![task("a", date(2024, 1, 15), SeverityLevel::Severa, today)];
    assert_eq!(tasks[0].schedule.days_overdue, 7);
    assert_eq!(active_tasks(&tasks, 7).len(), 1);
}

#[test]
fn active_tasks_sorted_by_due_date() {
    let today = date(2024, 2, 20);
    let tasks = vec![
        task("c", date(2024, 1, 20), SeverityLevel::Normal, today),
        task("a", date(2024, 1, 18), SeverityLevel::Moderada, today),
        task("b", date(2024, 1, 20), SeverityLevel::Leve, today),
    ];
    let ids: Vec<&str> = active_tasks(&tasks, 7)
        .iter()
        .map(|t| t.patient_id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn notifications_skip_upcoming_and_acknowledged() {
    let today = date(2024, 3, 20);
    let tasks = vec![
        task("due", date(2024, 1, 20), SeverityLevel::Leve, today),
        task("late", date(2024, 2, 17), SeverityLevel::Severa, today),
        task("later", date(2024, 3, 1), SeverityLevel::Normal, today),
    ];
    let active = active_tasks(&tasks, 7);

    let none_acked = pending_notifications(&active, &HashSet::new());
    let ids: Vec<&str> = none_acked.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["late:2024-03-17", "due:2024-03-20"]);
    assert_eq!(none_acked[0].status, ScheduleStatus::Overdue);
    assert_eq!(none_acked[0].days_overdue, 3);
    assert!(none_acked[0].message.contains("3 dia(s)"));
    assert_eq!(none_acked[1].status, ScheduleStatus::DueToday);

    let acked: HashSet<String> = ["due:2024-03-20".to_string()].into_iter().collect();
    let pending = pending_notifications(&active, &acked);
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].patient_id, "late");
}

#[test]
fn acknowledging_old_cycle_does_not_silence_new_one() {
    let today = date(2024, 4, 15);
    let tasks = vec![task("a", date(2024, 3, 15), SeverityLevel::Severa, today)];
    let acked: HashSet<String> = ["a:2024-02-15".to_string()].into_iter().collect();
    let pending = pending_notifications(&all_tasks(&tasks), &acked);
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "a:2024-04-15");
}
