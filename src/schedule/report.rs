use chrono::NaiveDate;
use serde::Serialize;

use super::tasks::{Notification, ReassessmentTask};
use crate::report_helpers::{self, pad_display};

/// Print the reassessment task list followed by pending notifications.
pub fn print_report(
    tasks: &[&ReassessmentTask],
    notifications: &[Notification],
    today: NaiveDate,
    hidden: usize,
) {
    let separator = report_helpers::separator(78);
    println!("Reassessment Tasks ({today})");
    println!("{separator}");

    if tasks.is_empty() {
        println!(" No reassessments scheduled.");
    } else {
        let name_width = tasks
            .iter()
            .map(|t| unicode_width::UnicodeWidthStr::width(t.patient_name.as_str()))
            .max()
            .unwrap_or(7)
            .clamp(7, 30);
        println!(
            " {}  {:<9}  {:<10}  {:<10}  {:>7}",
            pad_display("Patient", name_width),
            "Severity",
            "Due",
            "Status",
            "Overdue"
        );
        println!("{separator}");
        for t in tasks {
            let overdue = if t.schedule.days_overdue > 0 {
                format!("{}d", t.schedule.days_overdue)
            } else {
                String::new()
            };
            println!(
                " {}  {:<9}  {:<10}  {:<10}  {:>7}",
                pad_display(&t.patient_name, name_width),
                t.severity.as_str(),
                t.schedule.next_due_date,
                t.schedule.status.as_str(),
                overdue
            );
        }
    }
    println!("{separator}");
    if hidden > 0 {
        println!(" {hidden} task(s) overdue beyond the active window hidden (use --all)");
    }

    if notifications.is_empty() {
        return;
    }
    println!();
    println!(" Notifications");
    println!("{separator}");
    for n in notifications {
        println!(" [{}] {}", n.id, n.message);
    }
    println!("{separator}");
}

#[derive(Serialize)]
struct JsonTasks<'a> {
    today: NaiveDate,
    hidden: usize,
    tasks: &'a [&'a ReassessmentTask],
    notifications: &'a [Notification],
}

pub fn print_json(
    tasks: &[&ReassessmentTask],
    notifications: &[Notification],
    today: NaiveDate,
    hidden: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&JsonTasks {
        today,
        hidden,
        tasks,
        notifications,
    })
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
