//! Subcommand entry points: parse CLI values, call the engine, print.

use std::collections::HashSet;
use std::error::Error;
use std::path::Path;

use chrono::NaiveDate;

use cranio::assessment::patient::{Registry, age_in_months};
use cranio::assessment::{self, Measurement, PatientSummary};
use cranio::classify;
use cranio::config::Config;
use cranio::curves::{self, Metric, ReferenceCurveTable, Sex};
use cranio::schedule::{self, tasks};

use crate::cli::MeasurementArgs;

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, Box<dyn Error>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date `{s}` (expected YYYY-MM-DD): {e}").into())
}

fn today_or(explicit: Option<&str>) -> Result<NaiveDate, Box<dyn Error>> {
    match explicit {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn parse_sex(s: Option<&str>) -> Result<Option<Sex>, Box<dyn Error>> {
    s.map(|v| v.parse::<Sex>()).transpose().map_err(Into::into)
}

pub fn build_measurement(
    args: &MeasurementArgs,
    today: NaiveDate,
) -> Result<Measurement, Box<dyn Error>> {
    let date = match &args.date {
        Some(s) => parse_date(s)?,
        None => today,
    };
    let age_months = match (args.age_months, &args.birth_date) {
        (Some(age), _) => age,
        (None, Some(birth)) => age_in_months(parse_date(birth)?, date),
        (None, None) => return Err("either --age-months or --birth-date is required".into()),
    };
    Ok(Measurement {
        length: args.length,
        width: args.width,
        diag_d: args.diag_d,
        diag_e: args.diag_e,
        head_circumference: args.head_circumference,
        age_months,
        sex: parse_sex(args.sex.as_deref())?,
        date,
    })
}

pub fn run_assess(
    args: &MeasurementArgs,
    today: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let today = today_or(today)?;
    let m = build_measurement(args, today)?;
    let result = assessment::assess(&m, today)?;
    if json {
        assessment::report::print_assessment_json(&result)
    } else {
        assessment::report::print_assessment(&result, "Cranial Assessment");
        Ok(())
    }
}

/// Summaries for every patient, plus a line per patient that was skipped.
fn summarize_all(
    registry: &Registry,
    today: NaiveDate,
) -> (Vec<PatientSummary>, Vec<String>) {
    let mut summaries = Vec::new();
    let mut skipped = Vec::new();
    for p in registry.patients() {
        match assessment::summarize_patient(registry, registry, &p.id, today) {
            Ok(Some(s)) => summaries.push(s),
            Ok(None) => skipped.push(format!("{}: no measurements", p.id)),
            Err(e) => {
                log::warn!("patient {}: {e}", p.id);
                skipped.push(format!("{}: {e}", p.id));
            }
        }
    }
    (summaries, skipped)
}

pub fn run_batch(
    registry_path: &Path,
    today: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let today = today_or(today)?;
    let registry = Registry::load(registry_path)?;
    let (summaries, skipped) = summarize_all(&registry, today);
    if json {
        assessment::report::print_batch_json(&summaries, &skipped)
    } else {
        assessment::report::print_batch(&summaries, &skipped);
        Ok(())
    }
}

pub fn run_tasks(
    registry_path: &Path,
    config: &Config,
    all: bool,
    acknowledged: &[String],
    today: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let today = today_or(today)?;
    let registry = Registry::load(registry_path)?;
    let (summaries, _) = summarize_all(&registry, today);
    let all_tasks: Vec<tasks::ReassessmentTask> =
        summaries.iter().map(PatientSummary::task).collect();

    let shown = if all {
        tasks::all_tasks(&all_tasks)
    } else {
        tasks::active_tasks(&all_tasks, config.schedule.active_overdue_days)
    };
    let hidden = all_tasks.len() - shown.len();
    let acknowledged: HashSet<String> = acknowledged.iter().cloned().collect();
    let notifications = tasks::pending_notifications(&shown, &acknowledged);

    if json {
        schedule::report::print_json(&shown, &notifications, today, hidden)
    } else {
        schedule::report::print_report(&shown, &notifications, today, hidden);
        Ok(())
    }
}

pub fn run_choa(json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        classify::report::print_choa_json()
    } else {
        classify::report::print_choa_table();
        Ok(())
    }
}

pub fn run_curve(
    metric: &str,
    sex: Option<&str>,
    age: f64,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let metric: Metric = metric.parse()?;
    let sex = parse_sex(sex)?;
    let point = ReferenceCurveTable::standard()
        .lookup(metric, sex, age)
        .ok_or("head-circumference curves need --sex")?;
    if json {
        curves::report::print_json(&point)
    } else {
        curves::report::print_report(&point);
        Ok(())
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
