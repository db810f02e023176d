use chrono::NaiveDate;

use super::*;
use crate::assessment::patient::Patient;
use crate::assessment::{Measurement, assess};
use crate::curves::Sex;

fn sample() -> Assessment {
    let m = Measurement {
        length: 140.0,
        width: 118.0,
        diag_d: 136.0,
        diag_e: 126.0,
        head_circumference: Some(430.0),
        age_months: 30.0,
        sex: Some(Sex::Female),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    };
    assess(&m, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).unwrap()
}

#[test]
fn print_assessment_does_not_panic() {
    print_assessment(&sample(), "Cranial Assessment");
}

#[test]
fn print_assessment_json_does_not_panic() {
    print_assessment_json(&sample()).unwrap();
}

#[test]
fn print_batch_does_not_panic() {
    let summaries = vec![PatientSummary {
        patient: Patient {
            id: "p1".to_string(),
            name: "Maria Eduarda Conceição dos Santos".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2021, 7, 15).unwrap(),
            sex: Some(Sex::Female),
        },
        assessment: sample(),
        trend: None,
    }];
    print_batch(&summaries, &["p2: no measurements".to_string()]);
    print_batch_json(&summaries, &[]).unwrap();
}

#[test]
fn format_percentile_placeholder() {
    assert_eq!(format_percentile(None), "-");
    let a = sample();
    let text = format_percentile(a.percentile_evaluations.cephalic_index.as_ref());
    assert!(text.contains("~p"), "got {text}");
}

#[test]
fn truncate_long_names() {
    assert_eq!(truncate_name("Ana", 10), "Ana");
    assert_eq!(truncate_name("João da Silva Souza", 10), "João da...");
}
