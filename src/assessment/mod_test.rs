use super::*;
use crate::curves::Placement;
use crate::recommend::MAINTENANCE;
use crate::schedule::ScheduleStatus;
use super::patient::{MeasurementRecord, Registry};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn measurement() -> Measurement {
    Measurement {
        length: 140.0,
        width: 110.0,
        diag_d: 130.0,
        diag_e: 120.0,
        head_circumference: Some(433.0),
        age_months: 6.0,
        sex: Some(Sex::Male),
        date: date(2024, 1, 15),
    }
}

#[test]
fn full_pipeline_plagiocephaly() {
    let a = assess(&measurement(), date(2024, 2, 20)).unwrap();
    // CI 78.57 (meso), CVAI 7.69
    assert_eq!(a.asymmetry_type, AsymmetryType::Plagiocefalia);
    assert_eq!(a.severity_level, SeverityLevel::Moderada);
    assert_eq!(a.choa_classification.level, 3);
    assert_eq!(a.reassessment.next_due_date, date(2024, 2, 15));
    assert_eq!(a.reassessment.status, ScheduleStatus::Overdue);
    assert_eq!(a.reassessment.days_overdue, 5);

    let hc = a.percentile_evaluations.head_circumference.unwrap();
    assert_eq!(hc.classification, Placement::Normal);
    assert!((hc.approximate_percentile - 50.0).abs() < 1e-9);
    assert!(a.percentile_evaluations.cephalic_index.is_some());
    assert!(a.warnings.is_empty());
    assert!(!a.recommendations.is_empty());
}

#[test]
fn severity_and_choa_reported_separately() {
    // CVAI 8.6: severa on severity axis, level 4 on CHOA
    let m = Measurement {
        diag_d: 140.0,
        diag_e: 140.0 * (1.0 - 0.086),
        ..measurement()
    };
    let a = assess(&m, date(2024, 1, 16)).unwrap();
    assert_eq!(a.severity_level, SeverityLevel::Severa);
    assert_eq!(a.choa_classification.level, 4);
    assert_eq!(a.choa_classification.severity, SeverityLevel::Severa);
}

#[test]
fn normal_head_gets_single_recommendation() {
    let m = Measurement {
        diag_d: 130.0,
        diag_e: 130.0,
        ..measurement()
    };
    let a = assess(&m, date(2024, 1, 16)).unwrap();
    assert_eq!(a.asymmetry_type, AsymmetryType::Normal);
    assert_eq!(a.recommendations, vec![MAINTENANCE.to_string()]);
    assert_eq!(a.reassessment.interval_months, 3);
}

#[test]
fn small_head_appends_microcephaly_note() {
    let m = Measurement {
        diag_d: 130.0,
        diag_e: 130.0,
        head_circumference: Some(390.0),
        ..measurement()
    };
    let a = assess(&m, date(2024, 1, 16)).unwrap();
    assert_eq!(a.recommendations.len(), 2);
    assert_eq!(a.recommendations[0], MAINTENANCE);
    assert!(a.recommendations[1].contains("microcefalia"));
}

#[test]
fn missing_head_circumference_is_omitted() {
    let m = Measurement {
        head_circumference: None,
        ..measurement()
    };
    let a = assess(&m, date(2024, 1, 16)).unwrap();
    assert!(a.percentile_evaluations.head_circumference.is_none());
    let v = serde_json::to_value(&a).unwrap();
    assert!(v["percentile_evaluations"].get("head_circumference").is_none());
    assert!(v["percentile_evaluations"].get("cephalic_index").is_some());
}

#[test]
fn head_circumference_without_sex_is_omitted() {
    let m = Measurement {
        sex: None,
        ..measurement()
    };
    let a = assess(&m, date(2024, 1, 16)).unwrap();
    assert!(a.percentile_evaluations.head_circumference.is_none());
}

#[test]
fn non_positive_head_circumference_is_ignored() {
    let m = Measurement {
        head_circumference: Some(0.0),
        ..measurement()
    };
    let a = assess(&m, date(2024, 1, 16)).unwrap();
    assert!(a.percentile_evaluations.head_circumference.is_none());
}

#[test]
fn out_of_range_age_warns_but_proceeds() {
    let m = Measurement {
        age_months: 30.0,
        ..measurement()
    };
    let a = assess(&m, date(2024, 1, 16)).unwrap();
    assert_eq!(a.warnings.len(), 2);
    assert!(a.percentile_evaluations.head_circumference.is_some());
}

#[test]
fn invalid_geometry_propagates() {
    let m = Measurement {
        width: 0.0,
        ..measurement()
    };
    assert!(matches!(
        assess(&m, date(2024, 1, 16)),
        Err(InvalidMeasurement::NonPositive { field: "width", .. })
    ));
}

#[test]
fn negative_age_is_invalid() {
    let m = Measurement {
        age_months: -1.0,
        ..measurement()
    };
    assert_eq!(
        assess(&m, date(2024, 1, 16)).unwrap_err(),
        InvalidMeasurement::NegativeAge(-1.0)
    );
}

#[test]
fn json_field_names_are_stable() {
    let a = assess(&measurement(), date(2024, 2, 20)).unwrap();
    let v = serde_json::to_value(&a).unwrap();
    for key in [
        "derived_indices",
        "asymmetry_type",
        "severity_level",
        "choa_classification",
        "percentile_evaluations",
        "recommendations",
        "reassessment",
    ] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
    assert_eq!(v["reassessment"]["status"], "overdue");
    assert_eq!(v["severity_level"], "moderada");
    assert!(v.get("warnings").is_none());
}

fn registry() -> Registry {
    let patient = Patient {
        id: "p1".to_string(),
        name: "Maria".to_string(),
        birth_date: date(2023, 7, 15),
        sex: Some(Sex::Female),
    };
    let rec = |on: NaiveDate, diag_e: f64| MeasurementRecord {
        patient_id: "p1".to_string(),
        date: on,
        length: 140.0,
        width: 110.0,
        diag_d: 130.0,
        diag_e,
        head_circumference: None,
    };
    // stored out of order on purpose
    Registry::new(
        vec![patient],
        vec![rec(date(2024, 2, 15), 125.0), rec(date(2024, 1, 15), 120.0)],
    )
    .unwrap()
}

#[test]
fn summarize_patient_uses_latest_measurement() {
    let reg = registry();
    let s = summarize_patient(&reg, &reg, "p1", date(2024, 3, 1))
        .unwrap()
        .unwrap();
    assert_eq!(s.assessment.date, date(2024, 2, 15));
    assert_eq!(s.assessment.age_months, 7.0);
    let t = s.trend.unwrap();
    assert_eq!(t.direction, super::trend::TrendDirection::Improving);

    let task = s.task();
    assert_eq!(task.patient_id, "p1");
    assert_eq!(task.severity, s.assessment.severity_level);
}

#[test]
fn summarize_unknown_patient_is_none() {
    let reg = registry();
    assert!(
        summarize_patient(&reg, &reg, "nobody", date(2024, 3, 1))
            .unwrap()
            .is_none()
    );
}
