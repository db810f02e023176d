use super::*;
use std::fs;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn patient(id: &str) -> Patient {
    Patient {
        id: id.to_string(),
        name: format!("Paciente {id}"),
        birth_date: date(2024, 1, 15),
        sex: Some(Sex::Female),
    }
}

fn record(patient_id: &str, on: NaiveDate) -> MeasurementRecord {
    MeasurementRecord {
        patient_id: patient_id.to_string(),
        date: on,
        length: 140.0,
        width: 115.0,
        diag_d: 135.0,
        diag_e: 128.0,
        head_circumference: None,
    }
}

#[test]
fn age_on_monthly_anniversary_is_whole() {
    assert_eq!(age_in_months(date(2024, 1, 15), date(2024, 7, 15)), 6.0);
    assert_eq!(age_in_months(date(2023, 3, 10), date(2024, 3, 10)), 12.0);
}

#[test]
fn age_counts_partial_month() {
    // 2024-02-15 .. 2024-03-15 spans 29 days, 15 elapsed
    let age = age_in_months(date(2024, 1, 15), date(2024, 3, 1));
    assert!((age - (1.0 + 15.0 / 29.0)).abs() < 1e-9, "got {age}");
}

#[test]
fn age_before_anniversary_day() {
    let age = age_in_months(date(2024, 1, 20), date(2024, 2, 10));
    assert!(age > 0.0 && age < 1.0, "got {age}");
}

#[test]
fn age_end_of_month_birth() {
    assert_eq!(age_in_months(date(2024, 1, 31), date(2024, 2, 29)), 1.0);
}

#[test]
fn age_zero_before_birth() {
    assert_eq!(age_in_months(date(2024, 1, 15), date(2023, 12, 1)), 0.0);
    assert_eq!(age_in_months(date(2024, 1, 15), date(2024, 1, 15)), 0.0);
}

#[test]
fn record_for_patient_derives_age_and_sex() {
    let p = patient("p1");
    let m = record("p1", date(2024, 7, 15)).for_patient(&p);
    assert_eq!(m.age_months, 6.0);
    assert_eq!(m.sex, Some(Sex::Female));
    assert_eq!(m.date, date(2024, 7, 15));
}

#[test]
fn registry_groups_history_by_patient() {
    let reg = Registry::new(
        vec![patient("p1"), patient("p2")],
        vec![
            record("p1", date(2024, 3, 1)),
            record("p2", date(2024, 3, 2)),
            record("p1", date(2024, 4, 1)),
        ],
    )
    .unwrap();
    assert_eq!(reg.history("p1").len(), 2);
    assert_eq!(reg.history("p2").len(), 1);
    assert!(reg.history("nobody").is_empty());
    assert_eq!(reg.patient("p2").unwrap().name, "Paciente p2");
    assert!(reg.patient("nobody").is_none());
    assert_eq!(reg.patients().len(), 2);
}

#[test]
fn registry_rejects_unknown_patient() {
    let err = Registry::new(vec![patient("p1")], vec![record("ghost", date(2024, 3, 1))])
        .unwrap_err();
    assert!(matches!(err, RegistryError::UnknownPatient(ref id) if id == "ghost"));
}

#[test]
fn registry_loads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");
    fs::write(
        &path,
        r#"{
  "patients": [
    {"id": "p1", "name": "Maria", "birth_date": "2024-01-15", "sex": "f"}
  ],
  "measurements": [
    {"patient_id": "p1", "date": "2024-06-15", "length": 140, "width": 118,
     "diag_d": 136, "diag_e": 127, "head_circumference": 420}
  ]
}"#,
    )
    .unwrap();
    let reg = Registry::load(&path).unwrap();
    let p = reg.patient("p1").unwrap();
    assert_eq!(p.sex, Some(Sex::Female));
    let history = reg.history("p1");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].head_circumference, Some(420.0));
}

#[test]
fn registry_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Registry::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }));
}

#[test]
fn registry_load_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    let err = Registry::load(&path).unwrap_err();
    assert!(err.to_string().contains("invalid registry"), "got: {err}");
}
