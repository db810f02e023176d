use super::*;
use crate::curves::{Metric, ReferenceCurveTable, Sex};

#[test]
fn print_report_does_not_panic() {
    let point = ReferenceCurveTable::standard()
        .lookup(Metric::HeadCircumference, Some(Sex::Female), 7.5)
        .unwrap();
    print_report(&point);
}

#[test]
fn print_report_clamped_does_not_panic() {
    let point = ReferenceCurveTable::standard()
        .lookup(Metric::CephalicIndex, None, 40.0)
        .unwrap();
    print_report(&point);
}

#[test]
fn json_contains_ranks_and_values() {
    let point = ReferenceCurveTable::standard()
        .lookup(Metric::CephalicIndex, None, 6.0)
        .unwrap();
    let json_str = serde_json::to_string_pretty(&point).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();
    assert_eq!(parsed["metric"], "cephalic_index");
    assert_eq!(parsed["ranks"][1], 10.0);
    assert_eq!(parsed["values"][2], 81.0);
    assert!(parsed.get("out_of_range").is_none());
    print_json(&point).unwrap();
}
