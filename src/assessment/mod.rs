//! End-to-end assessment of one measurement.
//!
//! validate → indices → type/severity → CHOA → percentiles → recommendations
//! → reassessment schedule. Type/severity and CHOA are reported as two
//! separate axes.

pub mod patient;
pub mod report;
pub mod trend;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::choa::{ChoaClassification, classify_choa};
use crate::classify::{AsymmetryType, SeverityLevel, classify_asymmetry, determine_severity};
use crate::curves::{Metric, OutOfRangeAge, PercentileEvaluation, ReferenceCurveTable, Sex};
use crate::error::InvalidMeasurement;
use crate::indices::{DerivedIndices, compute_indices};
use crate::recommend::{percentile_notes, recommend};
use crate::schedule::tasks::ReassessmentTask;
use crate::schedule::{ReassessmentSchedule, reassessment};

use patient::{MeasurementStore, Patient, PatientProvider};
use trend::Trend;

/// Raw caliper measurement. Lengths in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub length: f64,
    pub width: f64,
    pub diag_d: f64,
    pub diag_e: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_circumference: Option<f64>,
    pub age_months: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentileEvaluations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_circumference: Option<PercentileEvaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cephalic_index: Option<PercentileEvaluation>,
}

/// Everything the presentation layer reads for one measurement.
///
/// `asymmetry_type`/`severity_level` and `choa_classification` are two
/// independent scales computed from overlapping inputs; they can disagree at
/// the band edges and must be shown side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub date: NaiveDate,
    pub age_months: f64,
    pub derived_indices: DerivedIndices,
    pub asymmetry_type: AsymmetryType,
    pub severity_level: SeverityLevel,
    pub choa_classification: ChoaClassification,
    pub percentile_evaluations: PercentileEvaluations,
    pub recommendations: Vec<String>,
    pub reassessment: ReassessmentSchedule,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<OutOfRangeAge>,
}

/// Assess one measurement as seen from `today`.
pub fn assess(m: &Measurement, today: NaiveDate) -> Result<Assessment, InvalidMeasurement> {
    if !(m.age_months >= 0.0) || !m.age_months.is_finite() {
        return Err(InvalidMeasurement::NegativeAge(m.age_months));
    }
    let indices = compute_indices(m.length, m.width, m.diag_d, m.diag_e)?;
    log::debug!(
        "indices: CI {:.2}, CVAI {:.2}",
        indices.cranial_index,
        indices.cvai
    );

    let kind = classify_asymmetry(indices.cranial_index, indices.cvai);
    let severity = determine_severity(kind, indices.cranial_index, indices.cvai);
    let choa = classify_choa(indices.cvai);
    log::debug!("classified: {kind} / {severity}, CHOA level {}", choa.level);

    let table = ReferenceCurveTable::standard();
    let head_circumference = match m.head_circumference {
        Some(hc) if hc > 0.0 && hc.is_finite() => {
            table.evaluate(Metric::HeadCircumference, m.sex, m.age_months, hc)
        }
        Some(hc) => {
            log::warn!("ignoring non-positive head circumference {hc}");
            None
        }
        None => None,
    };
    let cephalic_index = table.evaluate(
        Metric::CephalicIndex,
        m.sex,
        m.age_months,
        indices.cranial_index,
    );

    let warnings: Vec<OutOfRangeAge> = [head_circumference, cephalic_index]
        .iter()
        .flatten()
        .filter_map(|e| e.out_of_range)
        .collect();

    let mut recommendations = recommend(
        kind,
        severity,
        m.age_months,
        Some(indices.cranial_index),
    );
    recommendations.extend(percentile_notes(head_circumference.as_ref()));

    Ok(Assessment {
        date: m.date,
        age_months: m.age_months,
        derived_indices: indices,
        asymmetry_type: kind,
        severity_level: severity,
        choa_classification: choa,
        percentile_evaluations: PercentileEvaluations {
            head_circumference,
            cephalic_index,
        },
        recommendations,
        reassessment: reassessment(m.date, severity, today),
        warnings,
    })
}

/// Latest assessment and history trend for one patient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientSummary {
    pub patient: Patient,
    pub assessment: Assessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl PatientSummary {
    pub fn task(&self) -> ReassessmentTask {
        ReassessmentTask {
            patient_id: self.patient.id.clone(),
            patient_name: self.patient.name.clone(),
            severity: self.assessment.severity_level,
            schedule: self.assessment.reassessment,
        }
    }
}

/// Assess the most recent measurement of a patient.
///
/// `Ok(None)` when the patient is unknown or has no measurements; an invalid
/// latest measurement propagates as an error.
pub fn summarize_patient(
    patients: &impl PatientProvider,
    store: &impl MeasurementStore,
    patient_id: &str,
    today: NaiveDate,
) -> Result<Option<PatientSummary>, InvalidMeasurement> {
    let Some(patient) = patients.patient(patient_id) else {
        return Ok(None);
    };
    let mut history = store.history(patient_id);
    history.sort_by_key(|r| r.date);
    let Some(latest) = history.last() else {
        return Ok(None);
    };

    let assessment = assess(&latest.for_patient(&patient), today)?;
    let trend = trend::trend(&history);
    Ok(Some(PatientSummary {
        patient,
        assessment,
        trend,
    }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
