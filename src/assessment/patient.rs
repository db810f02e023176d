//! Patient and measurement collaborators.
//!
//! The engine only reads through [`PatientProvider`] and
//! [`MeasurementStore`]; [`Registry`] is an in-memory implementation backed by
//! a JSON export.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Measurement;
use crate::curves::Sex;
use crate::error::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
}

/// A stored measurement; age is derived from the patient's birth date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub patient_id: String,
    pub date: NaiveDate,
    pub length: f64,
    pub width: f64,
    pub diag_d: f64,
    pub diag_e: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_circumference: Option<f64>,
}

impl MeasurementRecord {
    pub fn for_patient(&self, patient: &Patient) -> Measurement {
        Measurement {
            length: self.length,
            width: self.width,
            diag_d: self.diag_d,
            diag_e: self.diag_e,
            head_circumference: self.head_circumference,
            age_months: age_in_months(patient.birth_date, self.date),
            sex: patient.sex,
            date: self.date,
        }
    }
}

pub trait PatientProvider {
    fn patient(&self, id: &str) -> Option<Patient>;
}

/// Measurement history lookup. No ordering is promised; callers sort by
/// date before computing trends.
pub trait MeasurementStore {
    fn history(&self, patient_id: &str) -> Vec<MeasurementRecord>;
}

/// Completed calendar months from `birth_date` to `on`, plus the elapsed
/// fraction of the month in progress. Zero when `on` precedes birth.
pub fn age_in_months(birth_date: NaiveDate, on: NaiveDate) -> f64 {
    if on <= birth_date {
        return 0.0;
    }
    let mut whole =
        (on.year() - birth_date.year()) * 12 + on.month() as i32 - birth_date.month() as i32;
    let anchor = |months: i32| {
        u32::try_from(months)
            .ok()
            .and_then(|m| birth_date.checked_add_months(Months::new(m)))
    };
    // step back if the monthly anniversary has not been reached yet
    while whole > 0 && anchor(whole).is_none_or(|d| d > on) {
        whole -= 1;
    }
    let (Some(start), Some(end)) = (anchor(whole), anchor(whole + 1)) else {
        return whole.max(0) as f64;
    };
    let elapsed = (on - start).num_days() as f64;
    let span = (end - start).num_days() as f64;
    whole as f64 + if span > 0.0 { elapsed / span } else { 0.0 }
}

#[derive(Debug, Default, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    patients: Vec<Patient>,
    #[serde(default)]
    measurements: Vec<MeasurementRecord>,
}

/// In-memory patients and measurements, ordered as loaded.
#[derive(Debug, Default)]
pub struct Registry {
    patients: Vec<Patient>,
    measurements: HashMap<String, Vec<MeasurementRecord>>,
}

impl Registry {
    pub fn new(
        patients: Vec<Patient>,
        measurements: Vec<MeasurementRecord>,
    ) -> Result<Self, RegistryError> {
        let mut by_patient: HashMap<String, Vec<MeasurementRecord>> = HashMap::new();
        for m in measurements {
            if !patients.iter().any(|p| p.id == m.patient_id) {
                return Err(RegistryError::UnknownPatient(m.patient_id));
            }
            by_patient.entry(m.patient_id.clone()).or_default().push(m);
        }
        Ok(Self {
            patients,
            measurements: by_patient,
        })
    }

    /// Load a JSON export with top-level `patients` and `measurements` arrays.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: RegistryFile =
            serde_json::from_str(&content).map_err(|source| RegistryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!(
            "registry {}: {} patients, {} measurements",
            path.display(),
            file.patients.len(),
            file.measurements.len()
        );
        Self::new(file.patients, file.measurements)
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }
}

impl PatientProvider for Registry {
    fn patient(&self, id: &str) -> Option<Patient> {
        self.patients.iter().find(|p| p.id == id).cloned()
    }
}

impl MeasurementStore for Registry {
    fn history(&self, patient_id: &str) -> Vec<MeasurementRecord> {
        self.measurements
            .get(patient_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "patient_test.rs"]
mod tests;
