//! Change between the first and last measurement of a history.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::patient::MeasurementRecord;
use crate::classify::{BRACHY_MIN_CI, DOLICHO_MAX_CI};
use crate::indices::{DerivedIndices, compute_indices};

/// Changes smaller than this (index points) count as stable.
pub const STABLE_BAND: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Stable,
    Worsening,
}

impl TrendDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Worsening => "worsening",
        }
    }

    fn from_delta(delta: f64) -> Self {
        if delta <= -STABLE_BAND {
            Self::Improving
        } else if delta >= STABLE_BAND {
            Self::Worsening
        } else {
            Self::Stable
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub measurements: usize,
    pub cranial_index_delta: f64,
    pub cvai_delta: f64,
    pub direction: TrendDirection,
}

/// Distance of CI outside the mesocephalic band; 0 inside it.
fn cephaly_deviation(cranial_index: f64) -> f64 {
    if cranial_index >= BRACHY_MIN_CI {
        cranial_index - BRACHY_MIN_CI
    } else if cranial_index <= DOLICHO_MAX_CI {
        DOLICHO_MAX_CI - cranial_index
    } else {
        0.0
    }
}

/// Trend over a history the caller has already sorted by date.
///
/// Invalid measurements are skipped. Direction is judged on CVAI; when CVAI
/// is stable, on the CI deviation from the mesocephalic band. `None` with
/// fewer than two valid measurements.
pub fn trend(history: &[MeasurementRecord]) -> Option<Trend> {
    let valid: Vec<(NaiveDate, DerivedIndices)> = history
        .iter()
        .filter_map(|r| match compute_indices(r.length, r.width, r.diag_d, r.diag_e) {
            Ok(idx) => Some((r.date, idx)),
            Err(e) => {
                log::warn!("trend: skipping measurement of {}: {e}", r.date);
                None
            }
        })
        .collect();

    let (first_date, first) = *valid.first()?;
    let (last_date, last) = *valid.last()?;
    if valid.len() < 2 {
        return None;
    }

    let cvai_delta = last.cvai - first.cvai;
    let direction = match TrendDirection::from_delta(cvai_delta) {
        TrendDirection::Stable => TrendDirection::from_delta(
            cephaly_deviation(last.cranial_index) - cephaly_deviation(first.cranial_index),
        ),
        judged => judged,
    };

    Some(Trend {
        first_date,
        last_date,
        measurements: valid.len(),
        cranial_index_delta: last.cranial_index - first.cranial_index,
        cvai_delta,
        direction,
    })
}

#[cfg(test)]
#[path = "trend_test.rs"]
mod tests;
