//! Derived cranial indices from raw caliper measurements.
//!
//! - Cranial Index (CI) = width / length × 100
//! - Diagonal difference = |D − E|
//! - CVAI = diagonal difference / max(D, E) × 100
//!
//! Values are plain ratios and are never rounded here; formatting belongs
//! to the report layer.

use serde::Serialize;

use crate::error::InvalidMeasurement;

/// Indices derived from one measurement. Always recomputed from the source
/// measurement, never stored on their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedIndices {
    pub cranial_index: f64,
    pub diagonal_difference: f64,
    pub cvai: f64,
}

/// Reject anything that is not a finite, strictly positive value.
fn require_positive(field: &'static str, value: f64) -> Result<f64, InvalidMeasurement> {
    // `!(v > 0)` also catches NaN
    if !(value > 0.0) || !value.is_finite() {
        return Err(InvalidMeasurement::NonPositive { field, value });
    }
    Ok(value)
}

/// Compute CI, diagonal difference and CVAI.
///
/// Fails when length or width is non-positive, or when both diagonals are
/// non-positive. A single non-positive diagonal is accepted as given.
pub fn compute_indices(
    length: f64,
    width: f64,
    diag_d: f64,
    diag_e: f64,
) -> Result<DerivedIndices, InvalidMeasurement> {
    let length = require_positive("length", length)?;
    let width = require_positive("width", width)?;
    for (field, value) in [("diag_d", diag_d), ("diag_e", diag_e)] {
        if !value.is_finite() {
            return Err(InvalidMeasurement::NonPositive { field, value });
        }
    }
    if !(diag_d > 0.0) && !(diag_e > 0.0) {
        return Err(InvalidMeasurement::Diagonals { diag_d, diag_e });
    }

    let cranial_index = width / length * 100.0;
    let diagonal_difference = (diag_d - diag_e).abs();
    let cvai = diagonal_difference / diag_d.max(diag_e) * 100.0;

    Ok(DerivedIndices {
        cranial_index,
        diagonal_difference,
        cvai,
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
