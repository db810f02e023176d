//! Asymmetry type and severity classification.
//!
//! Two independent axes are produced from overlapping inputs and are always
//! reported side by side, never merged:
//!
//! - [`AsymmetryType`] + [`SeverityLevel`]: driven by CI (brachy/dolicho) and
//!   CVAI (plagio), with their own severity cut-offs (CVAI 6.25 / 8.5).
//! - [`choa::ChoaClassification`]: the five-level CHOA scale, keyed on CVAI
//!   alone, with its own bands.
//!
//! All functions are total over finite input. Negative or zero values simply
//! land in a bucket.

pub mod choa;
pub mod report;

use std::fmt;

use serde::Serialize;

/// CI at or above this is brachycephalic.
pub const BRACHY_MIN_CI: f64 = 81.0;
/// CI at or below this is dolichocephalic.
pub const DOLICHO_MAX_CI: f64 = 76.0;
/// CVAI at or above this is plagiocephalic.
pub const PLAGIO_MIN_CVAI: f64 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AsymmetryType {
    Normal,
    Braquicefalia,
    Dolicocefalia,
    Plagiocefalia,
    Misto,
}

impl AsymmetryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Braquicefalia => "Braquicefalia",
            Self::Dolicocefalia => "Dolicocefalia",
            Self::Plagiocefalia => "Plagiocefalia",
            Self::Misto => "Misto",
        }
    }

    /// Types whose severity is read from CVAI.
    pub fn is_plagiocephalic(self) -> bool {
        matches!(self, Self::Plagiocefalia | Self::Misto)
    }
}

impl fmt::Display for AsymmetryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Normal,
    Leve,
    Moderada,
    Severa,
}

impl SeverityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Leve => "leve",
            Self::Moderada => "moderada",
            Self::Severa => "severa",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map CI and CVAI to an asymmetry type.
///
/// 76 < CI < 81 with CVAI < 3.5 is the mesocephalic band and maps to `Normal`.
pub fn classify_asymmetry(cranial_index: f64, cvai: f64) -> AsymmetryType {
    let brachy = cranial_index >= BRACHY_MIN_CI;
    let dolicho = cranial_index <= DOLICHO_MAX_CI;
    let plagio = cvai >= PLAGIO_MIN_CVAI;

    match (brachy || dolicho, plagio) {
        (true, true) => AsymmetryType::Misto,
        (false, true) => AsymmetryType::Plagiocefalia,
        (true, false) if brachy => AsymmetryType::Braquicefalia,
        (true, false) => AsymmetryType::Dolicocefalia,
        (false, false) => AsymmetryType::Normal,
    }
}

/// Severity within the detected type. Checks run severa → moderada → leve,
/// first match wins; every boundary is inclusive.
pub fn determine_severity(kind: AsymmetryType, cranial_index: f64, cvai: f64) -> SeverityLevel {
    match kind {
        AsymmetryType::Normal => SeverityLevel::Normal,
        AsymmetryType::Braquicefalia => {
            if cranial_index >= 90.0 {
                SeverityLevel::Severa
            } else if cranial_index >= 85.0 {
                SeverityLevel::Moderada
            } else {
                SeverityLevel::Leve
            }
        }
        AsymmetryType::Dolicocefalia => {
            if cranial_index <= 70.0 {
                SeverityLevel::Severa
            } else if cranial_index <= 73.0 {
                SeverityLevel::Moderada
            } else {
                SeverityLevel::Leve
            }
        }
        AsymmetryType::Plagiocefalia | AsymmetryType::Misto => {
            if cvai >= 8.5 {
                SeverityLevel::Severa
            } else if cvai >= 6.25 {
                SeverityLevel::Moderada
            } else {
                SeverityLevel::Leve
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
