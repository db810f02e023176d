//! Children's Healthcare of Atlanta (CHOA) plagiocephaly scale.
//!
//! Five levels keyed purely on CVAI. This is a separate scale from
//! [`SeverityLevel`](super::SeverityLevel) and uses its own band edges.

use std::fmt;

use serde::Serialize;

use super::SeverityLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    None,
    Low,
    Moderate,
    High,
    Urgent,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the CHOA table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChoaClassification {
    pub level: u8,
    /// CVAI strictly below this bound belongs to this level.
    #[serde(skip)]
    pub upper_bound: f64,
    pub cvai_range: &'static str,
    pub presentation: &'static str,
    pub recommendation: &'static str,
    pub severity: SeverityLevel,
    pub needs_treatment: bool,
    pub urgency: Urgency,
}

/// Scanned in ascending order, first `cvai < upper_bound` wins.
pub const CHOA_SCALE: &[ChoaClassification] = &[
    ChoaClassification {
        level: 1,
        upper_bound: 3.5,
        cvai_range: "< 3.5%",
        presentation: "Simetria dentro dos limites normais",
        recommendation: "Nenhum tratamento necessário; manter orientações de posicionamento",
        severity: SeverityLevel::Normal,
        needs_treatment: false,
        urgency: Urgency::None,
    },
    ChoaClassification {
        level: 2,
        upper_bound: 6.25,
        cvai_range: "3.5% – 6.25%",
        presentation: "Assimetria mínima em um quadrante posterior, sem deslocamento de orelha ou envolvimento frontal",
        recommendation: "Reposicionamento ativo e reavaliação periódica",
        severity: SeverityLevel::Leve,
        needs_treatment: false,
        urgency: Urgency::Low,
    },
    ChoaClassification {
        level: 3,
        upper_bound: 8.5,
        cvai_range: "6.25% – 8.5%",
        presentation: "Achatamento moderado em dois quadrantes, deslocamento de orelha mínimo",
        recommendation: "Reposicionamento e fisioterapia; considerar órtese craniana conforme idade",
        severity: SeverityLevel::Moderada,
        needs_treatment: true,
        urgency: Urgency::Moderate,
    },
    ChoaClassification {
        level: 4,
        upper_bound: 11.0,
        cvai_range: "8.5% – 11%",
        presentation: "Achatamento severo em dois ou três quadrantes, deslocamento de orelha e envolvimento frontal moderados",
        recommendation: "Órtese craniana indicada",
        severity: SeverityLevel::Severa,
        needs_treatment: true,
        urgency: Urgency::High,
    },
    ChoaClassification {
        level: 5,
        upper_bound: f64::INFINITY,
        cvai_range: "≥ 11%",
        presentation: "Achatamento severo em três ou quatro quadrantes, deslocamento de orelha e assimetria facial acentuados",
        recommendation: "Órtese craniana com urgência e avaliação especializada",
        severity: SeverityLevel::Severa,
        needs_treatment: true,
        urgency: Urgency::Urgent,
    },
];

/// CHOA level for a CVAI value. NaN falls through to the top level.
pub fn classify_choa(cvai: f64) -> ChoaClassification {
    CHOA_SCALE
        .iter()
        .find(|row| cvai < row.upper_bound)
        .copied()
        .unwrap_or(CHOA_SCALE[CHOA_SCALE.len() - 1])
}

#[cfg(test)]
#[path = "choa_test.rs"]
mod tests;
