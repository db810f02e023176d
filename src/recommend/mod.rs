//! Clinical recommendation text.
//!
//! Construction is append-only and deterministic: the severity block comes
//! first, then the type block. A normal result short-circuits to a single
//! maintenance message.

use crate::classify::{AsymmetryType, SeverityLevel};
use crate::curves::{Placement, PercentileEvaluation};

pub const MAINTENANCE: &str =
    "Formato craniano dentro da normalidade: manter orientações de posicionamento e acompanhamento de rotina";

const ACTIVE_REPOSITIONING: &str = "Reposicionamento ativo durante o sono e a vigília";
const CERVICAL_PHYSIOTHERAPY: &str = "Fisioterapia cervical para mobilidade e simetria";
const TUMMY_TIME: &str = "Tempo de barriga para baixo (tummy time) supervisionado, várias vezes ao dia";
const INTENSIVE_REPOSITIONING: &str = "Reposicionamento intensivo com orientação profissional";
const ORTHOSIS_EVALUATION: &str =
    "Avaliar indicação de órtese craniana (janela de maior eficácia entre 6 e 12 meses)";
const SPECIALIST_REFERRAL: &str = "Encaminhamento para especialista em deformidades cranianas";
const NEUROSURGICAL_EVALUATION: &str =
    "Avaliação neurocirúrgica para descartar craniossinostose";
const URGENT_HELMET: &str = "Iniciar órtese craniana com urgência";

const AVOID_SUPINE: &str = "Evitar permanência prolongada em decúbito dorsal";
const ALTERNATE_HEAD_POSITION: &str = "Alternar a posição da cabeça durante o sono";
const AVOID_LATERAL: &str = "Evitar posicionamento lateral prolongado";
const CONSIDER_PREMATURITY: &str = "Considerar histórico de prematuridade na avaliação";
const ALTERNATE_FEEDING_SIDE: &str = "Alternar o lado da alimentação e do sono";
const SCREEN_TORTICOLLIS: &str = "Investigar torcicolo congênito";

const MICROCEPHALY_NOTE: &str =
    "Perímetro cefálico abaixo do esperado para a idade: investigar microcefalia";
const MACROCEPHALY_NOTE: &str =
    "Perímetro cefálico acima do esperado para a idade: investigar macrocefalia ou hidrocefalia";

/// Ordered recommendation list for a classified measurement.
///
/// `cranial_index` only matters for severe brachycephaly (neurosurgical note
/// at CI ≥ 95); pass `None` when unknown.
pub fn recommend(
    kind: AsymmetryType,
    severity: SeverityLevel,
    age_months: f64,
    cranial_index: Option<f64>,
) -> Vec<String> {
    if kind == AsymmetryType::Normal || severity == SeverityLevel::Normal {
        return vec![MAINTENANCE.to_string()];
    }

    let mut out: Vec<&'static str> = Vec::new();

    match severity {
        SeverityLevel::Normal => {}
        SeverityLevel::Leve => {
            out.push(ACTIVE_REPOSITIONING);
            out.push(CERVICAL_PHYSIOTHERAPY);
            if age_months <= 6.0 {
                out.push(TUMMY_TIME);
            }
        }
        SeverityLevel::Moderada => {
            out.push(INTENSIVE_REPOSITIONING);
            if (6.0..=12.0).contains(&age_months) {
                out.push(ORTHOSIS_EVALUATION);
            }
        }
        SeverityLevel::Severa => {
            out.push(SPECIALIST_REFERRAL);
            if kind == AsymmetryType::Braquicefalia && cranial_index.is_some_and(|ci| ci >= 95.0)
            {
                out.push(NEUROSURGICAL_EVALUATION);
            }
            if kind.is_plagiocephalic() && age_months <= 12.0 {
                out.push(URGENT_HELMET);
            }
        }
    }

    if matches!(kind, AsymmetryType::Braquicefalia | AsymmetryType::Misto) {
        out.push(AVOID_SUPINE);
        out.push(ALTERNATE_HEAD_POSITION);
    }
    if kind == AsymmetryType::Dolicocefalia {
        out.push(AVOID_LATERAL);
        out.push(CONSIDER_PREMATURITY);
    }
    if kind.is_plagiocephalic() {
        out.push(ALTERNATE_FEEDING_SIDE);
        out.push(SCREEN_TORTICOLLIS);
    }

    out.into_iter().map(String::from).collect()
}

/// Notes driven by head-circumference placement, appended after
/// [`recommend`]'s list by the assessment step.
pub fn percentile_notes(head_circumference: Option<&PercentileEvaluation>) -> Vec<String> {
    match head_circumference.map(|e| e.classification) {
        Some(Placement::Below) => vec![MICROCEPHALY_NOTE.to_string()],
        Some(Placement::Above) => vec![MACROCEPHALY_NOTE.to_string()],
        Some(Placement::Normal) | None => Vec::new(),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
