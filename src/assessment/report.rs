use serde::Serialize;

use super::{Assessment, PatientSummary};
use crate::curves::PercentileEvaluation;
use crate::report_helpers::{self, format_optional};

fn format_percentile(eval: Option<&PercentileEvaluation>) -> String {
    match eval {
        Some(e) => format!(
            "{} (~p{:.0})",
            e.classification.as_str(),
            e.approximate_percentile
        ),
        None => "-".to_string(),
    }
}

/// Print one assessment: indices, both classification scales, percentile
/// placement, recommendations and the reassessment schedule.
pub fn print_assessment(a: &Assessment, header: &str) {
    let separator = report_helpers::separator(66);
    println!("{header}");
    println!("{separator}");
    println!(" Date:               {}", a.date);
    println!(" Age:                {:.1} months", a.age_months);
    println!("{separator}");
    println!(
        " Cranial Index:      {:.1}",
        a.derived_indices.cranial_index
    );
    println!(
        " Diagonal diff.:     {:.1} mm",
        a.derived_indices.diagonal_difference
    );
    println!(" CVAI:               {:.2}%", a.derived_indices.cvai);
    println!("{separator}");
    println!(
        " Classification:     {} ({})",
        a.asymmetry_type, a.severity_level
    );
    println!(
        " CHOA scale:         level {} [{}], urgency {}",
        a.choa_classification.level,
        a.choa_classification.cvai_range,
        a.choa_classification.urgency
    );
    println!("   {}", a.choa_classification.presentation);
    println!(
        " Head circumference: {}",
        format_percentile(a.percentile_evaluations.head_circumference.as_ref())
    );
    println!(
        " Cephalic index:     {}",
        format_percentile(a.percentile_evaluations.cephalic_index.as_ref())
    );
    println!("{separator}");
    println!(" Recommendations");
    for (i, r) in a.recommendations.iter().enumerate() {
        println!("  {}. {r}", i + 1);
    }
    println!("{separator}");
    println!(
        " Next reassessment:  {} (+{} month(s)), {}",
        a.reassessment.next_due_date, a.reassessment.interval_months, a.reassessment.status
    );
    if a.reassessment.days_overdue > 0 {
        println!(
            " Overdue by:         {} day(s)",
            a.reassessment.days_overdue
        );
    }
    for w in &a.warnings {
        println!(" note: {w}");
    }
    println!("{separator}");
}

pub fn print_assessment_json(a: &Assessment) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(a)
}

/// Print a batch of patient summaries as a compact table.
pub fn print_batch(summaries: &[PatientSummary], skipped: &[String]) {
    let separator = report_helpers::separator(102);
    println!("Cranial Assessment Summary");
    println!("{separator}");
    println!(
        " {:<20}  {:>5}  {:>6}  {:>6}  {:>4}  {:<14}  {:<9}  {:>4}  {:<10}  {:<9}",
        "Patient", "Age", "CI", "CVAI", "HC p", "Type", "Severity", "CHOA", "Next due", "Trend"
    );
    println!("{separator}");
    for s in summaries {
        let a = &s.assessment;
        println!(
            " {}  {:>5.1}  {:>6.1}  {:>6.2}  {:>4}  {:<14}  {:<9}  {:>4}  {:<10}  {:<9}",
            report_helpers::pad_display(&truncate_name(&s.patient.name, 20), 20),
            a.age_months,
            a.derived_indices.cranial_index,
            a.derived_indices.cvai,
            format_optional(
                a.percentile_evaluations
                    .head_circumference
                    .map(|e| e.approximate_percentile),
                0
            ),
            a.asymmetry_type.as_str(),
            a.severity_level.as_str(),
            a.choa_classification.level,
            a.reassessment.next_due_date,
            s.trend.map_or("-", |t| t.direction.as_str()),
        );
    }
    println!("{separator}");
    for s in skipped {
        println!(" skipped: {s}");
    }
}

fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let kept: String = name.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[derive(Serialize)]
struct JsonBatch<'a> {
    patients: &'a [PatientSummary],
    skipped: &'a [String],
}

pub fn print_batch_json(
    summaries: &[PatientSummary],
    skipped: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&JsonBatch {
        patients: summaries,
        skipped,
    })
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
