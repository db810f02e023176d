use super::choa::{CHOA_SCALE, ChoaClassification};
use crate::report_helpers::{self, pad_display};

/// Print the CHOA scale as a reference table.
pub fn print_choa_table() {
    let separator = report_helpers::separator(78);
    println!("CHOA Plagiocephaly Severity Scale");
    println!("{separator}");
    println!(
        " {:<5}  {:<14}  {:<9}  {:<8}  Recommendation",
        "Level", "CVAI", "Urgency", "Treat"
    );
    println!("{separator}");
    for row in CHOA_SCALE {
        println!(
            " {:<5}  {}  {:<9}  {:<8}  {}",
            row.level,
            pad_display(row.cvai_range, 14),
            row.urgency.as_str(),
            if row.needs_treatment { "yes" } else { "no" },
            row.recommendation,
        );
    }
    println!("{separator}");
}

pub fn print_choa_json() -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<&ChoaClassification> = CHOA_SCALE.iter().collect();
    report_helpers::print_json_stdout(&rows)
}
