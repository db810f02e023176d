use super::CurvePoint;
use crate::report_helpers;

/// Print the interpolated percentile row as a small table.
pub fn print_report(point: &CurvePoint) {
    let separator = report_helpers::separator(50);
    println!("{} at {:.1} months", point.metric, point.age_months);
    println!("{separator}");
    println!(" {:>10}   {:>10}", "Percentile", "Value");
    println!("{separator}");
    for (rank, value) in point.ranks.iter().zip(point.values.iter()) {
        println!(" {:>10}   {:>10.1}", format!("p{rank:.0}"), value);
    }
    println!("{separator}");
    if let Some(warning) = &point.out_of_range {
        println!(" note: {warning}");
    }
}

pub fn print_json(point: &CurvePoint) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(point)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
