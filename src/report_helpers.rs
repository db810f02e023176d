use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Left-align `text` in a column of `width` terminal cells.
/// `format!("{:<w$}")` pads by `char` count, which misaligns labels with
/// combining marks or wide glyphs.
pub fn pad_display(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - used))
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format with `decimals` places, or `-` when absent.
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
