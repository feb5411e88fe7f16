//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Fractional hours → "01h 15m", keeping the sign of inverted ranges.
pub fn hours2readable(hours: f64) -> String {
    let total_mins = (hours * 60.0).round() as i64;
    let abs_m = total_mins.abs();
    let sign = if total_mins < 0 { "-" } else { "" };

    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Two decimals, the way totals are shown in tables and prompts.
pub fn hours2decimal(hours: f64) -> String {
    format!("{:.2}", hours)
}
