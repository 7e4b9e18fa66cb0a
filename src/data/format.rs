//! Number formatting for card values and chart series.

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format a reading with its unit, e.g. `3.20 m` or `60.00%`.
///
/// Percent signs attach directly to the number; every other unit is
/// separated by a space.
pub fn format_value(value: f64, unit: &str, precision: usize) -> String {
    // Avoid rendering "-0.00" for tiny negative noise
    let value = if value == 0.0 { 0.0 } else { value };
    let number = format!("{:.*}", precision, value);
    let number = if number.starts_with('-') && number[1..].chars().all(|c| c == '0' || c == '.') {
        number[1..].to_string()
    } else {
        number
    };

    match unit {
        "" => number,
        "%" => format!("{}%", number),
        _ => format!("{} {}", number, unit),
    }
}
