//! Conversions between the display string and numeric values.
//!
//! The display holds a plain decimal literal: an optional leading minus,
//! digits, and at most one decimal point. Exponent notation never appears.

/// Render a numeric result as a display literal.
///
/// Integral values print without a fractional part; negative zero prints
/// as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Parse a display literal back into a number.
///
/// Returns `None` for anything that is not a finite decimal literal,
/// including the error marker.
pub fn parse_display(text: &str) -> Option<f64> {
    let numeric = text
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-');
    if !numeric || text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Cut a display string down to `width` characters without rounding.
pub fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
