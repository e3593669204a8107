/// Upper bound on fractional digits accepted by the formatters
pub const MAX_DIGITS: usize = 20;

/// Fixed-point rendering with exactly `digits` fractional digits.
///
/// Uses `.` as decimal point and no grouping. `digits` above [`MAX_DIGITS`]
/// is capped. Anything that rounds to zero renders without a sign.
/// Non-finite values render as `NaN` / `inf` without fractional digits.
pub fn format_fixed(value: f64, digits: usize) -> String {
    let digits = digits.min(MAX_DIGITS);
    let text = format!("{:.*}", digits, value);

    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}

/// Same as [`format_fixed`] with a trailing `%`.
pub fn format_percentage(value: f64, digits: usize) -> String {
    format!("{}%", format_fixed(value, digits))
}
