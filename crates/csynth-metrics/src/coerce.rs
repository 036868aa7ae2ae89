//! Value coercion and the `-1` sentinel projection.
//!
//! Everything here works on `Option`: `None` means "unresolved" and only
//! becomes the sentinel at the output boundary.

/// Placeholder for any numeric field that could not be resolved.
pub const SENTINEL: i64 = -1;

/// Placeholder for unresolved text fields.
pub const UNRESOLVED_TEXT: &str = "-1";

/// Parse an integer count.
///
/// Surrounding whitespace is ignored. A real number is truncated toward zero
/// (`"10.5"` is 10); non-numeric text is unresolved.
pub fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    let real = parse_real(text)?.trunc();
    (real.abs() < i64::MAX as f64).then_some(real as i64)
}

/// Parse a real number. Non-finite values (`inf`, `NaN`) are unresolved.
pub fn parse_real(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `numerator / denominator`, unresolved when either side is, when the
/// denominator is zero, or when the quotient is not finite.
pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (numerator, denominator) = (numerator?, denominator?);
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator).filter(|v| v.is_finite())
}

pub fn project_int(value: Option<i64>) -> i64 {
    value.unwrap_or(SENTINEL)
}

pub fn project_real(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(SENTINEL as f64)
}

pub fn project_text(value: Option<&str>) -> String {
    value.unwrap_or(UNRESOLVED_TEXT).to_string()
}
