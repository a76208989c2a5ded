//! Cell parsing
//!
//! Unparseable cells never raise: they become `None` ("unknown year",
//! "value unset") and are handled as missing downstream.

/// Parse a year cell
///
/// Accepts integers and integral floats (`"2015"`, `"2015.0"`); anything else
/// is an unknown year.
#[must_use]
pub fn parse_year(text: &str) -> Option<i32> {
    let text = text.trim();
    if let Ok(year) = text.parse::<i32>() {
        return Some(year);
    }

    let value = text.parse::<f64>().ok()?;
    if value.is_finite()
        && value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX)
    {
        #[allow(clippy::cast_possible_truncation)]
        return Some(value as i32);
    }
    None
}

/// Parse a numeric indicator cell
///
/// Blank cells, `..` placeholders, non-numeric text and non-finite numbers
/// are all unset.
#[must_use]
pub fn parse_value(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
