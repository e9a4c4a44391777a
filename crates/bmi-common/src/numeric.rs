//! Number formatting and parsing helpers.
//!
//! Measurements and BMI values are shown with at most one fractional digit,
//! and the fractional digit is dropped entirely when it would be zero.

/// Formats a floating-point number with at most one fractional digit.
///
/// Rounds to the nearest tenth and suppresses a trailing `.0`, so whole
/// values print without a decimal point.
///
/// # Examples
///
/// ```
/// use bmi_common::format_one_decimal;
///
/// assert_eq!(format_one_decimal(40.0), "40");
/// assert_eq!(format_one_decimal(23.148), "23.1");
/// assert_eq!(format_one_decimal(177.8), "177.8");
/// assert_eq!(format_one_decimal(0.0), "0");
/// ```
pub fn format_one_decimal(v: f64) -> String {
    let s = format!("{v:.1}");
    match s.strip_suffix(".0") {
        // A tiny negative value rounds to "-0.0"; show it as plain zero.
        Some("-0") => "0".to_string(),
        Some(whole) => whole.to_string(),
        None => s,
    }
}

/// The value exactly as [`format_one_decimal`] shows it, parsed back.
///
/// Threshold checks on this value agree with the printed number, ties included.
///
/// # Examples
///
/// ```
/// use bmi_common::round_to_display;
///
/// assert_eq!(round_to_display(18.499_999_999_999_996), 18.5);
/// assert_eq!(round_to_display(18.45), 18.4);
/// assert_eq!(round_to_display(23.148), 23.1);
/// ```
pub fn round_to_display(v: f64) -> f64 {
    format!("{v:.1}").parse().unwrap_or(v)
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
///
/// Surrounding whitespace is ignored.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_one_decimal_whole_values() {
        assert_eq!(format_one_decimal(180.0), "180");
        assert_eq!(format_one_decimal(75.0), "75");
        assert_eq!(format_one_decimal(40.0), "40");
        assert_eq!(format_one_decimal(1000.0), "1000");
    }

    #[test]
    fn test_format_one_decimal_rounds_to_tenths() {
        assert_eq!(format_one_decimal(81.632_653), "81.6");
        assert_eq!(format_one_decimal(25.823), "25.8");
        assert_eq!(format_one_decimal(18.499_999_9), "18.5");
        assert_eq!(format_one_decimal(29.96), "30");
    }

    #[test]
    fn test_format_one_decimal_negative_zero() {
        assert_eq!(format_one_decimal(-0.01), "0");
        assert_eq!(format_one_decimal(-1.26), "-1.3");
    }

    #[test]
    fn test_round_to_display() {
        assert_eq!(round_to_display(40.0), 40.0);
        assert_eq!(round_to_display(25.822_625_572_781_337), 25.8);
        assert_eq!(round_to_display(29.96), 30.0);
        assert!(round_to_display(f64::NAN).is_nan());
    }

    #[test]
    fn test_round_to_display_matches_formatter_at_ties() {
        for v in [18.45, 24.95, 29.95, 0.25, 0.35, 100.05] {
            assert_eq!(
                round_to_display(v).to_string(),
                format_one_decimal(v),
                "value {v}"
            );
        }
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("  "), None);
        assert_eq!(parse_f64("59.94"), Some(59.94));
        assert_eq!(parse_f64("  180  "), Some(180.0));
        assert_eq!(parse_f64("-3"), Some(-3.0));
        assert_eq!(parse_f64("tall"), None);
        assert_eq!(parse_f64("1,80"), None);
    }
}
