use chrono::{DateTime, Utc};

/// Format a value with comma-grouped digits and a fixed number of decimal
/// places.
///
/// Download counts are whole numbers in practice, but the aggregation works
/// in `f64`, so any rounding happens here at the display edge.
///
/// # Examples
///
/// ```
/// use poddash_core::formatting::format_number;
///
/// assert_eq!(format_number(3450.0, 0), "3,450");
/// assert_eq!(format_number(1250300.0, 0), "1,250,300");
/// assert_eq!(format_number(250.5, 1), "250.5");
/// assert_eq!(format_number(-42.0, 0), "-42");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    let negative = value < 0.0;
    let abs_value = value.abs();

    // Nudge by a value-scaled epsilon before rounding so binary floats that
    // sit just under a decimal midpoint still round the way the decimal reads.
    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    let integer_part = rounded.trunc() as u64;
    let grouped = group_thousands(&integer_part.to_string());

    let result = if decimals == 0 {
        grouped
    } else {
        // "{:.1}" of the fraction yields e.g. "0.5"; keep everything after
        // the leading zero.
        let frac = rounded - rounded.trunc();
        let frac_str = format!("{:.prec$}", frac, prec = decimals as usize);
        format!("{}{}", grouped, &frac_str[1..])
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format a download count for the stat cards: truncated to an integer with
/// thousands separators, matching the original dashboard's `int(x):,` output.
///
/// `NaN` (from a malformed source cell) renders as the literal `"NaN"` so a
/// degraded value stays visible without failing the whole page.
///
/// # Examples
///
/// ```
/// use poddash_core::formatting::format_downloads;
///
/// assert_eq!(format_downloads(1234567.9), "1,234,567");
/// assert_eq!(format_downloads(0.0), "0");
/// assert_eq!(format_downloads(f64::NAN), "NaN");
/// ```
pub fn format_downloads(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    format_number(value.trunc(), 0)
}

/// Format a publish timestamp for display, e.g. `"February 01, 2023"`.
pub fn format_publish_date(ts: DateTime<Utc>) -> String {
    ts.format("%B %d, %Y").to_string()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Comma-group an unsigned integer string, three digits at a time from the
/// right.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, &b) in bytes.iter().enumerate() {
        let remaining = bytes.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push(',');
        }
        out.push(b as char);
    }
    out
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // ── format_number ────────────────────────────────────────────────────────

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_number_no_thousands() {
        assert_eq!(format_number(123.456, 2), "123.46");
    }

    #[test]
    fn test_format_number_with_thousands() {
        assert_eq!(format_number(1_234.5, 1), "1,234.5");
    }

    #[test]
    fn test_format_number_millions() {
        assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-9_876.5, 1), "-9,876.5");
    }

    #[test]
    fn test_format_number_exact_thousands() {
        assert_eq!(format_number(1_000.0, 0), "1,000");
    }

    // ── format_downloads ─────────────────────────────────────────────────────

    #[test]
    fn test_format_downloads_truncates() {
        assert_eq!(format_downloads(249.9), "249");
    }

    #[test]
    fn test_format_downloads_thousands() {
        assert_eq!(format_downloads(1_250_300.0), "1,250,300");
    }

    #[test]
    fn test_format_downloads_zero() {
        assert_eq!(format_downloads(0.0), "0");
    }

    #[test]
    fn test_format_downloads_nan_is_visible() {
        assert_eq!(format_downloads(f64::NAN), "NaN");
    }

    // ── format_publish_date ──────────────────────────────────────────────────

    #[test]
    fn test_format_publish_date() {
        let ts = Utc.with_ymd_and_hms(2023, 2, 1, 9, 0, 0).unwrap();
        assert_eq!(format_publish_date(ts), "February 01, 2023");
    }

    #[test]
    fn test_format_publish_date_december() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(format_publish_date(ts), "December 25, 2024");
    }

    // ── group_thousands (via format_number) ──────────────────────────────────

    #[test]
    fn test_group_thousands_one_digit() {
        assert_eq!(format_number(5.0, 0), "5");
    }

    #[test]
    fn test_group_thousands_four_digits() {
        assert_eq!(format_number(1234.0, 0), "1,234");
    }

    #[test]
    fn test_group_thousands_seven_digits() {
        assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
    }
}
