/// Renders a value the way the data file's original consumers printed doubles:
/// shortest round-trip digits, always a fractional part, and `1.0E7` style
/// scientific notation outside of [1e-3, 1e7).
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug output keeps the trailing ".0" and stays in plain notation in this range.
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{}E{}", mantissa, exponent),
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_keep_fraction() {
        assert_eq!(format_amount(100.0), "100.0");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(-0.0), "-0.0");
        assert_eq!(format_amount(-25.0), "-25.0");
    }

    #[test]
    fn test_shortest_digits() {
        assert_eq!(format_amount(250.5), "250.5");
        assert_eq!(format_amount(2.1), "2.1");
        assert_eq!(format_amount(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_amount(1234567.25), "1234567.25");
        assert_eq!(format_amount(0.001), "0.001");
    }

    #[test]
    fn test_scientific_outside_plain_range() {
        assert_eq!(format_amount(1e7), "1.0E7");
        assert_eq!(format_amount(12345678.0), "1.2345678E7");
        assert_eq!(format_amount(0.00015), "1.5E-4");
        assert_eq!(format_amount(-2e10), "-2.0E10");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "Infinity");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-Infinity");
    }
}
