/// Rendered in place of a value the source did not report.
pub const PLACEHOLDER: &str = "—";

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

pub fn format_count(value: Option<u64>) -> String {
    let Some(value) = value else {
        return PLACEHOLDER.to_string();
    };

    match value {
        v if v < THOUSAND => v.to_string(),
        v if v < MILLION => abbreviate(v, THOUSAND, "k"),
        v => abbreviate(v, MILLION, "M"),
    }
}

// Rounds to one decimal place, half up, in integer arithmetic.
fn abbreviate(value: u64, divisor: u64, suffix: &str) -> String {
    let tenths = (u128::from(value) * 10 + u128::from(divisor) / 2) / u128::from(divisor);
    let whole = tenths / 10;
    let fraction = tenths % 10;

    if fraction == 0 {
        format!("{}{}", whole, suffix)
    } else {
        format!("{}.{}{}", whole, fraction, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(format_count(Some(0)), "0");
        assert_eq!(format_count(Some(7)), "7");
        assert_eq!(format_count(Some(999)), "999");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_count(Some(1000)), "1k");
        assert_eq!(format_count(Some(2000)), "2k");
        assert_eq!(format_count(Some(2500)), "2.5k");
        assert_eq!(format_count(Some(1049)), "1k");
        assert_eq!(format_count(Some(1050)), "1.1k");
        assert_eq!(format_count(Some(999_999)), "1000k");
    }

    #[test]
    fn test_millions() {
        assert_eq!(format_count(Some(1_000_000)), "1M");
        assert_eq!(format_count(Some(1_500_000)), "1.5M");
        assert_eq!(format_count(Some(u64::MAX)), "18446744073709.6M");
    }

    #[test]
    fn test_absent_value_uses_placeholder() {
        assert_eq!(format_count(None), PLACEHOLDER);
    }

    #[test]
    fn test_never_renders_trailing_zero_fraction() {
        let samples = [
            999, 1000, 1001, 1950, 1999, 10_000, 99_949, 99_950, 123_456, 999_999,
            1_000_000, 1_049_999, 2_000_000, 12_345_678, 999_999_999,
        ];
        for value in samples {
            let text = format_count(Some(value));
            assert!(!text.contains(".0k"), "{} -> {}", value, text);
            assert!(!text.contains(".0M"), "{} -> {}", value, text);
        }
    }
}
