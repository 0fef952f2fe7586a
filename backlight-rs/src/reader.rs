//! Parsing of the brightness attribute's text content.

/// Sentinel returned when the attribute does not hold a usable brightness.
pub const INVALID_BRIGHTNESS: i64 = -1;

/// Parse raw attribute content into a brightness reading.
///
/// A single trailing newline is stripped before parsing. Anything that is
/// not a base-10 integer, or that parses to zero or less, yields
/// [`INVALID_BRIGHTNESS`]. Positive values are returned unchanged, without
/// clamping to any bound.
pub fn current_brightness(raw: &str) -> i64 {
    let contents = raw.strip_suffix('\n').unwrap_or(raw);

    match contents.parse::<i64>() {
        Ok(value) if value > 0 => value,
        _ => INVALID_BRIGHTNESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_values_round_through() {
        for value in [1, 50, 250, 750, 999, 1000, 123_456] {
            assert_eq!(current_brightness(&format!("{}\n", value)), value);
        }
    }

    #[test]
    fn test_without_newline() {
        assert_eq!(current_brightness("420"), 420);
    }

    #[test]
    fn test_non_positive_is_invalid() {
        assert_eq!(current_brightness("0\n"), INVALID_BRIGHTNESS);
        assert_eq!(current_brightness("-5\n"), INVALID_BRIGHTNESS);
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert_eq!(current_brightness("abc\n"), INVALID_BRIGHTNESS);
        assert_eq!(current_brightness(""), INVALID_BRIGHTNESS);
        assert_eq!(current_brightness("\n"), INVALID_BRIGHTNESS);
        assert_eq!(current_brightness("12.5\n"), INVALID_BRIGHTNESS);
        assert_eq!(current_brightness(" 300\n"), INVALID_BRIGHTNESS);
    }

    #[test]
    fn test_only_one_newline_stripped() {
        assert_eq!(current_brightness("300\n\n"), INVALID_BRIGHTNESS);
        assert_eq!(current_brightness("300\r\n"), INVALID_BRIGHTNESS);
    }

    #[test]
    fn test_overflow_is_invalid() {
        assert_eq!(
            current_brightness("99999999999999999999999\n"),
            INVALID_BRIGHTNESS
        );
    }
}
